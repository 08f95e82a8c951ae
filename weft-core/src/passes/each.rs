use std::iter;

use crate::{Chain, NextCall, NextThru, Plain};

/// Fans the remaining passes out over each item of an iterable.
///
/// Built by [`next_each()`] (plain items) or [`next_each_calls()`] (items
/// that are themselves next calls).
#[derive(Clone)]
pub struct NextEach<I> {
    items: I,
}

/// An iterator adapter lifting plain items into the next-call protocol.
pub type PlainItems<I> = iter::Map<
    <I as IntoIterator>::IntoIter,
    fn(<I as IntoIterator>::Item) -> Plain<<I as IntoIterator>::Item>,
>;

/// Constructs a next call that invokes the remaining passes once for each
/// item of `items`.
///
/// Resolution is lazy: the remaining passes run per item as the resulting
/// [`ThreadEach`] sequence is consumed, in source order, and a sequence
/// that is never consumed runs nothing. The sequence can be restarted by
/// cloning it, provided the source iterator is cloneable. When returned
/// from the last pass, the chain's result iterates the items themselves.
///
/// # Example
///
/// ```
/// use weft_core::{call_thru_call, next_each};
///
/// let chain = call_thru_call(|_: i32| next_each(vec![1, 2, 3])).then(|x: i32| x * 10);
/// let results: Vec<i32> = chain.call(0).map(Result::unwrap).collect();
///
/// assert_eq!(results, vec![10, 20, 30]);
/// ```
pub fn next_each<I>(items: I) -> NextEach<PlainItems<I>>
where
    I: IntoIterator,
{
    let lift: fn(I::Item) -> Plain<I::Item> = Plain;

    NextEach {
        items: items.into_iter().map(lift),
    }
}

/// Constructs a next call that fans out over items which are themselves
/// next calls.
///
/// Each item's own continuation decides how the remaining passes run for
/// it: an [`OrSkip::Skip`](crate::OrSkip) item contributes the skip
/// sentinel, a [`NextArgs`](crate::NextArgs) item supplies its argument
/// tuple, and so on. When returned from the last pass, each item
/// contributes its own terminal outcome.
pub fn next_each_calls<I>(items: I) -> NextEach<I::IntoIter>
where
    I: IntoIterator,
{
    NextEach {
        items: items.into_iter(),
    }
}

impl<I> NextCall for NextEach<I>
where
    I: Iterator,
    I::Item: NextCall,
{
    const KIND: &'static str = "each";

    type Last = LastEach<I>;

    fn last(self) -> Self::Last {
        LastEach { items: self.items }
    }
}

impl<Cx, C, I> NextThru<Cx, C> for NextEach<I>
where
    Cx: Clone,
    C: Chain<Cx> + Clone,
    I: Iterator,
    I::Item: NextThru<Cx, C>,
{
    type Next = ThreadEach<I, Cx, C>;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        Ok(ThreadEach {
            items: self.items,
            this,
            rest: rest.clone(),
        })
    }
}

/// A lazy sequence that runs the remaining passes once per source item.
///
/// Each `next()` re-enters the synchronous call path for one item and
/// yields that item's result; a failing pass surfaces as the item's `Err`.
/// Collecting into `Result<Vec<_>, _>` stops at the first failure.
#[derive(Clone)]
pub struct ThreadEach<I, Cx, C> {
    items: I,
    this: Option<Cx>,
    rest: C,
}

impl<I, Cx, C> Iterator for ThreadEach<I, Cx, C>
where
    Cx: Clone,
    C: Chain<Cx>,
    I: Iterator,
    I::Item: NextThru<Cx, C>,
{
    type Item = Result<<I::Item as NextThru<Cx, C>>::Next, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;

        Some(item.next(self.this.clone(), &self.rest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// A lazy sequence of the terminal outcomes of an `each` directive's items.
///
/// Produced when the fan-out directive is returned from the last pass:
/// plain items are yielded unchanged, directive items contribute their own
/// terminal outcome.
#[derive(Clone)]
pub struct LastEach<I> {
    items: I,
}

impl<I> Iterator for LastEach<I>
where
    I: Iterator,
    I::Item: NextCall,
{
    type Item = <I::Item as NextCall>::Last;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.items.next()?.last())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}
