#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Chain, NextCall, NextThru};

/// Calls the next pass with an explicit argument tuple.
///
/// Built by [`next_args()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct NextArgs<A> {
    args: A,
}

/// Constructs a next call that invokes the next pass with the given
/// argument tuple.
///
/// An argument list is a tuple here, so the next pass's input type is the
/// tuple itself. The receiver in effect is preserved. When returned from
/// the last pass, the chain's result is the tuple.
///
/// # Example
///
/// ```
/// use weft_core::{call_thru_call, next_args};
///
/// let chain = call_thru_call(|x: i32| next_args((x + 1, x - 1)))
///     .then(|(a, b): (i32, i32)| a * b);
///
/// assert_eq!(chain.call(4), 15);
/// ```
pub const fn next_args<A>(args: A) -> NextArgs<A> {
    NextArgs { args }
}

impl<A> NextCall for NextArgs<A> {
    const KIND: &'static str = "default";

    type Last = A;

    fn last(self) -> Self::Last {
        self.args
    }
}

impl<Cx, C, A> NextThru<Cx, C> for NextArgs<A>
where
    C: Chain<Cx, Input = A>,
{
    type Next = C::Output;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        rest.thread(this, self.args)
    }
}

/// Calls the next pass with a new receiver and an explicit argument tuple.
///
/// Built by [`next_this_and_args()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct NextThisAndArgs<Cx, A> {
    this: Cx,
    args: A,
}

/// Constructs a next call that replaces the receiver for the remaining
/// passes and invokes the next one with the given argument tuple.
///
/// This directive and [`Args::with_this`](crate::Args::with_this) are the
/// only ways to change the receiver mid-chain; every other step forwards
/// the receiver already in effect. When returned from the last pass, the
/// chain's result is the tuple and the receiver is discarded.
pub const fn next_this_and_args<Cx, A>(this: Cx, args: A) -> NextThisAndArgs<Cx, A> {
    NextThisAndArgs { this, args }
}

impl<Cx, A> NextCall for NextThisAndArgs<Cx, A> {
    const KIND: &'static str = "default";

    type Last = A;

    fn last(self) -> Self::Last {
        self.args
    }
}

impl<Cx, C, A> NextThru<Cx, C> for NextThisAndArgs<Cx, A>
where
    C: Chain<Cx, Input = A>,
{
    type Next = C::Output;

    fn next(self, _this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        rest.thread(Some(self.this), self.args)
    }
}
