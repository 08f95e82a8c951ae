use std::marker::PhantomData;

use crate::{Chain, NextCall, NextThru};

/// A next call assembled from two projection closures.
///
/// This is the open extension point of the protocol for one-off directives:
/// `next` receives the receiver in effect and the remaining chain, `last`
/// supplies the terminal result. Both run at most once.
///
/// The continuation closure returns an owned result, so `FnNextCall` suits
/// directives that resolve eagerly. A directive that defers work (as the
/// fan-out directive does) is better written as a named type implementing
/// [`NextCall`] and [`NextThru`] directly.
pub struct FnNextCall<N, L, R, T> {
    next: N,
    last: L,
    _marker: PhantomData<(R, T)>,
}

impl<N: Clone, L: Clone, R, T> Clone for FnNextCall<N, L, R, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            last: self.last.clone(),
            _marker: PhantomData,
        }
    }
}

/// Builds a custom next call from a continuation projection and a terminal
/// projection.
///
/// # Example
///
/// ```
/// use weft_core::{next_call, Chain, Identity, NextCall, NextThru};
///
/// // Resolves the rest of the chain with a doubled value, or falls back
/// // to the value itself at the end of a chain.
/// let doubled = next_call(
///     |this: Option<()>, rest: &Identity<i32>| rest.thread(this, 21 * 2),
///     || 21,
/// );
///
/// assert_eq!(doubled.next(None, &Identity::new()), Ok(42));
/// ```
pub const fn next_call<N, L, R, T>(next: N, last: L) -> FnNextCall<N, L, R, T> {
    FnNextCall {
        next,
        last,
        _marker: PhantomData,
    }
}

impl<N, L, R, T> NextCall for FnNextCall<N, L, R, T>
where
    L: FnOnce() -> T,
{
    const KIND: &'static str = "custom";

    type Last = T;

    fn last(self) -> Self::Last {
        (self.last)()
    }
}

impl<Cx, C, N, L, R, T> NextThru<Cx, C> for FnNextCall<N, L, R, T>
where
    C: Chain<Cx>,
    N: FnOnce(Option<Cx>, &C) -> Result<R, C::Error>,
    L: FnOnce() -> T,
{
    type Next = R;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        (self.next)(this, rest)
    }
}

#[cfg(test)]
mod tests {
    use crate::Identity;

    use super::*;

    #[test]
    fn next_resolves_through_the_supplied_projection() {
        let call = next_call(
            |this: Option<()>, rest: &Identity<i32>| rest.thread(this, 4),
            || 4,
        );

        assert_eq!(call.next(None, &Identity::new()), Ok(4));
    }

    #[test]
    fn last_uses_the_terminal_projection() {
        let call: FnNextCall<_, _, i32, i32> = next_call(
            |this: Option<()>, rest: &Identity<i32>| rest.thread(this, 4),
            || 7,
        );

        assert_eq!(call.last(), 7);
    }

    #[test]
    fn carries_the_custom_kind_tag() {
        fn kind_of<V: NextCall>(_call: &V) -> &'static str {
            V::KIND
        }

        let call: FnNextCall<_, _, i32, i32> = next_call(
            |this: Option<()>, rest: &Identity<i32>| rest.thread(this, 1),
            || 1,
        );

        assert_eq!(kind_of(&call), "custom");
    }
}
