#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Chain, NextCall, NextThru};

/// Outcome of a pass that may skip the rest of the chain.
///
/// [`Next`](OrSkip::Next) continues with a value; [`Skip`](OrSkip::Skip)
/// terminates the chain immediately — no later pass runs — and the chain's
/// result is the skip sentinel, `None`. A chain containing a skip-capable
/// pass therefore yields `Option`.
///
/// A pass that always skips is written with [`next_skip()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum OrSkip<T> {
    /// Continue the chain with this value.
    Next(T),
    /// Skip the remaining passes; the chain yields `None`.
    Skip,
}

/// Constructs a next call that skips the rest of the chain.
///
/// The skip sentinel carries no data, so this is a plain constant of the
/// [`OrSkip::Skip`] variant. `T` is the input type of the pass that would
/// have run next.
///
/// # Example
///
/// ```
/// use weft_core::{call_thru_call, next_skip};
///
/// let chain = call_thru_call(|_: i32| next_skip::<i32>()).then(|x: i32| x * 2);
///
/// assert_eq!(chain.call(3), None);
/// ```
pub const fn next_skip<T>() -> OrSkip<T> {
    OrSkip::Skip
}

impl<T> NextCall for OrSkip<T> {
    const KIND: &'static str = "skip";

    type Last = Option<T>;

    fn last(self) -> Self::Last {
        match self {
            Self::Next(value) => Some(value),
            Self::Skip => None,
        }
    }
}

impl<Cx, C, T> NextThru<Cx, C> for OrSkip<T>
where
    C: Chain<Cx, Input = T>,
{
    type Next = Option<C::Output>;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<<Self as NextThru<Cx, C>>::Next, C::Error> {
        match self {
            Self::Next(value) => rest.thread(this, value).map(Some),
            Self::Skip => Ok(None),
        }
    }
}

impl<T> From<Option<T>> for OrSkip<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Next(value),
            None => Self::Skip,
        }
    }
}

impl<T> From<OrSkip<T>> for Option<T> {
    fn from(value: OrSkip<T>) -> Self {
        value.last()
    }
}
