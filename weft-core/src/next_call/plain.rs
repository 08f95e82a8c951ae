#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Chain, NextCall, NextThru};

/// A plain value lifted into the next-call protocol.
///
/// The engine wraps the return value of every plain pass in `Plain`, which
/// forwards the value to the next pass as its sole input and, at the end of
/// a chain, unwraps to the value itself. The wrapping is what keeps
/// ordinary values — including empty vectors and functions — from ever
/// acting as directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Plain<T>(pub T);

impl<T> NextCall for Plain<T> {
    const KIND: &'static str = "default";

    type Last = T;

    fn last(self) -> Self::Last {
        self.0
    }
}

impl<Cx, C, T> NextThru<Cx, C> for Plain<T>
where
    C: Chain<Cx, Input = T>,
{
    type Next = C::Output;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        rest.thread(this, self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Identity;

    use super::*;

    #[test]
    fn last_unwraps_the_value() {
        assert_eq!(Plain("some").last(), "some");
    }

    #[test]
    fn next_feeds_the_value_to_the_rest_of_the_chain() {
        let rest = Identity::new();

        assert_eq!(Plain(4).next(None::<()>, &rest), Ok(4));
    }
}
