#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::Pass;

/// Arguments for a call, with an optional receiver.
///
/// `Args` seeds a chain — or a single [`Pass`] via [`invoke()`](Args::invoke) —
/// with positional argument values plus a receiver to thread through as the
/// call context. The receiver, once supplied, is sticky: every pass
/// observes it until a directive replaces it.
///
/// The distinction between "an argument tuple" and "a plain value that
/// happens to be a tuple" is carried by this type itself: a bare tuple fed
/// to a chain is always a single plain input, and only an `Args` value
/// supplies a receiver alongside it.
///
/// # Example
///
/// ```
/// use weft_core::{Args, CallThru, WithThisFn};
///
/// let chain = CallThru::from_pass(WithThisFn::new(
///     |this: Option<&i32>, (a, b): (i32, i32)| (a + b) * this.copied().unwrap_or(1),
/// ));
///
/// assert_eq!(chain.invoke(Args::with_this(10, (1, 2))), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Args<T, A> {
    this: Option<T>,
    values: A,
}

impl<T, A> Args<T, A> {
    /// Constructs call arguments without a receiver.
    ///
    /// The receiver type is free so the value fits chains with any context
    /// type; where nothing pins it down, spell it out (`Args::<(), _>::of`)
    /// or invoke the chain directly.
    pub const fn of(values: A) -> Self {
        Self { this: None, values }
    }

    /// Constructs call arguments with an explicit receiver.
    pub const fn with_this(this: T, values: A) -> Self {
        Self {
            this: Some(this),
            values,
        }
    }

    /// The receiver, if one was supplied.
    pub const fn this(&self) -> Option<&T> {
        self.this.as_ref()
    }

    /// The positional argument values.
    pub const fn values(&self) -> &A {
        &self.values
    }

    /// Splits into the receiver and the argument values.
    pub fn into_parts(self) -> (Option<T>, A) {
        (self.this, self.values)
    }

    /// Calls a single pass with this receiver as context and these values
    /// as input.
    ///
    /// Calling a pass with a plain value and no receiver needs no helper:
    /// `pass.call(None, value)` is the same convention without the tuple.
    pub fn invoke<P>(self, pass: &P) -> Result<P::Outcome, P::Error>
    where
        P: Pass<T, Input = A>,
    {
        let (this, values) = self.into_parts();

        pass.call(this.as_ref(), values)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use crate::{FnPass, NextCall, WithThisFn};

    use super::*;

    #[test]
    fn carries_no_receiver_by_default() {
        let args = Args::<&str, _>::of((1, 2));

        assert_eq!(args.this(), None);
        assert_eq!(args.values(), &(1, 2));
    }

    #[test]
    fn carries_an_explicit_receiver() {
        let args = Args::with_this("receiver", (1,));

        assert_eq!(args.this(), Some(&"receiver"));
        assert_eq!(args.values(), &(1,));
    }

    #[test]
    fn invokes_a_pass_with_the_values() {
        let pass: FnPass<_, _, _, Infallible> = FnPass::new(|(a, b): (i32, i32)| a + b);

        let outcome = Args::<(), _>::of((2, 3)).invoke(&pass).unwrap();

        assert_eq!(outcome.last(), 5);
    }

    #[test]
    fn invokes_a_pass_with_the_receiver_as_context() {
        let pass: WithThisFn<_, _, _, Infallible> =
            WithThisFn::new(|this: Option<&i32>, x: i32| x + this.copied().unwrap_or(0));

        let outcome = Args::with_this(40, 2).invoke(&pass).unwrap();

        assert_eq!(outcome.last(), 42);
    }

    #[test]
    fn splits_into_receiver_and_values() {
        let (this, values) = Args::with_this('r', "args").into_parts();

        assert_eq!(this, Some('r'));
        assert_eq!(values, "args");
    }
}
