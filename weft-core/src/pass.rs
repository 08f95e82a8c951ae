mod func;
mod inspect;
mod map_err;

pub use func::{FnCall, FnPass, TryFn, WithThisCall, WithThisFn};
pub use inspect::Inspect;
pub use map_err::MapErr;

use std::error::Error as StdError;

/// One step in a call chain.
///
/// A pass receives the receiver currently in effect (absent unless the
/// chain was invoked with one) and a single input value, and produces an
/// outcome: a plain value wrapped in [`Plain`](crate::Plain), or a
/// directive such as [`NextArgs`](crate::NextArgs),
/// [`OrSkip`](crate::OrSkip), or [`NextEach`](crate::NextEach).
///
/// Closures become passes through the adapters in this module — the chain
/// builder applies them for you — so implementing `Pass` by hand is only
/// needed for stateful or fallible steps.
///
/// Each pass defines its own `Error` type; all passes of one chain must
/// agree on it, and [`map_err()`](Pass::map_err) adapts a pass whose error
/// type differs. A failing pass aborts the chain.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use weft_core::{CallThru, Pass, Plain};
///
/// struct Doubler;
///
/// impl<Cx> Pass<Cx> for Doubler {
///     type Input = i32;
///     type Outcome = Plain<i32>;
///     type Error = Infallible;
///
///     fn call(&self, _this: Option<&Cx>, input: i32) -> Result<Plain<i32>, Infallible> {
///         Ok(Plain(input * 2))
///     }
/// }
///
/// let chain = CallThru::from_pass(Doubler).then(|x: i32| x + 1);
/// assert_eq!(chain.call(5), 11);
/// ```
pub trait Pass<Cx> {
    type Input;
    type Outcome;
    type Error: StdError + Send + Sync + 'static;

    /// Calls the pass with the receiver in effect and an input value.
    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error>;

    /// Observes inputs and outcomes without modifying behavior.
    ///
    /// `input_handler` runs before the pass, `outcome_handler` after a
    /// successful call. Errors pass through unobserved.
    fn inspect<IH, OH>(self, input_handler: IH, outcome_handler: OH) -> Inspect<Self, IH, OH>
    where
        Self: Sized,
        IH: Fn(&Self::Input),
        OH: Fn(&Self::Outcome),
    {
        Inspect::new(self, input_handler, outcome_handler)
    }

    /// Transforms this pass's error into a different type.
    fn map_err<M, E>(self, error_map: M) -> MapErr<Self, M, E>
    where
        Self: Sized,
        M: Fn(Self::Error) -> E,
        E: StdError + Send + Sync + 'static,
    {
        MapErr::new(self, error_map)
    }
}
