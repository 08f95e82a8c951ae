mod append;
mod identity;
mod link;

pub use append::Append;
pub use identity::Identity;
pub use link::{Link, Tail};

use std::error::Error as StdError;

/// The remaining passes of a call chain, viewed from one position.
///
/// A `Chain` is what a pass's directive resolves against: calling
/// [`thread()`](Chain::thread) runs *every* remaining pass, not just the
/// next one. The engine hands a reference to the remaining chain to each
/// directive's continuation projection, so a directive can invoke the rest
/// of the chain zero times (skip), once (plain forwarding), or many times
/// (fan-out) without knowing how many passes follow.
///
/// `Cx` is the receiver type threaded alongside the positional input. It is
/// sticky: every pass of the chain observes the same receiver unless a
/// directive replaces it. Chains invoked without a receiver use `Cx = ()`.
///
/// All passes of one chain share an error type. A failing pass aborts the
/// remaining passes and surfaces its error unchanged.
pub trait Chain<Cx> {
    type Input;
    type Output;
    type Error: StdError + Send + Sync + 'static;

    /// Threads a receiver and an input value through every remaining pass.
    fn thread(&self, this: Option<Cx>, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
