mod custom;
mod plain;

pub use custom::{next_call, FnNextCall};
pub use plain::Plain;

use crate::Chain;

/// A next call: a directive returned by a pass that tells the engine how
/// the chain continues, rather than being the chain's data payload itself.
///
/// Every next call carries a family tag ([`KIND`](NextCall::KIND)) and two
/// projections. This trait is the terminal projection: [`last()`] computes
/// the chain's result when the directive was produced by the final pass.
/// The continuation projection lives on [`NextThru`], which additionally
/// knows the remaining chain's type.
///
/// Whether a value *is* a next call is decided by the type system, never by
/// inspecting the value: a pass added with [`then`](crate::CallThru::then)
/// contributes plain values (implicitly wrapped in [`Plain`]), while a pass
/// added with [`then_call`](crate::CallThru::then_call) contributes
/// directives. An ordinary vector, tuple, or function returned as a plain
/// value is therefore never mistaken for a directive, no matter its shape.
///
/// New directive kinds are added by implementing this trait pair on a fresh
/// type; the engine is generic over the protocol and needs no changes.
///
/// [`last()`]: NextCall::last
pub trait NextCall: Sized {
    /// Identifies the directive family, e.g. `"default"`, `"skip"`,
    /// `"each"`, or `"custom"`.
    const KIND: &'static str;

    /// The chain's result when this directive ends the chain.
    type Last;

    /// Computes the result of a chain that ends at this call.
    fn last(self) -> Self::Last;
}

/// The continuation projection of the next-call protocol.
///
/// [`next()`](NextThru::next) receives the *entire remaining chain* —
/// a closure over every pass that follows, not just the next one — plus the
/// receiver currently in effect. The directive decides how (and whether)
/// the remaining passes run, and its return value becomes the chain's
/// result at this position.
pub trait NextThru<Cx, C>: NextCall
where
    C: Chain<Cx>,
{
    /// The chain's result when further passes remain.
    type Next;

    /// Resolves this directive against the rest of the chain.
    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error>;
}
