use super::{Link, Tail};

/// Appends a pass to the end of a chain.
///
/// Chains nest to the right so that every pass sees the entire remaining
/// chain as its continuation. Appending therefore rebuilds the spine down
/// to the tail instead of wrapping the chain from the outside.
///
/// No pass or chain bounds are checked here; compatibility between a pass
/// and its successors is enforced where the finished chain is invoked.
pub trait Append<Q>: Sized {
    /// The chain with `pass` appended.
    type Appended;

    fn append(self, pass: Q) -> Self::Appended;
}

impl<P, Q> Append<Q> for Tail<P> {
    type Appended = Link<P, Tail<Q>>;

    fn append(self, pass: Q) -> Self::Appended {
        Link {
            pass: self.pass,
            rest: Tail { pass },
        }
    }
}

impl<P, C, Q> Append<Q> for Link<P, C>
where
    C: Append<Q>,
{
    type Appended = Link<P, C::Appended>;

    fn append(self, pass: Q) -> Self::Appended {
        Link {
            pass: self.pass,
            rest: self.rest.append(pass),
        }
    }
}
