use crate::{Chain, NextCall, NextThru, Pass};

/// A chain link: one pass followed by the rest of the chain.
///
/// Threading input through a `Link` calls the pass, then resolves its
/// outcome against the rest of the chain via the outcome's continuation
/// projection. The outcome decides whether the remaining passes run at all.
#[derive(Clone)]
pub struct Link<P, C> {
    pub(crate) pass: P,
    pub(crate) rest: C,
}

impl<Cx, P, C> Chain<Cx> for Link<P, C>
where
    P: Pass<Cx>,
    C: Chain<Cx, Error = P::Error>,
    P::Outcome: NextThru<Cx, C>,
{
    type Input = P::Input;
    type Output = <P::Outcome as NextThru<Cx, C>>::Next;
    type Error = P::Error;

    fn thread(&self, this: Option<Cx>, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let outcome = self.pass.call(this.as_ref(), input)?;
        outcome.next(this, &self.rest)
    }
}

/// The terminal link: the last pass of a chain.
///
/// With no passes left to continue into, the outcome's terminal projection
/// supplies the chain's result directly; the continuation projection is
/// never consulted.
#[derive(Clone)]
pub struct Tail<P> {
    pub(crate) pass: P,
}

impl<Cx, P> Chain<Cx> for Tail<P>
where
    P: Pass<Cx>,
    P::Outcome: NextCall,
{
    type Input = P::Input;
    type Output = <P::Outcome as NextCall>::Last;
    type Error = P::Error;

    fn thread(&self, this: Option<Cx>, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let outcome = self.pass.call(this.as_ref(), input)?;
        Ok(outcome.last())
    }
}
