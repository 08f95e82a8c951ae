use crate::Pass;

/// A wrapper that observes a pass's inputs and outcomes without modifying
/// behavior.
///
/// Built by [`Pass::inspect()`].
pub struct Inspect<P, IH, OH> {
    pass: P,
    input_handler: IH,
    outcome_handler: OH,
}

impl<P, IH, OH> Inspect<P, IH, OH> {
    pub(crate) const fn new(pass: P, input_handler: IH, outcome_handler: OH) -> Self {
        Self {
            pass,
            input_handler,
            outcome_handler,
        }
    }
}

impl<P: Clone, IH: Clone, OH: Clone> Clone for Inspect<P, IH, OH> {
    fn clone(&self) -> Self {
        Self {
            pass: self.pass.clone(),
            input_handler: self.input_handler.clone(),
            outcome_handler: self.outcome_handler.clone(),
        }
    }
}

impl<Cx, P, IH, OH> Pass<Cx> for Inspect<P, IH, OH>
where
    P: Pass<Cx>,
    IH: Fn(&P::Input),
    OH: Fn(&P::Outcome),
{
    type Input = P::Input;
    type Outcome = P::Outcome;
    type Error = P::Error;

    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        (self.input_handler)(&input);
        let outcome = self.pass.call(this, input)?;
        (self.outcome_handler)(&outcome);
        Ok(outcome)
    }
}
