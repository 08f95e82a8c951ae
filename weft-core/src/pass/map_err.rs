use std::{error::Error as StdError, marker::PhantomData};

use crate::Pass;

/// A wrapper that adapts a pass by transforming its error type.
///
/// Built by [`Pass::map_err()`]; the usual way to fit a pass into a chain
/// whose error type differs.
pub struct MapErr<P, M, E> {
    pass: P,
    error_map: M,
    _marker: PhantomData<E>,
}

impl<P, M, E> MapErr<P, M, E> {
    pub(crate) const fn new(pass: P, error_map: M) -> Self {
        Self {
            pass,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<P: Clone, M: Clone, E> Clone for MapErr<P, M, E> {
    fn clone(&self) -> Self {
        Self {
            pass: self.pass.clone(),
            error_map: self.error_map.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Cx, P, M, E> Pass<Cx> for MapErr<P, M, E>
where
    P: Pass<Cx>,
    M: Fn(P::Error) -> E,
    E: StdError + Send + Sync + 'static,
{
    type Input = P::Input;
    type Outcome = P::Outcome;
    type Error = E;

    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        self.pass
            .call(this, input)
            .map_err(|error| (self.error_map)(error))
    }
}
