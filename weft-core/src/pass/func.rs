use std::{error::Error as StdError, marker::PhantomData};

use crate::{Pass, Plain};

/// A pass built from a function returning a plain value.
///
/// The error type is left open so the pass slots into a chain with any
/// error type; the function itself cannot fail.
pub struct FnPass<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> FnPass<F, I, O, E> {
    /// Creates a new function-based pass.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, O, E> Clone for FnPass<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<Cx, F, I, O, E> Pass<Cx> for FnPass<F, I, O, E>
where
    F: Fn(I) -> O,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Outcome = Plain<O>;
    type Error = E;

    fn call(&self, _this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        Ok(Plain((self.function)(input)))
    }
}

/// A pass built from a function returning a next call.
pub struct FnCall<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> FnCall<F, I, O, E> {
    /// Creates a new directive-returning pass.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, O, E> Clone for FnCall<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<Cx, F, I, O, E> Pass<Cx> for FnCall<F, I, O, E>
where
    F: Fn(I) -> O,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Outcome = O;

    type Error = E;

    fn call(&self, _this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        Ok((self.function)(input))
    }
}

/// A pass built from a fallible function.
pub struct TryFn<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> TryFn<F, I, O, E> {
    /// Creates a new fallible function-based pass.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, O, E> Clone for TryFn<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<Cx, F, I, O, E> Pass<Cx> for TryFn<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Outcome = Plain<O>;
    type Error = E;

    fn call(&self, _this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        (self.function)(input).map(Plain)
    }
}

/// A receiver-aware pass returning a plain value.
///
/// The function observes the receiver in effect; replacing the receiver for
/// later passes is done with [`next_this_and_args`](crate::next_this_and_args)
/// instead.
pub struct WithThisFn<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> WithThisFn<F, I, O, E> {
    /// Creates a new receiver-aware pass.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, O, E> Clone for WithThisFn<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<Cx, F, I, O, E> Pass<Cx> for WithThisFn<F, I, O, E>
where
    F: Fn(Option<&Cx>, I) -> O,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Outcome = Plain<O>;
    type Error = E;

    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        Ok(Plain((self.function)(this, input)))
    }
}

/// A receiver-aware pass returning a next call.
pub struct WithThisCall<F, I, O, E> {
    function: F,
    _marker: PhantomData<(I, O, E)>,
}

impl<F, I, O, E> WithThisCall<F, I, O, E> {
    /// Creates a new receiver-aware directive-returning pass.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, O, E> Clone for WithThisCall<F, I, O, E> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<Cx, F, I, O, E> Pass<Cx> for WithThisCall<F, I, O, E>
where
    F: Fn(Option<&Cx>, I) -> O,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Outcome = O;
    type Error = E;

    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        Ok((self.function)(this, input))
    }
}
