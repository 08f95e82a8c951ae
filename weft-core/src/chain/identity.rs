use std::{convert::Infallible, marker::PhantomData};

use crate::Chain;

/// A chain with no passes: returns its input unchanged.
pub struct Identity<T> {
    _marker: PhantomData<T>,
}

impl<T> Identity<T> {
    /// Creates a new identity chain.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<Cx, T> Chain<Cx> for Identity<T> {
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn thread(&self, _this: Option<Cx>, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_input_unchanged() {
        let numbers = Identity::new();
        assert_eq!(numbers.thread(None::<()>, 7), Ok(7));

        let text = Identity::new();
        assert_eq!(text.thread(None::<()>, "text"), Ok("text"));
    }

    #[test]
    fn ignores_the_receiver() {
        let identity = Identity::new();

        assert_eq!(identity.thread(Some("receiver"), 7), Ok(7));
    }
}
