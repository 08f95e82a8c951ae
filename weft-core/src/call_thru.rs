use std::convert::Infallible;

use crate::{
    chain::{Append, Identity, Tail},
    pass::{FnCall, FnPass, TryFn, WithThisFn},
    Args, Chain, Pass, Plain,
};

/// An ordered sequence of passes composed into one callable.
///
/// Built with [`call_thru()`], [`call_thru_call()`],
/// [`CallThru::from_pass()`], or [`CallThru::identity()`], and extended one
/// pass at a time with the `then_*` methods. Invoking the finished chain
/// feeds the input to the first pass; each pass's outcome then decides how
/// the remaining passes run.
///
/// Chains whose passes cannot fail are invoked with [`call()`] or
/// [`call_with()`]; fallible chains with [`try_call()`] and
/// [`try_call_with()`]. [`invoke()`] seeds the chain from an [`Args`]
/// tuple. A `CallThru` is itself a [`Pass`], so finished chains compose
/// into larger ones via [`then_pass()`](CallThru::then_pass).
///
/// # Example
///
/// ```
/// use weft_core::call_thru;
///
/// let chain = call_thru(|x: i32| x + 1).then(|x: i32| x * 2);
///
/// assert_eq!(chain.call(3), 8);
/// ```
///
/// [`call()`]: CallThru::call
/// [`call_with()`]: CallThru::call_with
/// [`try_call()`]: CallThru::try_call
/// [`try_call_with()`]: CallThru::try_call_with
/// [`invoke()`]: CallThru::invoke
#[derive(Clone)]
pub struct CallThru<C> {
    chain: C,
}

/// Starts a chain with a pass returning a plain value.
pub const fn call_thru<F, I, O, E>(pass: F) -> CallThru<Tail<FnPass<F, I, O, E>>>
where
    F: Fn(I) -> O,
{
    CallThru {
        chain: Tail {
            pass: FnPass::new(pass),
        },
    }
}

/// Starts a chain with a pass returning a next call.
pub const fn call_thru_call<F, I, O, E>(pass: F) -> CallThru<Tail<FnCall<F, I, O, E>>>
where
    F: Fn(I) -> O,
{
    CallThru {
        chain: Tail {
            pass: FnCall::new(pass),
        },
    }
}

impl<T> CallThru<Identity<T>> {
    /// The chain of zero passes: returns its input unchanged.
    pub const fn identity() -> Self {
        CallThru {
            chain: Identity::new(),
        }
    }
}

impl<T> Default for CallThru<Identity<T>> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<P> CallThru<Tail<P>> {
    /// Starts a chain from any [`Pass`] implementation.
    pub const fn from_pass(pass: P) -> Self {
        CallThru {
            chain: Tail { pass },
        }
    }
}

impl<C> CallThru<C> {
    /// Appends a pass returning a plain value; the value becomes the next
    /// pass's sole input.
    ///
    /// A directive returned here is inert data — use
    /// [`then_call()`](CallThru::then_call) for a pass whose return value
    /// steers the chain.
    pub fn then<F, I, O, E>(self, pass: F) -> CallThru<C::Appended>
    where
        F: Fn(I) -> O,
        C: Append<FnPass<F, I, O, E>>,
    {
        CallThru {
            chain: self.chain.append(FnPass::new(pass)),
        }
    }

    /// Appends a pass returning a next call, which decides how the
    /// remaining passes run.
    pub fn then_call<F, I, O, E>(self, pass: F) -> CallThru<C::Appended>
    where
        F: Fn(I) -> O,
        C: Append<FnCall<F, I, O, E>>,
    {
        CallThru {
            chain: self.chain.append(FnCall::new(pass)),
        }
    }

    /// Appends a fallible pass; an `Err` aborts the chain.
    pub fn then_try<F, I, O, E>(self, pass: F) -> CallThru<C::Appended>
    where
        F: Fn(I) -> Result<O, E>,
        C: Append<TryFn<F, I, O, E>>,
    {
        CallThru {
            chain: self.chain.append(TryFn::new(pass)),
        }
    }

    /// Appends a receiver-aware pass returning a plain value.
    pub fn then_with_this<F, I, O, E>(self, pass: F) -> CallThru<C::Appended>
    where
        C: Append<WithThisFn<F, I, O, E>>,
    {
        CallThru {
            chain: self.chain.append(WithThisFn::new(pass)),
        }
    }

    /// Appends any [`Pass`] implementation — including another `CallThru`.
    pub fn then_pass<P>(self, pass: P) -> CallThru<C::Appended>
    where
        C: Append<P>,
    {
        CallThru {
            chain: self.chain.append(pass),
        }
    }

    /// Invokes the chain without a receiver.
    pub fn call(&self, input: <C as Chain<()>>::Input) -> <C as Chain<()>>::Output
    where
        C: Chain<(), Error = Infallible>,
    {
        unwrap_infallible(self.chain.thread(None, input))
    }

    /// Invokes the chain without a receiver, surfacing pass failures.
    pub fn try_call(
        &self,
        input: <C as Chain<()>>::Input,
    ) -> Result<<C as Chain<()>>::Output, <C as Chain<()>>::Error>
    where
        C: Chain<()>,
    {
        self.chain.thread(None, input)
    }

    /// Invokes the chain with a receiver, which stays in effect for every
    /// pass unless a directive replaces it.
    pub fn call_with<Cx>(&self, this: Cx, input: <C as Chain<Cx>>::Input) -> <C as Chain<Cx>>::Output
    where
        C: Chain<Cx, Error = Infallible>,
    {
        unwrap_infallible(self.chain.thread(Some(this), input))
    }

    /// Invokes the chain with a receiver, surfacing pass failures.
    pub fn try_call_with<Cx>(
        &self,
        this: Cx,
        input: <C as Chain<Cx>>::Input,
    ) -> Result<<C as Chain<Cx>>::Output, <C as Chain<Cx>>::Error>
    where
        C: Chain<Cx>,
    {
        self.chain.thread(Some(this), input)
    }

    /// Invokes the chain from a receiver-and-arguments tuple.
    pub fn invoke<Cx>(&self, args: Args<Cx, <C as Chain<Cx>>::Input>) -> <C as Chain<Cx>>::Output
    where
        C: Chain<Cx, Error = Infallible>,
    {
        let (this, values) = args.into_parts();

        unwrap_infallible(self.chain.thread(this, values))
    }

    /// Invokes the chain from a receiver-and-arguments tuple, surfacing
    /// pass failures.
    pub fn try_invoke<Cx>(
        &self,
        args: Args<Cx, <C as Chain<Cx>>::Input>,
    ) -> Result<<C as Chain<Cx>>::Output, <C as Chain<Cx>>::Error>
    where
        C: Chain<Cx>,
    {
        let (this, values) = args.into_parts();

        self.chain.thread(this, values)
    }
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A finished chain is a pass: chains compose into larger chains.
impl<Cx, C> Pass<Cx> for CallThru<C>
where
    Cx: Clone,
    C: Chain<Cx>,
{
    type Input = C::Input;
    type Outcome = Plain<C::Output>;
    type Error = C::Error;

    fn call(&self, this: Option<&Cx>, input: Self::Input) -> Result<Self::Outcome, Self::Error> {
        self.chain.thread(this.cloned(), input).map(Plain)
    }
}

/// A finished chain is also a chain, so directives can resolve against it
/// directly — useful when testing custom directive implementations.
impl<Cx, C> Chain<Cx> for CallThru<C>
where
    C: Chain<Cx>,
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn thread(&self, this: Option<Cx>, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.chain.thread(this, input)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use thiserror::Error;

    use crate::{next_skip, Args, WithThisFn};

    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("the pass failed")]
    struct PassFailed;

    #[test]
    fn zero_passes_behave_as_identity() {
        let identity = CallThru::identity();

        assert_eq!(identity.call(7), 7);
    }

    #[test]
    fn calls_a_single_pass() {
        let chain = call_thru(|(a, b): (&str, &str)| format!("{a}{b}"));

        assert_eq!(chain.call(("arg1", "arg2")), "arg1arg2");
    }

    #[test]
    fn chains_two_passes() {
        let chain = call_thru(|x: i32| x + 1).then(|x: i32| x * 2);

        assert_eq!(chain.call(3), 8);
    }

    #[test]
    fn chains_three_passes_in_configured_order() {
        let chain = call_thru(|text: &str| text.len())
            .then(|len: usize| len * 10)
            .then(|scaled: usize| format!("scaled to {scaled}"));

        assert_eq!(chain.call("four"), "scaled to 40");
    }

    #[test]
    fn each_pass_receives_the_previous_result_as_its_sole_input() {
        let seen = Cell::new((0, 0));
        let chain = call_thru(|x: i32| {
            seen.set((seen.get().0 + 1, x));
            x + 1
        })
        .then(|x: i32| {
            seen.set((seen.get().0 + 1, x));
            x
        });

        chain.call(41);

        assert_eq!(seen.get(), (2, 42));
    }

    #[test]
    fn plain_vectors_are_never_unpacked() {
        let chain = call_thru(|x: i32| vec![x, x + 1]).then(|v: Vec<i32>| v.len());

        assert_eq!(chain.call(1), 2);
    }

    #[test]
    fn empty_vectors_flow_as_plain_values() {
        let chain = call_thru(|_: i32| Vec::<i32>::new()).then(|v: Vec<i32>| v.len());

        assert_eq!(chain.call(1), 0);
    }

    #[test]
    fn functions_flow_as_plain_values() {
        fn add_one(x: i32) -> i32 {
            x + 1
        }

        let chain =
            call_thru(|_: i32| add_one as fn(i32) -> i32).then(|f: fn(i32) -> i32| f(10));

        assert_eq!(chain.call(0), 11);
    }

    #[test]
    fn a_failing_pass_aborts_the_chain() {
        let later_calls = Cell::new(0);
        let chain = call_thru(|x: i32| x)
            .then_try(|_: i32| Err::<i32, PassFailed>(PassFailed))
            .then(|x: i32| {
                later_calls.set(later_calls.get() + 1);
                x
            });

        assert_eq!(chain.try_call(3), Err(PassFailed));
        assert_eq!(later_calls.get(), 0, "no pass may run after a failure");
    }

    #[test]
    fn plain_passes_adopt_the_chain_error_type() {
        let chain = call_thru(|x: i32| x + 1)
            .then_try(|x: i32| if x > 0 { Ok(x) } else { Err(PassFailed) })
            .then(|x: i32| x * 2);

        assert_eq!(chain.try_call(1), Ok(4));
        assert_eq!(chain.try_call(-5), Err(PassFailed));
    }

    #[test]
    fn receiver_is_visible_to_every_pass() {
        let chain = CallThru::from_pass(WithThisFn::new(|this: Option<&i32>, x: i32| {
            x + this.copied().unwrap_or(0)
        }))
        .then(|x: i32| x * 2)
        .then_with_this(|this: Option<&i32>, x: i32| x + this.copied().unwrap_or(0));

        assert_eq!(chain.call_with(100, 1), 302);
    }

    #[test]
    fn receiver_is_absent_unless_supplied() {
        let receiver_seen = Cell::new(false);
        let chain = CallThru::from_pass(WithThisFn::new(|this: Option<&()>, x: i32| {
            receiver_seen.set(this.is_some());
            x
        }));

        chain.call(1);

        assert!(!receiver_seen.get());
    }

    #[test]
    fn invoke_seeds_the_chain_from_an_args_tuple() {
        let chain = call_thru(|(a, b): (i32, i32)| a * b).then(|x: i32| x + 1);

        assert_eq!(chain.invoke(Args::<(), _>::of((6, 7))), 43);
    }

    #[test]
    fn invoke_degrades_to_a_direct_call_on_the_identity_chain() {
        let identity = CallThru::identity();

        assert_eq!(identity.invoke(Args::<(), _>::of("value")), "value");
    }

    #[test]
    fn chains_compose_into_larger_chains() {
        let add_four = call_thru(|x: i32| x + 1)
            .then(|x: i32| x + 1)
            .then(|x: i32| x + 2);
        let double_it = call_thru(|x: i32| x * 2);

        let combined = add_four.then_pass(double_it);

        assert_eq!(combined.call(0), 8);
    }

    #[test]
    fn skipping_chains_surface_the_sentinel_through_composition() {
        let inner = call_thru_call(|x: i32| if x > 0 { next_skip() } else { crate::OrSkip::Next(x) })
            .then(|x: i32| x - 1);
        let outer = call_thru(|x: i32| x * 2).then_pass(inner);

        assert_eq!(outer.call(-3), Some(-7));
        assert_eq!(outer.call(3), None);
    }
}
