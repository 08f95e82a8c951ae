//! New directive kinds plug into the chain engine without engine changes.

use std::convert::Infallible;

use weft_core::{
    call_thru_call, next_call, CallThru, Chain, FnNextCall, FnPass, NextCall, NextThru, Tail,
};

/// Runs the remaining passes once per repetition of a seed value.
struct NextRepeat<T> {
    value: T,
    times: usize,
}

impl<T: Clone> NextCall for NextRepeat<T> {
    const KIND: &'static str = "repeat";

    type Last = Vec<T>;

    fn last(self) -> Self::Last {
        vec![self.value; self.times]
    }
}

impl<Cx, C, T> NextThru<Cx, C> for NextRepeat<T>
where
    Cx: Clone,
    T: Clone,
    C: Chain<Cx, Input = T>,
{
    type Next = Vec<C::Output>;

    fn next(self, this: Option<Cx>, rest: &C) -> Result<Self::Next, C::Error> {
        (0..self.times)
            .map(|_| rest.thread(this.clone(), self.value.clone()))
            .collect()
    }
}

#[test]
fn custom_directives_steer_the_chain() {
    let chain = call_thru_call(|x: i32| NextRepeat { value: x, times: 3 }).then(|x: i32| x + 1);

    assert_eq!(chain.call(9), vec![10, 10, 10]);
}

#[test]
fn custom_directives_supply_their_own_terminal_outcome() {
    let chain = call_thru_call(|x: i32| NextRepeat { value: x, times: 2 });

    assert_eq!(chain.call(5), vec![5, 5]);
}

#[test]
fn custom_directives_declare_their_own_kind() {
    assert_eq!(NextRepeat::<i32>::KIND, "repeat");
}

#[test]
fn one_off_directives_are_assembled_from_projections() {
    type Rest = CallThru<Tail<FnPass<fn(i32) -> i32, i32, i32, Infallible>>>;

    fn double(x: i32) -> i32 {
        x * 2
    }

    let rest: Rest = CallThru::from_pass(FnPass::new(double as fn(i32) -> i32));

    let resume_at_21 = next_call(
        |this: Option<()>, rest: &Rest| rest.thread(this, 21),
        || 21,
    );

    assert_eq!(resume_at_21.next(None, &rest), Ok(42));

    let end_at_21: FnNextCall<_, _, i32, i32> = next_call(
        |this: Option<()>, rest: &Rest| rest.thread(this, 21),
        || 21,
    );

    assert_eq!(end_at_21.last(), 21);
}
