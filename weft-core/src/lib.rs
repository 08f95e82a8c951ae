//! Composable call chaining.
//!
//! Weft composes an ordered sequence of transformation functions
//! ("passes") into a single callable. Each pass receives the previous
//! pass's output as its input and returns either a plain value or a *next
//! call* — a directive that steers how the chain continues instead of
//! merely feeding it data:
//!
//! - [`next_args()`] calls the next pass with an explicit argument tuple;
//!   [`next_this_and_args()`] additionally replaces the receiver threaded
//!   through the chain.
//! - [`next_skip()`] (and the [`OrSkip`] outcome) terminates the chain
//!   immediately; the result is the skip sentinel, `None`.
//! - [`next_each()`] fans the remaining passes out over every item of an
//!   iterable, lazily.
//!
//! The directive set is open: anything implementing the [`NextCall`] and
//! [`NextThru`] trait pair steers the chain the same way, and the engine
//! needs no changes to support new kinds.
//!
//! # Example
//!
//! ```
//! use weft_core::{call_thru, call_thru_call, next_each, next_skip};
//!
//! let chain = call_thru(|x: i32| x + 1).then(|x: i32| x * 2);
//! assert_eq!(chain.call(3), 8);
//!
//! let skipping = call_thru_call(|_: i32| next_skip::<i32>()).then(|x: i32| x * 2);
//! assert_eq!(skipping.call(3), None);
//!
//! let fan_out = call_thru_call(|_: i32| next_each(vec![1, 2, 3])).then(|x: i32| x * 10);
//! let results: Vec<i32> = fan_out.call(0).map(Result::unwrap).collect();
//! assert_eq!(results, vec![10, 20, 30]);
//! ```
//!
//! Execution is synchronous and single-threaded. A chain holds no state
//! across invocations; a failing pass aborts the remaining ones and
//! surfaces its error unchanged.

mod args;
mod call_thru;
mod chain;
mod next_call;
mod pass;
pub mod passes;

pub use args::Args;
pub use call_thru::{call_thru, call_thru_call, CallThru};
pub use chain::{Append, Chain, Identity, Link, Tail};
pub use next_call::{next_call, FnNextCall, NextCall, NextThru, Plain};
pub use pass::{FnCall, FnPass, Inspect, MapErr, Pass, TryFn, WithThisCall, WithThisFn};
pub use passes::{
    next_args, next_each, next_each_calls, next_skip, next_this_and_args, LastEach, NextArgs,
    NextEach, NextThisAndArgs, OrSkip, PlainItems, ThreadEach,
};
