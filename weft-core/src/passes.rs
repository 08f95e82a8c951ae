//! The standard pass directives built on the next-call protocol.
//!
//! A pass returns one of these instead of a plain value to steer the
//! chain: [`next_args`] replaces the next pass's argument tuple,
//! [`next_this_and_args`] additionally replaces the receiver,
//! [`next_skip`]/[`OrSkip`] terminates the chain early, and
//! [`next_each`]/[`next_each_calls`] fans the remaining passes out over an
//! iterable.

mod args;
mod each;
mod skip;

pub use args::{next_args, next_this_and_args, NextArgs, NextThisAndArgs};
pub use each::{next_each, next_each_calls, LastEach, NextEach, PlainItems, ThreadEach};
pub use skip::{next_skip, OrSkip};
