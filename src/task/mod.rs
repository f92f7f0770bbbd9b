//! Types and Traits for working with asynchronous tasks.

mod predicate;
mod sleep;
mod sleep_until;
mod wait_for;

pub use predicate::{AlwaysOk, Bool, BoolFuture, Predicate, TryBool, TryBoolFuture};
pub use sleep::{sleep, Sleep};
pub use sleep_until::{sleep_until, SleepUntil};
pub use wait_for::{wait_for, WaitFor};
