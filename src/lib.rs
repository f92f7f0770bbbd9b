#![forbid(unsafe_code)]
#![warn(future_incompatible, unreachable_pub)]
#![warn(missing_docs)]

//! Async waiting primitives.
//!
//! This crate provides the small set of operations that waiting-centric async
//! code keeps re-deriving: a [`sleep`] suspension point, a condition poller
//! with a deadline ([`wait_for`]), a one-shot value settled from the outside
//! ([`deferred`]), and a [`timeout`] combinator over arbitrary futures. It is
//! runtime-agnostic: timers come from the reactor that `async-io` provides,
//! so any executor able to drive those works.
//!
//! # Examples
//!
//! **Poll a condition until it holds**
//!
//! ```
//! use futures_wait::task::wait_for;
//! use futures_wait::time::Duration;
//!
//! fn main() -> std::io::Result<()> {
//!     async_io::block_on(async {
//!         let mut attempts = 0;
//!         wait_for(|| {
//!             attempts += 1;
//!             attempts == 3
//!         })
//!         .interval(Duration::from_millis(10))
//!         .timeout(Duration::from_millis(500))
//!         .await
//!     })
//! }
//! ```
//!
//! **Settle a value from the outside**
//!
//! ```
//! use futures_wait::future::deferred;
//!
//! fn main() -> std::io::Result<()> {
//!     async_io::block_on(async {
//!         let (value, resolve, _reject) = deferred();
//!         resolve.resolve(42);
//!         assert_eq!(value.await?, 42);
//!         Ok(())
//!     })
//! }
//! ```
//!
//! # Design Decisions
//!
//! Waiting either succeeds with no payload or fails, so every fallible
//! operation in this crate speaks `io::Result`: deadlines surface as
//! [`io::ErrorKind::TimedOut`](std::io::ErrorKind::TimedOut) errors, and
//! whatever error a condition check produces is handed back unchanged. There
//! is no retry, backoff, or external cancellation layered on top — a failed
//! wait is final, and callers decide whether to wait again.
//!
//! The [`time`] module wraps `std::time` in local newtypes so that a bare
//! `Duration` or `Instant` can be used directly as a deadline future anywhere
//! one is expected.
//!
//! [`sleep`]: crate::task::sleep
//! [`wait_for`]: crate::task::wait_for
//! [`deferred`]: crate::future::deferred
//! [`timeout`]: crate::future::FutureExt::timeout

pub mod future;
pub mod task;
pub mod time;

pub mod prelude {
    //! The `futures-wait` prelude.
    pub use crate::future::FutureExt as _;
}
