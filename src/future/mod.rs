//! Asynchronous values.
//!
//! # Cancellation
//!
//! Futures can be cancelled by dropping them before they finish executing.
//! This is useful when we're no longer interested in the result of an
//! operation, as it allows us to stop doing needless work. This also means
//! that a future may cancel at any `.await` point, and so just like with `?`
//! we have to be careful to roll back local state if our future halts there.
//!
//! In order to settle a future remotely, use the [`deferred`] function to
//! create a pending value together with its resolve/reject handles. The
//! pending value can be passed to [`FutureExt::timeout`] as a deadline, which
//! cancels the timed future when the handle fires instead of after a fixed
//! duration.
//!
//! ```
//! use futures_wait::future::deferred;
//! use futures_wait::prelude::*;
//! use futures_wait::task::sleep;
//! use futures_wait::time::Duration;
//!
//! fn main() {
//!     async_io::block_on(async {
//!         let (stop, _resolve, _reject) = deferred::<()>();
//!         let value = sleep(Duration::from_millis(100))
//!             .timeout(stop) // time-out when the handle settles.
//!             .await;
//!
//!         assert!(value.is_ok());
//!     })
//! }
//! ```

mod deferred;
mod future_ext;
mod timeout;

pub use deferred::{deferred, Deferred, Reject, Resolve};
pub use future_ext::FutureExt;
pub use std::future::IntoFuture;
pub use timeout::Timeout;
