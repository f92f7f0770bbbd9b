use std::future::{Future, IntoFuture};

use super::Timeout;

/// Extend `Future` with time-based operations.
pub trait FutureExt: Future {
    /// Return an error if a future does not complete within a given time span.
    ///
    /// Typically timeouts are, as the name implies, based on _time_. However
    /// this method can time out based on any future. This can be useful in
    /// combination with a [`Deferred`], as it allows (long-lived) futures to
    /// be cancelled based on some external event.
    ///
    /// When a timeout is returned, the future will be dropped and destructors
    /// will be run.
    ///
    /// [`Deferred`]: crate::future::Deferred
    ///
    /// # Example
    ///
    /// ```
    /// use futures_wait::prelude::*;
    /// use futures_wait::task::sleep;
    /// use futures_wait::time::Duration;
    /// use std::io;
    ///
    /// fn main() {
    ///     async_io::block_on(async {
    ///         let res = sleep(Duration::from_millis(100)) // longer wait
    ///             .timeout(Duration::from_millis(50))     // shorter timeout
    ///             .await;
    ///         assert_eq!(res.unwrap_err().kind(), io::ErrorKind::TimedOut); // error
    ///
    ///         let res = sleep(Duration::from_millis(50))   // shorter wait
    ///             .timeout(Duration::from_millis(100))     // longer timeout
    ///             .await;
    ///         assert!(res.is_ok()); // success
    ///     });
    /// }
    /// ```
    fn timeout<D>(self, deadline: D) -> Timeout<Self, D::IntoFuture>
    where
        Self: Sized,
        D: IntoFuture,
    {
        Timeout::new(self, deadline.into_future())
    }
}

impl<T> FutureExt for T where T: Future {}
