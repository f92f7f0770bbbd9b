use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_io::Timer;
use pin_project_lite::pin_project;

use crate::time::{Duration, Instant};

/// Sleeps for the specified amount of time.
///
/// A zero-length duration completes as soon as the reactor gets around to it,
/// but still suspends at least once; every sleep is a genuine suspension
/// point.
///
/// # Examples
///
/// ```
/// use futures_wait::task::sleep;
/// use futures_wait::time::{Duration, Instant};
///
/// fn main() {
///     async_io::block_on(async {
///         let before = Instant::now();
///         sleep(Duration::from_millis(100)).await;
///         assert!(before.elapsed() >= Duration::from_millis(100));
///     })
/// }
/// ```
pub fn sleep(dur: Duration) -> Sleep {
    Sleep {
        timer: Timer::after(dur.into()),
        yielded: false,
        completed: false,
    }
}

pin_project! {
    /// Sleeps for the specified amount of time.
    ///
    /// This `struct` is created by the [`sleep`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    #[derive(Debug)]
    pub struct Sleep {
        #[pin]
        timer: Timer,
        yielded: bool,
        completed: bool,
    }
}

impl Future for Sleep {
    type Output = Instant;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        assert!(!self.completed, "future polled after completing");
        let this = self.project();
        match this.timer.poll(cx) {
            // An already-expired timer still suspends once.
            Poll::Ready(_) if !*this.yielded => {
                *this.yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
            Poll::Ready(instant) => {
                *this.completed = true;
                Poll::Ready(instant.into())
            }
            Poll::Pending => {
                *this.yielded = true;
                Poll::Pending
            }
        }
    }
}
