use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_io::Timer;
use pin_project_lite::pin_project;

use crate::time::Instant;

/// Sleeps until the specified instant.
///
/// A deadline in the past completes as soon as the reactor gets around to it,
/// but still suspends at least once.
pub fn sleep_until(deadline: Instant) -> SleepUntil {
    SleepUntil {
        timer: Timer::at(deadline.into()),
        yielded: false,
        completed: false,
    }
}

pin_project! {
    /// Sleeps until the specified instant.
    ///
    /// This `struct` is created by the [`sleep_until`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    #[derive(Debug)]
    pub struct SleepUntil {
        #[pin]
        timer: Timer,
        yielded: bool,
        completed: bool,
    }
}

impl Future for SleepUntil {
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
