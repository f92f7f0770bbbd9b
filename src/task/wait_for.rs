use std::future::Future;
use std::io;
use std::marker::PhantomData;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::predicate::Predicate;
use super::{sleep, Sleep};
use crate::time::utils::timeout_err;
use crate::time::Duration;

/// How long the poll loop lingers after a successful check, giving a deadline
/// that expired at nearly the same moment the chance to win instead.
const GRACE_MS: u64 = 1;

/// Polls a condition until it holds, or fails once a deadline has passed.
///
/// The condition is any [`Predicate`]: a closure returning `bool`,
/// `io::Result<bool>`, or a future resolving to either. It is re-evaluated
/// every poll interval until it reports `true`. If the deadline elapses first
/// the future fails with an [`io::ErrorKind::TimedOut`] error carrying the
/// configured message, and if an evaluation fails its error is returned as-is.
///
/// The returned future can be configured before it is awaited; it defaults to
/// a poll interval of 100 milliseconds, a timeout of 1 second, and the
/// message `"timeout"`.
///
/// # Examples
///
/// ```
/// use futures_wait::task::wait_for;
/// use futures_wait::time::Duration;
///
/// fn main() -> std::io::Result<()> {
///     async_io::block_on(async {
///         let mut polls = 0;
///         wait_for(|| {
///             polls += 1;
///             polls == 3
///         })
///         .interval(Duration::from_millis(10))
///         .timeout(Duration::from_millis(500))
///         .await
///     })
/// }
/// ```
pub fn wait_for<F, M>(predicate: F) -> WaitFor<F, M>
where
    F: Predicate<M>,
{
    let interval = Duration::from_millis(100);
    WaitFor {
        predicate,
        interval,
        message: String::from("timeout"),
        deadline: sleep(Duration::from_millis(1000)),
        check: None,
        pause: sleep(interval),
        state: State::Started,
        _marker: PhantomData,
    }
}

pin_project! {
    /// Polls a condition until it holds, or fails once a deadline has passed.
    ///
    /// This `struct` is created by the [`wait_for`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct WaitFor<F, M>
    where
        F: Predicate<M>
    {
        predicate: F,
        interval: Duration,
        message: String,
        #[pin]
        deadline: Sleep,
        #[pin]
        check: Option<F::Future>,
        #[pin]
        pause: Sleep,
        state: State,
        _marker: PhantomData<M>,
    }
}

/// The internal state
#[derive(Debug)]
enum State {
    /// Not yet polled.
    Started,
    /// An evaluation of the condition is in flight.
    Checking,
    /// The last evaluation came back false; pausing for one interval.
    Waiting,
    /// The condition held; lingering for the grace period.
    Grace,
    /// The future has completed.
    Completed,
}

impl<F, M> WaitFor<F, M>
where
    F: Predicate<M>,
{
    /// Sets the interval at which the condition is re-evaluated.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the deadline after which waiting fails with a timeout error.
    ///
    /// A zero timeout still lets the condition be evaluated once before the
    /// deadline is acted on.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.deadline = sleep(timeout);
        self
    }

    /// Sets the message carried by the timeout error.
    #[must_use]
    pub fn timeout_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<F, M> Future for WaitFor<F, M>
where
    F: Predicate<M>,
{
    type Output = io::Result<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let first_poll = matches!(this.state, State::Started);
        if first_poll {
            // The first evaluation happens before the deadline is looked at,
            // so even a zero timeout observes one evaluation.
            this.check.set(Some(this.predicate.check()));
            *this.state = State::Checking;
        } else {
            assert!(
                !matches!(this.state, State::Completed),
                "future polled after completing"
            );
            // Once underway the deadline arm goes first: when both timers
            // expired between wakes, timing out is the earlier event.
            if this.deadline.as_mut().poll(cx).is_ready() {
                *this.state = State::Completed;
                return Poll::Ready(Err(timeout_err(mem::take(this.message))));
            }
        }

        let step = loop {
            match this.state {
                State::Checking => {
                    let poll = match this.check.as_mut().as_pin_mut() {
                        Some(future) => future.poll(cx),
                        None => unreachable!("no evaluation in flight"),
                    };
                    match poll {
                        Poll::Ready(Ok(true)) => {
                            this.check.set(None);
                            this.pause.set(sleep(Duration::from_millis(GRACE_MS)));
                            *this.state = State::Grace;
                        }
                        Poll::Ready(Ok(false)) => {
                            this.check.set(None);
                            this.pause.set(sleep(*this.interval));
                            *this.state = State::Waiting;
                        }
                        Poll::Ready(Err(err)) => break Poll::Ready(Err(err)),
                        Poll::Pending => break Poll::Pending,
                    }
                }
                State::Waiting => match this.pause.as_mut().poll(cx) {
                    Poll::Ready(_) => {
                        this.check.set(Some(this.predicate.check()));
                        *this.state = State::Checking;
                    }
                    Poll::Pending => break Poll::Pending,
                },
                State::Grace => match this.pause.as_mut().poll(cx) {
                    Poll::Ready(_) => break Poll::Ready(Ok(())),
                    Poll::Pending => break Poll::Pending,
                },
                State::Started | State::Completed => unreachable!(),
            }
        };

        match step {
            Poll::Ready(result) => {
                *this.state = State::Completed;
                Poll::Ready(result)
            }
            Poll::Pending => {
                // The deadline arm was skipped above on the first poll; poll
                // it now so its timer is registered with the reactor, and so
                // a zero timeout fails on the spot.
                if first_poll && this.deadline.as_mut().poll(cx).is_ready() {
                    *this.state = State::Completed;
                    return Poll::Ready(Err(timeout_err(mem::take(this.message))));
                }
                Poll::Pending
            }
        }
    }
}
