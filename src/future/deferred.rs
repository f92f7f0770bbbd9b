use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_channel::{Receiver, Sender};
use futures_core::ready;
use futures_core::Stream;
use pin_project_lite::pin_project;

/// Creates a future together with the external handles that settle it.
///
/// The returned [`Deferred`] stays pending until either [`Resolve::resolve`]
/// or [`Reject::reject`] is invoked; whichever lands first decides the
/// outcome, and the other handle becomes a no-op. This bridges callback-style
/// completion into a value that can simply be awaited.
///
/// If both handles are dropped without settling, the future fails with a
/// [`io::ErrorKind::BrokenPipe`] error rather than staying pending forever.
///
/// # Examples
///
/// ```
/// use futures_wait::future::deferred;
///
/// fn main() -> std::io::Result<()> {
///     async_io::block_on(async {
///         let (value, resolve, _reject) = deferred();
///         resolve.resolve("meow");
///         assert_eq!(value.await?, "meow");
///         Ok(())
///     })
/// }
/// ```
pub fn deferred<T>() -> (Deferred<T>, Resolve<T>, Reject<T>) {
    let (sender, receiver) = async_channel::bounded(1);
    (
        Deferred {
            receiver,
            completed: false,
        },
        Resolve {
            sender: sender.clone(),
        },
        Reject { sender },
    )
}

pin_project! {
    /// A future settled externally through a [`Resolve`] or [`Reject`] handle.
    ///
    /// This `struct` is created by the [`deferred`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Deferred<T> {
        receiver: Receiver<io::Result<T>>,
        completed: bool,
    }
}

impl<T> Future for Deferred<T> {
    type Output = io::Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.completed, "future polled after completing");
        let settlement = ready!(Pin::new(this.receiver).poll_next(cx));
        *this.completed = true;
        match settlement {
            Some(result) => Poll::Ready(result),
            None => Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "deferred dropped without settling",
            ))),
        }
    }
}

/// Settles a [`Deferred`] successfully with a value.
pub struct Resolve<T> {
    sender: Sender<io::Result<T>>,
}

impl<T> Resolve<T> {
    /// Settles the deferred future with `value`.
    ///
    /// Has no effect if the future has already been settled or dropped.
    pub fn resolve(self, value: T) {
        let _ = self.sender.try_send(Ok(value));
    }
}

/// Settles a [`Deferred`] with a failure.
pub struct Reject<T> {
    sender: Sender<io::Result<T>>,
}

impl<T> Reject<T> {
    /// Settles the deferred future with `error`.
    ///
    /// Has no effect if the future has already been settled or dropped.
    pub fn reject(self, error: io::Error) {
        let _ = self.sender.try_send(Err(error));
    }
}
