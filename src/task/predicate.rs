use std::future::{ready, Future, Ready};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

/// A condition check, evaluated repeatedly by [`wait_for`].
///
/// A predicate is any `FnMut` closure (or function) taking no arguments whose
/// return value describes one evaluation of the condition. Four shapes are
/// accepted:
///
/// - `FnMut() -> bool`
/// - `FnMut() -> io::Result<bool>`
/// - `FnMut() -> impl Future<Output = bool>`
/// - `FnMut() -> impl Future<Output = io::Result<bool>>`
///
/// All four normalize to a future resolving to `io::Result<bool>`. The `M`
/// marker parameter only disambiguates the otherwise-overlapping blanket
/// impls; it is always inferred at the call site.
///
/// Evaluations must be safe to repeat: the predicate is called once per poll
/// interval until it reports `true`, errors, or the deadline fires.
///
/// [`wait_for`]: crate::task::wait_for
pub trait Predicate<M> {
    /// The future produced by a single evaluation.
    type Future: Future<Output = io::Result<bool>>;

    /// Starts a single evaluation of the condition.
    fn check(&mut self) -> Self::Future;
}

/// Marker for predicates returning a bare `bool`.
#[derive(Debug)]
pub enum Bool {}

/// Marker for predicates returning `io::Result<bool>`.
#[derive(Debug)]
pub enum TryBool {}

/// Marker for predicates returning a future resolving to `bool`.
#[derive(Debug)]
pub enum BoolFuture {}

/// Marker for predicates returning a future resolving to `io::Result<bool>`.
#[derive(Debug)]
pub enum TryBoolFuture {}

impl<F> Predicate<Bool> for F
where
    F: FnMut() -> bool,
{
    type Future = Ready<io::Result<bool>>;

    fn check(&mut self) -> Self::Future {
        ready(Ok((self)()))
    }
}

impl<F> Predicate<TryBool> for F
where
    F: FnMut() -> io::Result<bool>,
{
    type Future = Ready<io::Result<bool>>;

    fn check(&mut self) -> Self::Future {
        ready((self)())
    }
}

impl<F, Fut> Predicate<BoolFuture> for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    type Future = AlwaysOk<Fut>;

    fn check(&mut self) -> Self::Future {
        AlwaysOk { future: (self)() }
    }
}

impl<F, Fut> Predicate<TryBoolFuture> for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<bool>>,
{
    type Future = Fut;

    fn check(&mut self) -> Self::Future {
        (self)()
    }
}

pin_project! {
    /// Adapts an infallible boolean future to the fallible check interface.
    #[must_use = "futures do nothing unless polled or .awaited"]
    #[derive(Debug)]
    pub struct AlwaysOk<F> {
        #[pin]
        future: F,
    }
}

impl<F> Future for AlwaysOk<F>
where
    F: Future<Output = bool>,
{
    type Output = io::Result<bool>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Ok)
    }
}
