use std::cell::Cell;
use std::io;

use futures_wait::task::{sleep, wait_for};
use futures_wait::time::{Duration, Instant};

#[test]
fn resolves_when_the_condition_already_holds() {
    async_io::block_on(async {
        let before = Instant::now();
        wait_for(|| true).await.unwrap();
        assert!(before.elapsed() < Duration::from_millis(50));
    })
}

#[test]
fn resolves_when_an_async_condition_already_holds() {
    async_io::block_on(async {
        let before = Instant::now();
        wait_for(|| async { true }).await.unwrap();
        assert!(before.elapsed() < Duration::from_millis(50));
    })
}

#[test]
fn resolves_once_the_condition_becomes_true() {
    async_io::block_on(async {
        let calls = Cell::new(0);
        wait_for(|| {
            calls.set(calls.get() + 1);
            calls.get() >= 3
        })
        .interval(Duration::from_millis(5))
        .await
        .unwrap();
        assert_eq!(calls.get(), 3);
    })
}

#[test]
fn fails_with_a_timeout_error_once_the_deadline_passes() {
    async_io::block_on(async {
        let before = Instant::now();
        let err = wait_for(|| false)
            .timeout(Duration::from_millis(20))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert_eq!(err.to_string(), "timeout");
        assert!(before.elapsed() >= Duration::from_millis(20));
    })
}

#[test]
fn an_async_condition_that_never_holds_times_out() {
    async_io::block_on(async {
        let err = wait_for(|| async { false })
            .timeout(Duration::from_millis(20))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    })
}

#[test]
fn carries_a_custom_timeout_message() {
    async_io::block_on(async {
        let err = wait_for(|| false)
            .timeout(Duration::from_millis(1))
            .timeout_message("🍋")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert_eq!(err.to_string(), "🍋");
    })
}

#[test]
fn propagates_a_condition_error_unchanged() {
    async_io::block_on(async {
        let err = wait_for(|| -> io::Result<bool> {
            Err(io::Error::new(io::ErrorKind::Other, "bad"))
        })
        .timeout(Duration::from_millis(20))
        .await
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "bad");
    })
}

#[test]
fn propagates_an_async_condition_error_unchanged() {
    async fn failing_check() -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::Other, "bad"))
    }

    async_io::block_on(async {
        let err = wait_for(failing_check)
            .timeout(Duration::from_millis(20))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "bad");
    })
}

#[test]
fn evaluates_once_per_interval_until_the_deadline() {
    async_io::block_on(async {
        let calls = Cell::new(0);
        let err = wait_for(|| {
            calls.set(calls.get() + 1);
            false
        })
        .interval(Duration::from_millis(10))
        .timeout(Duration::from_millis(50))
        .await
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        let calls = calls.get();
        assert!(
            (4..=6).contains(&calls),
            "expected around 5 evaluations, got {calls}"
        );
    })
}

#[test]
fn a_zero_timeout_still_evaluates_once() {
    async_io::block_on(async {
        let calls = Cell::new(0);
        let err = wait_for(|| {
            calls.set(calls.get() + 1);
            false
        })
        .interval(Duration::from_millis(1))
        .timeout(Duration::from_millis(0))
        .await
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert_eq!(calls.get(), 1);

        // No stray evaluations may happen once the wait has failed.
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.get(), 1);
    })
}
