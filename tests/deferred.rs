use std::io;

use futures_lite::future::poll_once;
use futures_wait::future::deferred;

#[test]
fn stays_pending_until_settled() {
    async_io::block_on(async {
        let (mut value, resolve, _reject) = deferred::<&str>();
        assert!(poll_once(&mut value).await.is_none());

        resolve.resolve("hello");
        assert_eq!(value.await.unwrap(), "hello");
    })
}

#[test]
fn resolves_with_a_unit_payload() {
    async_io::block_on(async {
        let (value, resolve, _reject) = deferred::<()>();
        resolve.resolve(());
        value.await.unwrap();
    })
}

#[test]
fn rejects_with_the_given_error() {
    async_io::block_on(async {
        let (value, _resolve, reject) = deferred::<()>();
        reject.reject(io::Error::new(io::ErrorKind::Other, "absolutely not"));
        let err = value.await.unwrap_err();
        assert_eq!(err.to_string(), "absolutely not");
    })
}

#[test]
fn only_the_first_settlement_takes_effect() {
    async_io::block_on(async {
        let (value, resolve, reject) = deferred();
        resolve.resolve(1);
        reject.reject(io::Error::new(io::ErrorKind::Other, "late"));
        assert_eq!(value.await.unwrap(), 1);
    })
}

#[test]
fn fails_when_every_settle_handle_is_dropped() {
    async_io::block_on(async {
        let (value, resolve, reject) = deferred::<()>();
        drop(resolve);
        drop(reject);
        let err = value.await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    })
}
