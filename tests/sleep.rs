use futures_wait::task::{sleep, sleep_until};
use futures_wait::time::{Duration, Instant};

#[test]
fn resolves_no_earlier_than_the_duration() {
    async_io::block_on(async {
        let before = Instant::now();
        sleep(Duration::from_millis(10)).await;
        assert!(before.elapsed() >= Duration::from_millis(10));
    })
}

#[test]
fn resolves_to_the_instant_it_fired_at() {
    async_io::block_on(async {
        let before = Instant::now();
        let fired = sleep(Duration::from_millis(10)).await;
        assert!(fired >= before + Duration::from_millis(10));
    })
}

#[test]
fn a_zero_duration_completes() {
    async_io::block_on(async {
        sleep(Duration::from_millis(0)).await;
    })
}

#[test]
fn a_deadline_in_the_past_completes() {
    async_io::block_on(async {
        sleep_until(Instant::now() - Duration::from_millis(10)).await;
    })
}
