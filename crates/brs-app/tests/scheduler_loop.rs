//! Timed-loop behavior of the scheduler against a real clock.
//!
//! Intervals here are milliseconds, not hours; the scheduler only sees a
//! `Duration`, so the contract under test is identical.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use brs_app::{Schedule, ShutdownToken, run_scheduled};

#[test]
fn start_now_runs_two_cycles_within_two_intervals() {
    let interval = Duration::from_millis(50);
    let token = ShutdownToken::new();
    let firings: Arc<Mutex<Vec<Instant>>> = Arc::new(Mutex::new(Vec::new()));

    let worker = {
        let token = token.clone();
        let firings = Arc::clone(&firings);
        std::thread::spawn(move || {
            run_scheduled(Schedule::new(interval, true), &token, || {
                firings.lock().unwrap().push(Instant::now());
                Ok(())
            })
        })
    };

    // Two intervals plus generous slack for slow CI machines.
    std::thread::sleep(interval * 2 + Duration::from_millis(100));
    token.request();
    let executed = worker.join().unwrap();

    let firings = firings.lock().unwrap();
    assert!(
        executed >= 2,
        "expected at least 2 cycles, got {executed}"
    );
    // Second firing strictly later than the first: the deadline is computed
    // after the first cycle returns, so no two cycles can coincide.
    assert!(firings[1] > firings[0]);
    // And no earlier than (roughly) one interval after the first.
    assert!(firings[1] - firings[0] >= interval / 2);
}

#[test]
fn shutdown_latency_is_bounded_by_sleep_slice() {
    // Interval of 2s, slice of 200ms: a request issued right after start
    // must be observed well before the first firing.
    let token = ShutdownToken::new();
    let worker = {
        let token = token.clone();
        std::thread::spawn(move || {
            run_scheduled(
                Schedule::new(Duration::from_secs(2), false),
                &token,
                || Ok(()),
            )
        })
    };

    std::thread::sleep(Duration::from_millis(50));
    token.request();
    let start = Instant::now();
    let executed = worker.join().unwrap();

    assert_eq!(executed, 0);
    assert!(start.elapsed() < Duration::from_secs(1));
}
