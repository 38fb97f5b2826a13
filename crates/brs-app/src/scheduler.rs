//! Fixed-cadence scheduling with cooperative shutdown.
//!
//! One logical thread of control: the scheduler sleeps, fires, sleeps. It
//! sleeps in slices of a tenth of the interval so a shutdown request is
//! observed within bounded latency instead of only at the next firing. A
//! cycle that runs long simply delays the next deadline; cycles never
//! overlap because the deadline is recomputed only after the cycle returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::AppResult;

/// Cooperative shutdown flag, shared between the signal handler and the
/// scheduler. Checked at every sleep-slice boundary; an in-flight cycle is
/// allowed to finish.
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cadence description for a scheduled loop.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    /// Time between firings.
    pub interval: Duration,
    /// Fire once synchronously before entering the timed loop.
    pub start_now: bool,
}

impl Schedule {
    pub fn new(interval: Duration, start_now: bool) -> Self {
        Self {
            interval,
            start_now,
        }
    }

    /// Convenience for hour-denominated configs.
    pub fn hourly(interval_hour: f64, start_now: bool) -> Self {
        Self::new(Duration::from_secs_f64(interval_hour * 3600.0), start_now)
    }
}

/// Run `cycle` on the given cadence until shutdown is requested.
///
/// A cycle error is logged and the loop continues; the next tick is the
/// retry. Returns the number of cycles executed (failed ones included),
/// which keeps the timed loops observable in tests.
pub fn run_scheduled<F>(schedule: Schedule, token: &ShutdownToken, mut cycle: F) -> u64
where
    F: FnMut() -> AppResult<()>,
{
    let mut executed = 0u64;

    if schedule.start_now {
        run_one(&mut cycle, &mut executed);
    }

    let slice = schedule.interval / 10;
    let mut next_deadline = Instant::now() + schedule.interval;
    log_next_deadline(schedule.interval);

    loop {
        if token.is_requested() {
            info!("shutdown requested, stopping scheduler");
            break;
        }
        if Instant::now() >= next_deadline {
            run_one(&mut cycle, &mut executed);
            next_deadline = Instant::now() + schedule.interval;
            log_next_deadline(schedule.interval);
        }
        std::thread::sleep(slice);
    }

    executed
}

fn run_one<F>(cycle: &mut F, executed: &mut u64)
where
    F: FnMut() -> AppResult<()>,
{
    *executed += 1;
    if let Err(err) = cycle() {
        warn!(error = %err, "cycle failed, skipping until next scheduled run");
    }
}

fn log_next_deadline(interval: Duration) {
    let next = chrono::Local::now()
        + chrono::Duration::from_std(interval).unwrap_or_else(|_| chrono::Duration::zero());
    info!(next_run = %next.format("%Y-%m-%d %H:%M:%S"), "next scheduled run");
}
