//! Periodic callback thread
//!
//! [`TimerThread`] runs a callback on a dedicated thread every
//! [`TimerConfig::period`] until asked to stop. Sleeps are sliced to at most
//! [`TimerConfig::max_sleep`] so a stop request is noticed quickly even with
//! long periods.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest single sleep between stop-flag checks.
pub const DEFAULT_MAX_SLEEP: Duration = Duration::from_millis(16);

/// Errors raised by [`TimerThread`].
#[derive(Debug, Error)]
pub enum TimerError {
    /// The configured period is zero.
    #[error("timer period must be non-zero")]
    ZeroPeriod,

    /// The configured period cannot be added to the current time.
    #[error("timer period {0:?} is too long to schedule")]
    PeriodTooLong(Duration),

    /// The configured sleep slice is zero, which would busy-wait.
    #[error("timer sleep slice must be non-zero")]
    ZeroSleepSlice,

    /// The OS refused to start the timer thread.
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The callback panicked and the timer thread died.
    #[error("timer callback panicked")]
    CallbackPanicked,
}

/// Configuration for a [`TimerThread`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Time between callback invocations
    pub period: Duration,

    /// Upper bound on each sleep while waiting for the next tick
    pub max_sleep: Duration,

    /// Name given to the spawned OS thread
    pub thread_name: String,
}

impl TimerConfig {
    /// Fire every `period`, with the default sleep slice.
    pub fn every(period: Duration) -> Self {
        Self {
            period,
            max_sleep: DEFAULT_MAX_SLEEP,
            thread_name: "zzz-timer".to_string(),
        }
    }

    /// Override the sleep slice.
    pub fn with_max_sleep(mut self, max_sleep: Duration) -> Self {
        self.max_sleep = max_sleep;
        self
    }

    /// Override the thread name.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<(), TimerError> {
        if self.period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        if Instant::now().checked_add(self.period).is_none() {
            return Err(TimerError::PeriodTooLong(self.period));
        }
        if self.max_sleep.is_zero() {
            return Err(TimerError::ZeroSleepSlice);
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    /// One tick per second.
    fn default() -> Self {
        Self::every(Duration::from_secs(1))
    }
}

/// A thread that calls a callback periodically until stopped.
///
/// Dropping the handle requests a stop and waits for the thread to finish.
pub struct TimerThread {
    stop: Arc<AtomicBool>,
    /// `None` for an idle placeholder or after the thread was joined.
    handle: Option<JoinHandle<u64>>,
}

impl TimerThread {
    /// A placeholder that runs nothing. Assign a spawned timer over it.
    pub fn idle() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start a timer thread that calls `callback` every `config.period`.
    ///
    /// The first call happens one full period after spawning.
    pub fn spawn<F>(config: TimerConfig, callback: F) -> Result<Self, TimerError>
    where
        F: FnMut() + Send + 'static,
    {
        config.validate()?;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || run(&flag, &config, callback))?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Ask the thread to stop. Returns immediately.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// True while a spawned thread has not yet exited.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the thread, wait for it, and return how many times the callback
    /// ran. An idle timer reports zero.
    pub fn stop(mut self) -> Result<u64, TimerError> {
        self.request_stop();
        self.join()
    }

    fn join(&mut self) -> Result<u64, TimerError> {
        let Some(handle) = self.handle.take() else {
            return Ok(0);
        };
        handle.join().map_err(|_| {
            tracing::warn!("timer callback panicked; thread exited early");
            TimerError::CallbackPanicked
        })
    }
}

impl Default for TimerThread {
    fn default() -> Self {
        Self::idle()
    }
}

impl Drop for TimerThread {
    fn drop(&mut self) {
        self.request_stop();
        // Panics were already logged by `join`.
        let _ = self.join();
    }
}

impl fmt::Debug for TimerThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerThread")
            .field("running", &self.is_running())
            .field("stop_requested", &self.stop.load(Ordering::Acquire))
            .finish()
    }
}

fn run<F: FnMut()>(stop: &AtomicBool, config: &TimerConfig, mut callback: F) -> u64 {
    tracing::debug!(
        period_ms = config.period.as_millis() as u64,
        thread = %config.thread_name,
        "timer started"
    );

    let mut ticks = 0u64;
    let Some(mut next_time) = Instant::now().checked_add(config.period) else {
        tracing::warn!("timer period overflows the clock; not scheduling");
        return ticks;
    };
    while !stop.load(Ordering::Acquire) {
        let now = Instant::now();
        if now >= next_time {
            callback();
            ticks += 1;
            tracing::trace!(ticks, "timer tick");
            let Some(following) = next_time.checked_add(config.period) else {
                tracing::warn!(ticks, "timer deadline overflows the clock; stopping");
                break;
            };
            next_time = following;
        }

        let sleep_for = next_time.saturating_duration_since(now).min(config.max_sleep);
        thread::sleep(sleep_for);
    }

    tracing::debug!(ticks, "timer stopped");
    ticks
}
