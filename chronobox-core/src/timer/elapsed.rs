//! Single-interval elapsed timer

use chronobox_hal::clock::elapsed_between;
use chronobox_hal::Micros;

use crate::config::split_minutes_seconds;

/// Tracks one running interval from its start instant to "now"
///
/// `start` while already running moves the origin to `now` and drops the
/// partial interval. Callers that care must check [`is_running`](Self::is_running).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTimer {
    /// Start of the current run, `None` when stopped
    start_us: Option<Micros>,
}

impl ElapsedTimer {
    /// Create a stopped timer
    pub const fn new() -> Self {
        Self { start_us: None }
    }

    /// Start running from `now_us`
    pub fn start(&mut self, now_us: Micros) {
        self.start_us = Some(now_us);
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.start_us.is_some()
    }

    /// Instant the current run started
    pub fn start_time(&self) -> Option<Micros> {
        self.start_us
    }

    /// Elapsed microseconds of the current run, or 0 when stopped
    pub fn elapsed_us(&self, now_us: Micros) -> Micros {
        match self.start_us {
            Some(start) => elapsed_between(start, now_us),
            None => 0,
        }
    }

    /// Whole minutes of the current run
    pub fn elapsed_minutes(&self, now_us: Micros) -> u32 {
        split_minutes_seconds(self.elapsed_us(now_us)).0
    }

    /// Second remainder (0-59) of the current run
    pub fn elapsed_seconds(&self, now_us: Micros) -> u8 {
        split_minutes_seconds(self.elapsed_us(now_us)).1
    }

    /// Stop and forget the current run
    pub fn reset(&mut self) {
        self.start_us = None;
    }

    /// Reset, then start from `now_us`
    pub fn restart(&mut self, now_us: Micros) {
        self.reset();
        self.start(now_us);
    }
}
