//! Pausable elapsed timer
//!
//! Sums any number of run intervals. Pausing folds the current run into
//! the stored total at full microsecond resolution, so repeated
//! pause/resume cycles never lose sub-second remainders.

use chronobox_hal::Micros;

use super::elapsed::ElapsedTimer;
use crate::config::split_minutes_seconds;

/// Elapsed timer that accumulates time across start/pause cycles
///
/// Total elapsed at any instant is the stored time plus the current run
/// (if running).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PausableTimer {
    run: ElapsedTimer,
    /// Sum of all completed run intervals
    stored_us: Micros,
}

impl PausableTimer {
    /// Create a stopped timer at zero
    pub const fn new() -> Self {
        Self {
            run: ElapsedTimer::new(),
            stored_us: 0,
        }
    }

    /// Start (or resume) a run at `now_us`
    ///
    /// Starting while already running discards the partial run.
    pub fn start(&mut self, now_us: Micros) {
        self.run.start(now_us);
    }

    /// Fold the current run into stored time and stop
    ///
    /// No-op when not running.
    pub fn pause(&mut self, now_us: Micros) {
        if !self.run.is_running() {
            return;
        }
        self.stored_us = self.stored_us.saturating_add(self.run.elapsed_us(now_us));
        self.run.reset();
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Total elapsed microseconds: stored time plus the current run
    pub fn elapsed_us(&self, now_us: Micros) -> Micros {
        self.stored_us.saturating_add(self.run.elapsed_us(now_us))
    }

    /// Whole minutes of total elapsed time
    pub fn elapsed_minutes(&self, now_us: Micros) -> u32 {
        split_minutes_seconds(self.elapsed_us(now_us)).0
    }

    /// Second remainder (0-59) of total elapsed time
    pub fn elapsed_seconds(&self, now_us: Micros) -> u8 {
        split_minutes_seconds(self.elapsed_us(now_us)).1
    }

    /// Stored time from completed runs, in microseconds
    pub fn stored_us(&self) -> Micros {
        self.stored_us
    }

    /// Whole minutes of stored time
    pub fn stored_minutes(&self) -> u32 {
        split_minutes_seconds(self.stored_us).0
    }

    /// Second remainder of stored time
    pub fn stored_seconds(&self) -> u8 {
        split_minutes_seconds(self.stored_us).1
    }

    /// Zero stored time and stop. Does not start a new run.
    pub fn reset(&mut self) {
        self.stored_us = 0;
        self.run.reset();
    }

    /// Reset, then start from `now_us`
    pub fn restart(&mut self, now_us: Micros) {
        self.reset();
        self.start(now_us);
    }
}
