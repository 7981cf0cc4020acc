//! Events reported by a poll cycle
//!
//! The core does no I/O; the firmware logs these.

use heapless::Vec;

use crate::config::TIMER_COUNT;

/// Upper bound on events from one poll
///
/// One display-gate change, one reset, and per channel at most one
/// pause of the previously running channel plus its own start.
pub const MAX_EVENTS_PER_POLL: usize = 2 + 2 * TIMER_COUNT;

/// Events collected during one poll
pub type BoxEvents = Vec<BoxEvent, MAX_EVENTS_PER_POLL>;

/// Something the orchestrator changed during a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoxEvent {
    /// Display switch closed, channels render again
    DisplayEnabled,
    /// Display switch opened, all displays blanked (timers keep running)
    DisplayDisabled,
    /// Reset button held long enough; every channel zeroed
    ResetAll,
    /// Channel timer started (or resumed)
    ChannelStarted(usize),
    /// Channel timer paused
    ChannelPaused(usize),
}

impl BoxEvent {
    /// Channel this event concerns, if any
    pub fn channel(&self) -> Option<usize> {
        match self {
            BoxEvent::ChannelStarted(i) | BoxEvent::ChannelPaused(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if this event changes a timer
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            BoxEvent::ResetAll | BoxEvent::ChannelStarted(_) | BoxEvent::ChannelPaused(_)
        )
    }
}
