//! Timer box orchestration
//!
//! Ties the channel buttons, the reset button and the display switch to
//! the channel timers. Runs once per poll cycle, single-threaded.

pub mod events;
pub mod timer_box;

pub use events::{BoxEvent, BoxEvents, MAX_EVENTS_PER_POLL};
pub use timer_box::TimerBox;
