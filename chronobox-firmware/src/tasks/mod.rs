//! Embassy async tasks
//!
//! The turn clock runs a single cooperative poll loop.

pub mod poll;

pub use poll::poll_task;
