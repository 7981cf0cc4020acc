//! Elapsed-time accounting
//!
//! All values are microsecond timestamps supplied by the caller. A timer
//! never reads a clock itself.

pub mod elapsed;
pub mod pausable;

pub use elapsed::ElapsedTimer;
pub use pausable::PausableTimer;
