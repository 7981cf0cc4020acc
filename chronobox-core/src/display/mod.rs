//! Display channels
//!
//! A channel owns one pausable timer and the display that shows it.

pub mod channel;

pub use channel::{DisplayChannel, Frame};
