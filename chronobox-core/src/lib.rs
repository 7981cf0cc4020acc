//! Board-agnostic core logic for the turn-clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Switch sampling and button hold classification
//! - Elapsed and pausable timers (microsecond accounting)
//! - Display channels (timer state plus a seven-segment driver)
//! - The timer box orchestrator that runs the per-cycle poll policy
//! - Pinout and timing configuration
//!
//! Time is never read from inside this crate. Callers sample a
//! [`chronobox_hal::MonotonicClock`] once per poll cycle and pass the value in.

// Tests need std for proptest
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod input;
pub mod orchestrator;
pub mod timer;
pub mod traits;

pub use chronobox_hal::Micros;
