//! RP2040-specific HAL for the turn-clock firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `chronobox-hal` traits, plus RP2040-specific functionality:
//!
//! - Input pins built from a [`PinConfig`](chronobox_core::config::PinConfig)
//! - Dynamic pin allocation by GPIO number for the pinout table
//! - Microsecond clock over the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;

pub use clock::EmbassyClock;
pub use gpio::SwitchInput;
pub use pins::{PinBank, PinError};

// Re-export shared traits from chronobox-hal for convenience
pub use chronobox_hal::{InputPin, MonotonicClock};
