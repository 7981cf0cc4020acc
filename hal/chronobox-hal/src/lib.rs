//! Chronobox Hardware Abstraction Layer
//!
//! This crate defines the hardware boundary that the timing core reads
//! from. Chip-specific HALs implement these traits so the same core logic
//! runs on the board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  chronobox-core / chronobox-firmware    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chronobox-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ chronobox-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input
//! - [`clock::MonotonicClock`] - Free-running microsecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::{Micros, MonotonicClock};
pub use gpio::{InputPin, Level};
