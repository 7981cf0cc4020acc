//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in chronobox-core for the display hardware:
//!
//! - TM1637 four-digit seven-segment display (bit-banged two-wire bus)
//! - Seven-segment glyph encoding

// Tests use std collections for bus capture
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
