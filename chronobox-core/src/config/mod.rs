//! Configuration types
//!
//! Compile-time timing constants and the board pinout. Nothing here is
//! loaded at runtime; the pinout is validated once at boot.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
