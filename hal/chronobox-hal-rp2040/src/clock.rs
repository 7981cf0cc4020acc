//! Monotonic clock over the embassy time driver

use chronobox_hal::{Micros, MonotonicClock};
use embassy_time::Instant;

/// Microseconds since boot from the RP2040 timer peripheral
///
/// The timer is 64 bits wide at 1 MHz, so it does not wrap in practice.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> Micros {
        Instant::now().as_micros()
    }
}
