//! Timing and sizing constants

use chronobox_hal::Micros;

/// Number of timer channels (button + display pairs)
pub const TIMER_COUNT: usize = 5;

/// Microseconds per second
pub const US_PER_SECOND: Micros = 1_000_000;

/// Microseconds per minute
pub const US_PER_MINUTE: Micros = 60 * US_PER_SECOND;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Default continuous-press duration separating a short hold from a long hold
pub const HOLD_TIME_US: Micros = 2_000_000;

/// Poll cycle period in milliseconds
///
/// Must stay well below [`HOLD_TIME_US`] so holds classify with low latency.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Highest brightness level a segment display accepts
pub const MAX_BRIGHTNESS: u8 = 7;

/// Brightness applied at boot
pub const DEFAULT_BRIGHTNESS: u8 = 4;

/// Largest minute count a four-digit MM:SS display can show
pub const MAX_DISPLAY_MINUTES: u32 = 99;

/// Split a microsecond duration into whole minutes and the second remainder
///
/// The seconds value is always in `0..60`.
pub const fn split_minutes_seconds(us: Micros) -> (u32, u8) {
    let minutes = us / US_PER_MINUTE;
    let seconds = (us % US_PER_MINUTE) / US_PER_SECOND;
    let minutes = if minutes > u32::MAX as u64 {
        u32::MAX
    } else {
        minutes as u32
    };
    (minutes, seconds as u8)
}
