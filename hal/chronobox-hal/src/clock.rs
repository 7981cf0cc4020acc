//! Monotonic time source
//!
//! The timing core never reads a clock on its own. The poll loop samples
//! a [`MonotonicClock`] once per cycle and passes the value down, so every
//! component sees the same instant within one cycle.

/// Microsecond timestamp
///
/// Wraps at `u64::MAX`. Differences are always taken with
/// [`elapsed_between`], which tolerates a single wraparound.
pub type Micros = u64;

/// Free-running microsecond counter
pub trait MonotonicClock {
    /// Current time in microseconds since an arbitrary epoch (usually boot)
    fn now_us(&self) -> Micros;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_us(&self) -> Micros {
        (**self).now_us()
    }
}

/// Microseconds from `start` to `now`, modulo the counter width
#[inline]
pub const fn elapsed_between(start: Micros, now: Micros) -> Micros {
    now.wrapping_sub(start)
}
