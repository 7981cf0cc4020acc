//! Seven-segment display driver trait
//!
//! Drivers encode digits and talk to the display chip. All calls are
//! synchronous and always succeed; there is no backpressure.

use crate::config::MAX_BRIGHTNESS;

/// Four-digit seven-segment display
pub trait SegmentDisplay {
    /// Show a four-digit decimal value (0-9999), no colon
    fn set_digits(&mut self, value: u16);

    /// Show `MM:SS`
    ///
    /// - `minutes`: 0-99
    /// - `seconds`: 0-59
    ///
    /// The default renders `minutes * 100 + seconds` without a colon.
    /// Drivers with a colon segment should override this.
    fn set_time(&mut self, minutes: u8, seconds: u8) {
        self.set_digits(u16::from(minutes.min(99)) * 100 + u16::from(seconds.min(59)));
    }

    /// Set brightness (0 = dimmest, [`MAX_BRIGHTNESS`] = brightest)
    fn set_brightness(&mut self, level: u8);

    /// Current brightness level
    fn brightness(&self) -> u8;

    /// Turn all segments off, leaving the display powered
    fn clear(&mut self);

    /// Switch the display off
    fn blank(&mut self);

    /// Light every segment (hardware check)
    fn show_all(&mut self);
}

/// Helper trait for brightness stepping
pub trait SegmentDisplayExt: SegmentDisplay {
    /// Increase brightness by one level, looping from maximum to minimum
    fn increment_brightness(&mut self) {
        let next = if self.brightness() >= MAX_BRIGHTNESS {
            0
        } else {
            self.brightness() + 1
        };
        self.set_brightness(next);
    }

    /// Decrease brightness by one level, looping from minimum to maximum
    fn decrement_brightness(&mut self) {
        let next = match self.brightness() {
            0 => MAX_BRIGHTNESS,
            b => b.min(MAX_BRIGHTNESS) - 1,
        };
        self.set_brightness(next);
    }
}

// Blanket implementation for all SegmentDisplay types
impl<T: SegmentDisplay + ?Sized> SegmentDisplayExt for T {}
