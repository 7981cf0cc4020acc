//! TM1637 four-digit seven-segment display driver
//!
//! The TM1637 speaks a two-wire serial protocol that resembles I2C but has
//! no device address and shifts data LSB first:
//!
//! - Start: DIO falls while CLK is high
//! - Data: DIO changes while CLK is low, sampled on the CLK rising edge
//! - ACK: the chip pulls DIO low during a ninth clock
//! - Stop: DIO rises while CLK is high
//!
//! A frame is a command byte, optionally followed by data bytes:
//!
//! - `0x40` - data command, write with auto-increment address
//! - `0xC0` - address command (digit 0), followed by four segment bytes
//! - `0x80 | on << 3 | brightness` - display control
//!
//! DIO should be an open-drain output so the chip can pull it low for the
//! ACK. The ACK is clocked but not checked; writes always succeed.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use chronobox_core::config::{DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
use chronobox_core::traits::SegmentDisplay;

use super::segments::{self, DIGIT_COUNT};

/// Data command: write, auto-increment
const CMD_DATA_AUTO: u8 = 0x40;
/// Address command for digit 0
const CMD_ADDRESS: u8 = 0xC0;
/// Display control command
const CMD_CONTROL: u8 = 0x80;
/// Display-on bit in the control command
const CONTROL_ON: u8 = 0x08;

/// Default half-period of the bus clock in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 5;

/// TM1637 display on a bit-banged bus
pub struct Tm1637<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    bit_delay_us: u32,
    brightness: u8,
    /// Display switched on
    on: bool,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    /// Create a driver with the default bus speed and brightness
    ///
    /// Leaves both lines high (bus idle). Nothing is sent until the first
    /// display call.
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self::with_bit_delay(clk, dio, delay, DEFAULT_BIT_DELAY_US)
    }

    /// Create a driver with a custom clock half-period
    pub fn with_bit_delay(clk: CLK, dio: DIO, delay: D, bit_delay_us: u32) -> Self {
        let mut display = Self {
            clk,
            dio,
            delay,
            bit_delay_us,
            brightness: DEFAULT_BRIGHTNESS,
            on: false,
        };
        display.set_clk(true);
        display.set_dio(true);
        display
    }

    /// Check if the display is switched on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Write four raw segment bytes and switch the display on
    pub fn write_segments(&mut self, segs: [u8; DIGIT_COUNT]) {
        self.start();
        self.write_byte(CMD_DATA_AUTO);
        self.stop();

        self.start();
        self.write_byte(CMD_ADDRESS);
        for seg in segs {
            self.write_byte(seg);
        }
        self.stop();

        self.on = true;
        self.write_control();
    }

    /// Release both pins and the delay provider
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn write_control(&mut self) {
        let mut cmd = CMD_CONTROL | (self.brightness & MAX_BRIGHTNESS);
        if self.on {
            cmd |= CONTROL_ON;
        }
        self.start();
        self.write_byte(cmd);
        self.stop();
    }

    fn start(&mut self) {
        self.set_clk(true);
        self.set_dio(true);
        self.bit_delay();
        self.set_dio(false);
        self.bit_delay();
        self.set_clk(false);
    }

    fn stop(&mut self) {
        self.set_clk(false);
        self.set_dio(false);
        self.bit_delay();
        self.set_clk(true);
        self.bit_delay();
        self.set_dio(true);
        self.bit_delay();
    }

    fn write_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            self.set_clk(false);
            self.set_dio(byte & (1 << bit) != 0);
            self.bit_delay();
            self.set_clk(true);
            self.bit_delay();
        }

        // ACK clock; DIO released so the chip can pull it low
        self.set_clk(false);
        self.set_dio(true);
        self.bit_delay();
        self.set_clk(true);
        self.bit_delay();
        self.set_clk(false);
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    // Pin errors are ignored: writes are fire-and-forget and the
    // target GPIO is infallible
    fn set_clk(&mut self, high: bool) {
        let _ = if high {
            self.clk.set_high()
        } else {
            self.clk.set_low()
        };
    }

    fn set_dio(&mut self, high: bool) {
        let _ = if high {
            self.dio.set_high()
        } else {
            self.dio.set_low()
        };
    }
}

impl<CLK, DIO, D> SegmentDisplay for Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    fn set_digits(&mut self, value: u16) {
        self.write_segments(segments::encode_number(value));
    }

    fn set_time(&mut self, minutes: u8, seconds: u8) {
        self.write_segments(segments::encode_time(minutes, seconds));
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
        if self.on {
            self.write_control();
        }
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn clear(&mut self) {
        self.write_segments([segments::BLANK; DIGIT_COUNT]);
    }

    fn blank(&mut self) {
        self.on = false;
        self.write_control();
    }

    fn show_all(&mut self) {
        self.write_segments([segments::ALL; DIGIT_COUNT]);
    }
}
