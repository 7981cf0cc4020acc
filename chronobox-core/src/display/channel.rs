//! Timer display channel
//!
//! Couples a [`PausableTimer`] with a [`SegmentDisplay`]. The channel
//! caches the last frame it pushed so a poll loop can call
//! [`DisplayChannel::update_display`] every cycle without rewriting an
//! unchanged display.

use chronobox_hal::Micros;

use crate::config::{MAX_DISPLAY_MINUTES, SECONDS_PER_MINUTE};
use crate::timer::PausableTimer;
use crate::traits::display::{SegmentDisplay, SegmentDisplayExt};

/// What a channel last pushed to its display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Display switched off
    Blank,
    /// `MM:SS` shown
    Time {
        /// Minutes shown (0-99)
        minutes: u8,
        /// Seconds shown (0-59)
        seconds: u8,
    },
}

/// One timer and the display that shows it
#[derive(Debug)]
pub struct DisplayChannel<D> {
    timer: PausableTimer,
    /// Minutes computed at the last update
    minutes: u32,
    /// Seconds computed at the last update
    seconds: u8,
    display: D,
    /// Last frame pushed, `None` after a direct driver write
    frame: Option<Frame>,
}

impl<D: SegmentDisplay> DisplayChannel<D> {
    /// Create a channel with a stopped timer at zero
    pub fn new(display: D) -> Self {
        Self {
            timer: PausableTimer::new(),
            minutes: 0,
            seconds: 0,
            display,
            frame: None,
        }
    }

    /// The channel's timer
    pub fn timer(&self) -> &PausableTimer {
        &self.timer
    }

    /// Mutable access to the channel's timer
    pub fn timer_mut(&mut self) -> &mut PausableTimer {
        &mut self.timer
    }

    /// The underlying display driver
    pub fn driver(&self) -> &D {
        &self.display
    }

    /// Minutes computed at the last [`update_display`](Self::update_display)
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds computed at the last [`update_display`](Self::update_display)
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Last frame pushed to the display
    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    /// Recompute minutes/seconds and push them to the display
    ///
    /// When the shown time is `00:00` the display is blanked unless
    /// `show_zero` is set. Times past 99:59 are shown as 99:59.
    pub fn update_display(&mut self, now_us: Micros, show_zero: bool) {
        self.minutes = self.timer.elapsed_minutes(now_us);
        self.seconds = self.timer.elapsed_seconds(now_us);

        let frame = if self.minutes == 0 && self.seconds == 0 && !show_zero {
            Frame::Blank
        } else if self.minutes > MAX_DISPLAY_MINUTES {
            Frame::Time {
                minutes: MAX_DISPLAY_MINUTES as u8,
                seconds: SECONDS_PER_MINUTE - 1,
            }
        } else {
            Frame::Time {
                minutes: self.minutes as u8,
                seconds: self.seconds,
            }
        };

        self.push(frame);
    }

    /// Switch the display off, keeping the timer untouched
    pub fn blank(&mut self) {
        self.push(Frame::Blank);
    }

    /// Zero the timer and switch the display off
    pub fn reset(&mut self) {
        self.timer.reset();
        self.minutes = 0;
        self.seconds = 0;
        self.push(Frame::Blank);
    }

    /// Show a raw four-digit value
    pub fn set_digits(&mut self, digits: u16) {
        self.frame = None;
        self.display.set_digits(digits);
    }

    /// Show a time directly, bypassing the timer
    pub fn set_time(&mut self, minutes: u8, seconds: u8) {
        self.frame = None;
        self.display.set_time(minutes, seconds);
    }

    /// Turn all segments off, leaving the display powered
    pub fn clear_display(&mut self) {
        self.frame = None;
        self.display.clear();
    }

    /// Light every segment (hardware check)
    pub fn show_all(&mut self) {
        self.frame = None;
        self.display.show_all();
    }

    /// Set display brightness
    pub fn set_brightness(&mut self, brightness: u8) {
        self.display.set_brightness(brightness);
    }

    /// Current display brightness
    pub fn brightness(&self) -> u8 {
        self.display.brightness()
    }

    /// Increase brightness by one level, looping from maximum to minimum
    pub fn increment_brightness(&mut self) {
        self.display.increment_brightness();
    }

    /// Decrease brightness by one level, looping from minimum to maximum
    pub fn decrement_brightness(&mut self) {
        self.display.decrement_brightness();
    }

    fn push(&mut self, frame: Frame) {
        if self.frame == Some(frame) {
            return;
        }
        match frame {
            Frame::Blank => self.display.blank(),
            Frame::Time { minutes, seconds } => self.display.set_time(minutes, seconds),
        }
        self.frame = Some(frame);
    }
}
