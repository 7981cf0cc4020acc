//! Momentary push-button with hold classification
//!
//! Each call to [`Button::sample`] reads the switch once and classifies the
//! press from the previous state and the continuous hold duration:
//!
//! ```text
//!   open                       -> Released   (hold timer reset)
//!   closed, prev Released      -> Pressed    (hold timer restarted)
//!   closed, held < threshold   -> HeldShort
//!   closed, held >= threshold  -> HeldLong
//! ```
//!
//! Classification is time-based, so the polling rate only changes how
//! finely the hold duration is observed. The `Pressed` edge, though, is
//! only seen if a sample lands between press and release: exactly one
//! sample per poll cycle is expected.

use chronobox_hal::{InputPin, Micros};

use super::switch::Switch;
use crate::config::HOLD_TIME_US;
use crate::timer::PausableTimer;

/// Classified button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button is up, open switch
    #[default]
    Released,
    /// Button is down and the previous state was `Released`
    Pressed,
    /// Button is down, previous state was not `Released`, and the
    /// required hold time has not been reached
    HeldShort,
    /// Button is down, previous state was not `Released`, and the
    /// required hold time has been reached
    HeldLong,
}

impl ButtonState {
    /// Check if the button is physically down in this state
    pub fn is_down(&self) -> bool {
        !matches!(self, ButtonState::Released)
    }

    /// Check if the button has been held past its threshold
    pub fn is_held_long(&self) -> bool {
        matches!(self, ButtonState::HeldLong)
    }
}

/// A switch plus a hold timer
#[derive(Debug)]
pub struct Button<P> {
    switch: Switch<P>,
    hold: PausableTimer,
    required_hold_us: Micros,
    state: ButtonState,
}

impl<P: InputPin> Button<P> {
    /// Create a button with the default hold threshold
    pub fn new(switch: Switch<P>) -> Self {
        Self::with_hold_time(switch, HOLD_TIME_US)
    }

    /// Create a button with a custom hold threshold
    pub fn with_hold_time(switch: Switch<P>, required_hold_us: Micros) -> Self {
        Self {
            switch,
            hold: PausableTimer::new(),
            required_hold_us,
            state: ButtonState::Released,
        }
    }

    /// Sample the switch and classify the press
    ///
    /// Drives the hold timer as a side effect: it restarts on the
    /// `Released -> Pressed` edge and resets whenever the switch opens.
    pub fn sample(&mut self, now_us: Micros) -> ButtonState {
        self.state = if !self.switch.is_closed() {
            self.hold.reset();
            ButtonState::Released
        } else if self.state == ButtonState::Released {
            self.hold.restart(now_us);
            ButtonState::Pressed
        } else if self.hold.elapsed_us(now_us) >= self.required_hold_us {
            ButtonState::HeldLong
        } else {
            ButtonState::HeldShort
        };

        self.state
    }

    /// State classified by the most recent [`sample`](Self::sample)
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// How long the current press has lasted, 0 when released
    pub fn hold_duration_us(&self, now_us: Micros) -> Micros {
        self.hold.elapsed_us(now_us)
    }

    /// Configured hold threshold
    pub fn required_hold_us(&self) -> Micros {
        self.required_hold_us
    }
}
