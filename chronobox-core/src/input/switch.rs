//! Switch sampling
//!
//! No debouncing happens here. Callers sample once per poll cycle.

use chronobox_hal::InputPin;

use crate::config::PinConfig;

/// A two-state switch bound to one input pin
///
/// A closed circuit counts as active/pressed. For active-low wiring
/// (switch to ground with pull-up) construct with [`Switch::active_low`].
#[derive(Debug)]
pub struct Switch<P> {
    pin: P,
    /// If true, closed = pin LOW
    inverted: bool,
}

impl<P: InputPin> Switch<P> {
    /// Create a switch that is closed when the pin reads high
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create a switch that is closed when the pin reads low
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Create a switch with the polarity given by a pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self {
            pin,
            inverted: config.inverted,
        }
    }

    /// Sample the pin: `true` if the circuit is closed (switch ON)
    pub fn is_closed(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
