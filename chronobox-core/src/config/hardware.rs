//! Hardware configuration types
//!
//! These types define which GPIO each switch, button and display uses.
//! The pinout is a compile-time table; [`Pinout::validate`] catches
//! out-of-range and doubly assigned pins before any pin is claimed.

use heapless::FnvIndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::TIMER_COUNT;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (closed circuit reads low)
    pub inverted: bool,
    /// Enable internal pull-up (pull-down otherwise)
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new active-high pin config with pull-down
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low pin with pull-up, for switches wired to ground
    pub const fn active_low(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Two-wire display bus pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// Clock line
    pub clk: u8,
    /// Data line
    pub dio: u8,
}

impl DisplayPins {
    /// Create a display pin pair
    pub const fn new(clk: u8, dio: u8) -> Self {
        Self { clk, dio }
    }
}

/// Errors found while validating a pinout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinoutError {
    /// Pin number out of range
    InvalidPin(u8),
    /// Pin assigned to more than one function
    DuplicatePin(u8),
}

/// Complete board pinout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pinout {
    /// Display bus per channel
    pub displays: [DisplayPins; TIMER_COUNT],
    /// Start/pause button per channel
    pub timer_buttons: [PinConfig; TIMER_COUNT],
    /// Shared reset button (hold to reset all channels)
    pub reset_button: PinConfig,
    /// Display enable switch
    pub display_switch: PinConfig,
}

/// Pinout of the reference board
pub const DEFAULT_PINOUT: Pinout = Pinout {
    displays: [
        DisplayPins::new(2, 3),
        DisplayPins::new(4, 5),
        DisplayPins::new(6, 7),
        DisplayPins::new(8, 9),
        DisplayPins::new(10, 11),
    ],
    timer_buttons: [
        PinConfig::new(28),
        PinConfig::new(27),
        PinConfig::new(26),
        PinConfig::new(22),
        PinConfig::new(21),
    ],
    reset_button: PinConfig::new(20),
    display_switch: PinConfig::new(17),
};

/// Total number of GPIOs a pinout claims
pub const PINOUT_PIN_COUNT: usize = TIMER_COUNT * 3 + 2;

impl Pinout {
    /// Every GPIO number this pinout claims
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        self.displays
            .iter()
            .flat_map(|d| [d.clk, d.dio])
            .chain(self.timer_buttons.iter().map(|b| b.pin))
            .chain([self.reset_button.pin, self.display_switch.pin])
    }

    /// Check that every pin is in range and claimed once
    pub fn validate(&self) -> Result<(), PinoutError> {
        let mut claimed: FnvIndexSet<u8, 32> = FnvIndexSet::new();

        for pin in self.pins() {
            if pin >= GPIO_COUNT {
                return Err(PinoutError::InvalidPin(pin));
            }
            // Capacity (32) exceeds GPIO_COUNT, so insert only fails on duplicates
            match claimed.insert(pin) {
                Ok(true) => {}
                Ok(false) | Err(_) => return Err(PinoutError::DuplicatePin(pin)),
            }
        }

        Ok(())
    }
}

impl Default for Pinout {
    fn default() -> Self {
        DEFAULT_PINOUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pinout_is_valid() {
        assert_eq!(DEFAULT_PINOUT.validate(), Ok(()));
        assert_eq!(DEFAULT_PINOUT.pins().count(), PINOUT_PIN_COUNT);
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut pinout = DEFAULT_PINOUT;
        pinout.reset_button = PinConfig::new(28);
        assert_eq!(pinout.validate(), Err(PinoutError::DuplicatePin(28)));
    }

    #[test]
    fn test_display_pin_clash_rejected() {
        let mut pinout = DEFAULT_PINOUT;
        pinout.displays[4] = DisplayPins::new(10, 2);
        assert_eq!(pinout.validate(), Err(PinoutError::DuplicatePin(2)));
    }

    #[test]
    fn test_out_of_range_pin_rejected() {
        let mut pinout = DEFAULT_PINOUT;
        pinout.display_switch = PinConfig::new(30);
        assert_eq!(pinout.validate(), Err(PinoutError::InvalidPin(30)));
    }

    #[test]
    fn test_active_low_pin() {
        let pin = PinConfig::active_low(5);
        assert!(pin.inverted);
        assert!(pin.pull_up);
        assert!(!PinConfig::new(5).inverted);
    }
}
