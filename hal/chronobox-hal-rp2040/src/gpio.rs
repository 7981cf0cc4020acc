//! GPIO input adapters
//!
//! Wraps embassy-rp inputs so the core can sample them through
//! [`chronobox_hal::InputPin`].

use chronobox_core::config::PinConfig;
use chronobox_hal::InputPin;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;

/// A switch or button input configured from a [`PinConfig`]
pub struct SwitchInput {
    input: Input<'static>,
}

impl SwitchInput {
    /// Configure `pin` as an input with the pull resistor from `config`
    ///
    /// Active-high switches get a pull-down so an open switch reads low.
    pub fn new(pin: Peri<'static, AnyPin>, config: &PinConfig) -> Self {
        let pull = if config.pull_up { Pull::Up } else { Pull::Down };
        Self {
            input: Input::new(pin, pull),
        }
    }
}

impl InputPin for SwitchInput {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
