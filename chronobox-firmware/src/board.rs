//! Board assembly
//!
//! Turns the pinout table into configured embassy pins and builds the
//! timer box from them.

use defmt::Format;
use embassy_rp::gpio::{Level, Output, OutputOpenDrain};
use embassy_time::Delay;
use heapless::Vec;

use chronobox_core::config::{Pinout, TIMER_COUNT};
use chronobox_core::input::{Button, Switch};
use chronobox_core::orchestrator::TimerBox;
use chronobox_drivers::display::Tm1637;
use chronobox_hal_rp2040::{PinBank, PinError, SwitchInput};

/// Display driver type used on this board
pub type BoardDisplay = Tm1637<Output<'static>, OutputOpenDrain<'static>, Delay>;

/// The timer box as wired on this board
pub type BoardTimerBox = TimerBox<SwitchInput, BoardDisplay>;

/// Errors while assembling the board
#[derive(Debug, Clone, Copy, Format)]
pub enum BoardError {
    /// A pin could not be taken from the bank
    Pin(PinError),
    /// Fewer channels were built than the box needs
    ChannelCount,
}

impl From<PinError> for BoardError {
    fn from(e: PinError) -> Self {
        BoardError::Pin(e)
    }
}

/// Claim every pin in `pinout` and build the timer box
pub fn build_timer_box(bank: &mut PinBank, pinout: &Pinout) -> Result<BoardTimerBox, BoardError> {
    let mut displays: Vec<BoardDisplay, TIMER_COUNT> = Vec::new();
    for pins in pinout.displays.iter() {
        let clk = Output::new(bank.take(pins.clk)?, Level::High);
        // Open-drain so the TM1637 can pull DIO low for its ACK
        let dio = OutputOpenDrain::new(bank.take(pins.dio)?, Level::High);
        displays
            .push(Tm1637::new(clk, dio, Delay))
            .map_err(|_| BoardError::ChannelCount)?;
    }

    let mut buttons: Vec<Button<SwitchInput>, TIMER_COUNT> = Vec::new();
    for config in pinout.timer_buttons.iter() {
        let input = SwitchInput::new(bank.take(config.pin)?, config);
        buttons
            .push(Button::new(Switch::from_config(input, config)))
            .map_err(|_| BoardError::ChannelCount)?;
    }

    let reset = &pinout.reset_button;
    let reset_button = Button::new(Switch::from_config(
        SwitchInput::new(bank.take(reset.pin)?, reset),
        reset,
    ));

    let gate = &pinout.display_switch;
    let display_switch = Switch::from_config(SwitchInput::new(bank.take(gate.pin)?, gate), gate);

    let displays = displays.into_array().map_err(|_| BoardError::ChannelCount)?;
    let buttons = buttons.into_array().map_err(|_| BoardError::ChannelCount)?;

    Ok(TimerBox::new(displays, buttons, reset_button, display_switch))
}
