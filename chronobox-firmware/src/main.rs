//! Chronobox - Multi-Channel Turn Clock Firmware
//!
//! Main firmware binary for RP2040-based turn clocks. Five elapsed-time
//! displays, one button per display, a shared reset button and a display
//! enable switch. One clock runs at a time: pressing a channel's button
//! passes the turn to it.
//!
//! # Controls
//!
//! - **Channel button**: start this channel (pausing the running one), or
//!   pause it if it is already running
//! - **Reset button**: hold for two seconds to zero every channel
//! - **Display switch**: open to blank all displays; timers keep counting

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use chronobox_core::config::{DEFAULT_BRIGHTNESS, DEFAULT_PINOUT, MAX_BRIGHTNESS};
use chronobox_hal_rp2040::PinBank;

mod board;
mod tasks;

/// How long the boot segment test stays lit
const TEST_DISPLAY_MS: u64 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chronobox firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Catch pin clashes before any pin is claimed
    if let Err(e) = DEFAULT_PINOUT.validate() {
        defmt::panic!("Invalid pinout: {}", e);
    }

    let mut bank = PinBank::new(p);
    let mut timer_box = match board::build_timer_box(&mut bank, &DEFAULT_PINOUT) {
        Ok(timer_box) => timer_box,
        Err(e) => defmt::panic!("Board setup failed: {}", e),
    };
    info!("Timer box initialized");

    // Light every segment briefly so dead digits are visible at power-on
    timer_box.test_display(MAX_BRIGHTNESS);
    Timer::after_millis(TEST_DISPLAY_MS).await;

    timer_box.set_brightness(DEFAULT_BRIGHTNESS);
    timer_box.reset_timer_displays();
    info!("Displays reset, starting poll loop");

    spawner.spawn(tasks::poll_task(timer_box)).unwrap();
}
