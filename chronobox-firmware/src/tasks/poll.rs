//! Poll task
//!
//! Samples every input once per cycle, then refreshes every display.
//! The clock is read once per cycle so all channels see the same instant.

use defmt::*;
use embassy_time::{Duration, Ticker};

use chronobox_core::config::POLL_INTERVAL_MS;
use chronobox_core::orchestrator::BoxEvent;
use chronobox_hal_rp2040::{EmbassyClock, MonotonicClock};

use crate::board::BoardTimerBox;

/// Poll task - runs the timer box at a fixed cadence
#[embassy_executor::task]
pub async fn poll_task(mut timer_box: BoardTimerBox) {
    info!("Poll task started ({}ms cycle)", POLL_INTERVAL_MS);

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let now_us = clock.now_us();

        for event in timer_box.poll_inputs(now_us) {
            log_event(event, &timer_box, now_us);
        }
        timer_box.update_timer_displays(now_us);

        ticker.next().await;
    }
}

fn log_event(event: BoxEvent, timer_box: &BoardTimerBox, now_us: u64) {
    match event {
        BoxEvent::ChannelPaused(i) => {
            if let Some(channel) = timer_box.channel(i) {
                let timer = channel.timer();
                info!(
                    "Channel {} paused at {}m {}s",
                    i,
                    timer.elapsed_minutes(now_us),
                    timer.elapsed_seconds(now_us)
                );
            }
        }
        BoxEvent::ChannelStarted(i) => info!("Channel {} started", i),
        BoxEvent::ResetAll => info!("Reset held, all channels zeroed"),
        BoxEvent::DisplayDisabled => info!("Displays off"),
        BoxEvent::DisplayEnabled => info!("Displays on"),
    }
}
