//! Timer box orchestrator
//!
//! Owns every channel (timer display + button), the shared reset button
//! and the display-enable switch. Each poll cycle:
//!
//! 1. Sample the display switch. Open means displays are blanked; timers
//!    keep accumulating.
//! 2. Sample the reset button. Reaching `HeldLong` zeroes every channel,
//!    once per hold.
//! 3. Sample every channel button. A `Pressed` edge on channel *i* pauses
//!    *i* if it was running, otherwise pauses whichever channel runs and
//!    starts *i*. At most one channel runs at any poll boundary.
//!
//! Rendering is a separate step ([`TimerBox::update_timer_displays`]) so
//! the caller decides the refresh order.

use chronobox_hal::{InputPin, Micros};

use super::events::{BoxEvent, BoxEvents};
use crate::config::TIMER_COUNT;
use crate::display::DisplayChannel;
use crate::input::{Button, ButtonState, Switch};
use crate::traits::SegmentDisplay;

/// The complete turn clock
pub struct TimerBox<P, D> {
    timers: [DisplayChannel<D>; TIMER_COUNT],
    timer_buttons: [Button<P>; TIMER_COUNT],
    reset_button: Button<P>,
    show_display_switch: Switch<P>,
    /// Display gate as of the last poll
    display_enabled: bool,
    /// Reset fires only after the reset button has been released
    reset_armed: bool,
}

impl<P: InputPin, D: SegmentDisplay> TimerBox<P, D> {
    /// Build a box from its displays and inputs
    ///
    /// Channel *i* pairs `displays[i]` with `timer_buttons[i]`. All
    /// timers start stopped at zero; call
    /// [`reset_timer_displays`](Self::reset_timer_displays) at boot to
    /// put the displays in a known state.
    pub fn new(
        displays: [D; TIMER_COUNT],
        timer_buttons: [Button<P>; TIMER_COUNT],
        reset_button: Button<P>,
        show_display_switch: Switch<P>,
    ) -> Self {
        Self {
            timers: displays.map(DisplayChannel::new),
            timer_buttons,
            reset_button,
            show_display_switch,
            display_enabled: true,
            reset_armed: true,
        }
    }

    /// Run one poll cycle at `now_us`
    ///
    /// Samples every input exactly once. Returns what changed.
    pub fn poll_inputs(&mut self, now_us: Micros) -> BoxEvents {
        let mut events = BoxEvents::new();

        self.handle_display_off(&mut events);
        let reset_fired = self.handle_reset(now_us, &mut events);

        for i in 0..TIMER_COUNT {
            // Every button is sampled each cycle so no edge is lost; a
            // press landing on the reset cycle is dropped with the reset
            let state = self.timer_buttons[i].sample(now_us);
            if state == ButtonState::Pressed && !reset_fired {
                self.toggle_channel(i, now_us, &mut events);
            }
        }

        events
    }

    /// Push every channel's time to its display
    ///
    /// Blanks all displays while the display switch is open. The running
    /// channel shows `00:00` right away; idle channels at zero stay dark.
    pub fn update_timer_displays(&mut self, now_us: Micros) {
        if !self.display_enabled {
            self.blank_all();
            return;
        }

        for channel in self.timers.iter_mut() {
            let running = channel.timer().is_running();
            channel.update_display(now_us, running);
        }
    }

    /// Zero and stop every timer and blank every display
    ///
    /// Used at boot and by the reset gesture.
    pub fn reset_timer_displays(&mut self) {
        for channel in self.timers.iter_mut() {
            channel.reset();
        }
    }

    /// Light every segment of every display at `brightness`
    ///
    /// Diagnostic only; the next update restores normal output.
    pub fn test_display(&mut self, brightness: u8) {
        for channel in self.timers.iter_mut() {
            channel.set_brightness(brightness);
            channel.show_all();
        }
    }

    /// Set the brightness of every display
    pub fn set_brightness(&mut self, brightness: u8) {
        for channel in self.timers.iter_mut() {
            channel.set_brightness(brightness);
        }
    }

    /// Index of the running channel, if any
    pub fn running_channel(&self) -> Option<usize> {
        self.timers.iter().position(|c| c.timer().is_running())
    }

    /// Number of channels currently running
    pub fn running_count(&self) -> usize {
        self.timers.iter().filter(|c| c.timer().is_running()).count()
    }

    /// Display gate as of the last poll
    pub fn is_display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Channel `index`, if in range
    pub fn channel(&self, index: usize) -> Option<&DisplayChannel<D>> {
        self.timers.get(index)
    }

    /// Reset button state from the last poll
    pub fn reset_button_state(&self) -> ButtonState {
        self.reset_button.state()
    }

    /// Sample the display switch; blank everything on the closed -> open edge
    fn handle_display_off(&mut self, events: &mut BoxEvents) {
        let enabled = self.show_display_switch.is_closed();

        if enabled != self.display_enabled {
            self.display_enabled = enabled;
            if enabled {
                push_event(events, BoxEvent::DisplayEnabled);
            } else {
                self.blank_all();
                push_event(events, BoxEvent::DisplayDisabled);
            }
        }
    }

    /// Sample the reset button; reset everything on a confirmed long hold
    ///
    /// Returns `true` on the cycle the reset fires.
    fn handle_reset(&mut self, now_us: Micros, events: &mut BoxEvents) -> bool {
        match self.reset_button.sample(now_us) {
            ButtonState::Released => self.reset_armed = true,
            ButtonState::HeldLong if self.reset_armed => {
                self.reset_armed = false;
                self.reset_timer_displays();
                push_event(events, BoxEvent::ResetAll);
                return true;
            }
            ButtonState::Pressed | ButtonState::HeldShort | ButtonState::HeldLong => {}
        }

        false
    }

    /// Turn passing: pause `index` if running, else make it the only runner
    fn toggle_channel(&mut self, index: usize, now_us: Micros, events: &mut BoxEvents) {
        if self.timers[index].timer().is_running() {
            self.timers[index].timer_mut().pause(now_us);
            push_event(events, BoxEvent::ChannelPaused(index));
            return;
        }

        for (i, channel) in self.timers.iter_mut().enumerate() {
            if channel.timer().is_running() {
                channel.timer_mut().pause(now_us);
                push_event(events, BoxEvent::ChannelPaused(i));
            }
        }

        self.timers[index].timer_mut().start(now_us);
        push_event(events, BoxEvent::ChannelStarted(index));
    }

    fn blank_all(&mut self) {
        for channel in self.timers.iter_mut() {
            channel.blank();
        }
    }
}

/// Record an event; a poll can never produce more than the list holds
fn push_event(events: &mut BoxEvents, event: BoxEvent) {
    let pushed = events.push(event);
    debug_assert!(pushed.is_ok(), "event list overflow");
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use proptest::prelude::*;

    use super::*;
    use crate::config::{HOLD_TIME_US, MAX_BRIGHTNESS, US_PER_SECOND};
    use crate::display::Frame;
    use crate::input::mock::MockPin;
    use crate::orchestrator::MAX_EVENTS_PER_POLL;
    use crate::traits::display::mock::{MockDisplay, Shown};

    const STEP: Micros = 10_000;
    const RESET: usize = TIMER_COUNT;
    const SWITCH: usize = TIMER_COUNT + 1;

    type Levels = [Cell<bool>; TIMER_COUNT + 2];

    fn levels() -> Levels {
        let levels: Levels = core::array::from_fn(|_| Cell::new(false));
        levels[SWITCH].set(true);
        levels
    }

    fn build(levels: &Levels) -> TimerBox<MockPin<'_>, MockDisplay> {
        let buttons = core::array::from_fn(|i| Button::new(Switch::new(MockPin(&levels[i]))));
        TimerBox::new(
            core::array::from_fn(|_| MockDisplay::new()),
            buttons,
            Button::new(Switch::new(MockPin(&levels[RESET]))),
            Switch::new(MockPin(&levels[SWITCH])),
        )
    }

    /// Press and release button `pin` over two polls, returning the next instant
    fn tap(
        timer_box: &mut TimerBox<MockPin<'_>, MockDisplay>,
        levels: &Levels,
        pin: usize,
        now: Micros,
    ) -> (BoxEvents, Micros) {
        levels[pin].set(true);
        let events = timer_box.poll_inputs(now);
        levels[pin].set(false);
        timer_box.poll_inputs(now + STEP);
        (events, now + 2 * STEP)
    }

    fn shown(timer_box: &TimerBox<MockPin<'_>, MockDisplay>, i: usize) -> Shown {
        timer_box.channel(i).map(|c| c.driver().shown).unwrap()
    }

    #[test]
    fn test_boot_state() {
        let levels = levels();
        let mut tb = build(&levels);
        tb.reset_timer_displays();

        assert_eq!(tb.running_channel(), None);
        for i in 0..TIMER_COUNT {
            assert_eq!(shown(&tb, i), Shown::Off);
            assert_eq!(tb.channel(i).unwrap().timer().elapsed_us(0), 0);
        }

        // Idle poll does nothing
        assert!(tb.poll_inputs(0).is_empty());
        tb.update_timer_displays(0);
        for i in 0..TIMER_COUNT {
            assert_eq!(shown(&tb, i), Shown::Off);
        }
    }

    #[test]
    fn test_press_starts_and_second_press_pauses() {
        let levels = levels();
        let mut tb = build(&levels);

        levels[2].set(true);
        let events = tb.poll_inputs(0);
        assert_eq!(events.as_slice(), &[BoxEvent::ChannelStarted(2)]);
        assert_eq!(tb.running_channel(), Some(2));

        // Holding the button does not toggle again
        assert!(tb.poll_inputs(STEP).is_empty());
        assert!(tb.poll_inputs(3 * US_PER_SECOND).is_empty());
        assert_eq!(tb.running_channel(), Some(2));
        levels[2].set(false);
        tb.poll_inputs(3 * US_PER_SECOND + STEP);

        let (events, _) = tap(&mut tb, &levels, 2, 10 * US_PER_SECOND);
        assert_eq!(events.as_slice(), &[BoxEvent::ChannelPaused(2)]);
        assert_eq!(tb.running_channel(), None);
        assert_eq!(
            tb.channel(2).unwrap().timer().stored_us(),
            10 * US_PER_SECOND
        );
    }

    #[test]
    fn test_turn_passing() {
        let levels = levels();
        let mut tb = build(&levels);

        tap(&mut tb, &levels, 0, 0);
        let (events, _) = tap(&mut tb, &levels, 1, 5 * US_PER_SECOND);
        assert_eq!(
            events.as_slice(),
            &[BoxEvent::ChannelPaused(0), BoxEvent::ChannelStarted(1)]
        );

        let ch0 = tb.channel(0).unwrap();
        assert!(!ch0.timer().is_running());
        assert_eq!(ch0.timer().stored_seconds(), 5);
        assert_eq!(tb.running_channel(), Some(1));
    }

    #[test]
    fn test_simultaneous_presses_keep_one_runner() {
        let levels = levels();
        let mut tb = build(&levels);

        levels[0].set(true);
        levels[3].set(true);
        let events = tb.poll_inputs(0);
        assert_eq!(
            events.as_slice(),
            &[
                BoxEvent::ChannelStarted(0),
                BoxEvent::ChannelPaused(0),
                BoxEvent::ChannelStarted(3),
            ]
        );
        assert_eq!(tb.running_count(), 1);
        assert_eq!(tb.running_channel(), Some(3));
    }

    #[test]
    fn test_reset_requires_long_hold() {
        let levels = levels();
        let mut tb = build(&levels);

        tap(&mut tb, &levels, 0, 0);

        // A short tap on reset does nothing
        let (events, now) = tap(&mut tb, &levels, RESET, US_PER_SECOND);
        assert!(events.is_empty());
        assert_eq!(tb.running_channel(), Some(0));

        // Hold it past the threshold
        levels[RESET].set(true);
        let start = now;
        let mut t = start;
        let mut resets = 0;
        while t <= start + HOLD_TIME_US + US_PER_SECOND {
            let events = tb.poll_inputs(t);
            resets += events.iter().filter(|e| **e == BoxEvent::ResetAll).count();
            if t < start + HOLD_TIME_US {
                assert_eq!(tb.running_channel(), Some(0));
            }
            t += STEP;
        }

        // Fires once per hold
        assert_eq!(resets, 1);
        assert_eq!(tb.running_channel(), None);
        assert_eq!(tb.channel(0).unwrap().timer().elapsed_us(t), 0);

        // Releasing and holding again fires again
        levels[RESET].set(false);
        tb.poll_inputs(t);
        levels[RESET].set(true);
        tb.poll_inputs(t + STEP);
        let events = tb.poll_inputs(t + STEP + HOLD_TIME_US);
        assert_eq!(events.as_slice(), &[BoxEvent::ResetAll]);
    }

    #[test]
    fn test_channel_press_during_reset_tap_still_toggles() {
        let levels = levels();
        let mut tb = build(&levels);

        // Reset and channel 0 close in the same cycle
        levels[RESET].set(true);
        levels[0].set(true);
        let events = tb.poll_inputs(0);
        assert_eq!(tb.reset_button_state(), ButtonState::Pressed);
        assert_eq!(events.as_slice(), &[BoxEvent::ChannelStarted(0)]);
        levels[0].set(false);
        tb.poll_inputs(STEP);

        // Reset still short-held; channel 1 takes the turn
        let (events, _) = tap(&mut tb, &levels, 1, 2 * STEP);
        assert_eq!(tb.reset_button_state(), ButtonState::HeldShort);
        assert_eq!(
            events.as_slice(),
            &[BoxEvent::ChannelPaused(0), BoxEvent::ChannelStarted(1)]
        );
        assert_eq!(tb.running_channel(), Some(1));
    }

    #[test]
    fn test_busiest_poll_fits_event_list() {
        let levels = levels();
        let mut tb = build(&levels);

        // Display gate flips and every channel is pressed at once
        levels[SWITCH].set(false);
        for level in levels.iter().take(TIMER_COUNT) {
            level.set(true);
        }
        let events = tb.poll_inputs(0);

        assert_eq!(events.len(), 2 * TIMER_COUNT);
        assert_eq!(events[0], BoxEvent::DisplayDisabled);
        assert_eq!(
            events.last(),
            Some(&BoxEvent::ChannelStarted(TIMER_COUNT - 1))
        );
        assert!(events.len() < MAX_EVENTS_PER_POLL);
    }

    #[test]
    fn test_press_on_reset_cycle_is_dropped() {
        let levels = levels();
        let mut tb = build(&levels);

        levels[RESET].set(true);
        tb.poll_inputs(0);
        tb.poll_inputs(STEP);

        levels[2].set(true);
        let events = tb.poll_inputs(HOLD_TIME_US);
        assert_eq!(events.as_slice(), &[BoxEvent::ResetAll]);
        assert_eq!(tb.running_channel(), None);
        levels[2].set(false);
        tb.poll_inputs(HOLD_TIME_US + STEP);

        // Reset still held but already fired; presses work again
        let (events, _) = tap(&mut tb, &levels, 2, HOLD_TIME_US + 2 * STEP);
        assert_eq!(tb.reset_button_state(), ButtonState::HeldLong);
        assert_eq!(events.as_slice(), &[BoxEvent::ChannelStarted(2)]);
    }

    #[test]
    fn test_display_switch_gates_rendering_only() {
        let levels = levels();
        let mut tb = build(&levels);

        tap(&mut tb, &levels, 0, 0);
        tb.update_timer_displays(3 * US_PER_SECOND);
        assert_eq!(shown(&tb, 0), Shown::Time(0, 3));

        levels[SWITCH].set(false);
        let events = tb.poll_inputs(4 * US_PER_SECOND);
        assert_eq!(events.as_slice(), &[BoxEvent::DisplayDisabled]);
        assert!(!tb.is_display_enabled());
        assert_eq!(shown(&tb, 0), Shown::Off);

        tb.update_timer_displays(20 * US_PER_SECOND);
        for i in 0..TIMER_COUNT {
            assert_eq!(shown(&tb, i), Shown::Off);
        }
        // Timer kept running
        assert_eq!(tb.running_channel(), Some(0));

        levels[SWITCH].set(true);
        let events = tb.poll_inputs(25 * US_PER_SECOND);
        assert_eq!(events.as_slice(), &[BoxEvent::DisplayEnabled]);
        tb.update_timer_displays(25 * US_PER_SECOND);
        assert_eq!(shown(&tb, 0), Shown::Time(0, 25));
    }

    #[test]
    fn test_running_channel_shows_zero() {
        let levels = levels();
        let mut tb = build(&levels);

        tap(&mut tb, &levels, 1, 0);
        tb.update_timer_displays(2 * STEP);
        assert_eq!(shown(&tb, 1), Shown::Time(0, 0));
        assert_eq!(shown(&tb, 0), Shown::Off);
        assert_eq!(tb.channel(0).unwrap().frame(), Some(Frame::Blank));
    }

    #[test]
    fn test_test_display_lights_everything() {
        let levels = levels();
        let mut tb = build(&levels);

        tb.test_display(MAX_BRIGHTNESS);
        for i in 0..TIMER_COUNT {
            assert_eq!(shown(&tb, i), Shown::AllSegments);
            assert_eq!(tb.channel(i).unwrap().brightness(), MAX_BRIGHTNESS);
        }

        tb.set_brightness(2);
        tb.reset_timer_displays();
        for i in 0..TIMER_COUNT {
            assert_eq!(shown(&tb, i), Shown::Off);
            assert_eq!(tb.channel(i).unwrap().brightness(), 2);
        }
    }

    #[test]
    fn test_end_to_end_session() {
        let levels = levels();
        let mut tb = build(&levels);

        // Boot
        tb.reset_timer_displays();
        tb.update_timer_displays(0);
        assert_eq!(tb.running_count(), 0);

        // Channel 0 takes a 5 second turn
        tap(&mut tb, &levels, 0, 0);
        assert_eq!(tb.running_channel(), Some(0));
        for i in 1..TIMER_COUNT {
            assert_eq!(tb.channel(i).unwrap().timer().elapsed_us(0), 0);
        }

        // Channel 1 takes over
        tap(&mut tb, &levels, 1, 5 * US_PER_SECOND);
        assert_eq!(
            tb.channel(0).unwrap().timer().elapsed_us(60 * US_PER_SECOND),
            5 * US_PER_SECOND
        );
        assert_eq!(tb.running_channel(), Some(1));

        // Display off for a while, values keep accumulating
        levels[SWITCH].set(false);
        tb.poll_inputs(10 * US_PER_SECOND);
        tb.update_timer_displays(10 * US_PER_SECOND);
        assert_eq!(shown(&tb, 0), Shown::Off);
        assert_eq!(shown(&tb, 1), Shown::Off);

        levels[SWITCH].set(true);
        tb.poll_inputs(12 * US_PER_SECOND);
        tb.update_timer_displays(12 * US_PER_SECOND);
        assert_eq!(shown(&tb, 0), Shown::Time(0, 5));
        assert_eq!(shown(&tb, 1), Shown::Time(0, 7));

        // Hold reset for the full threshold
        levels[RESET].set(true);
        let start = 13 * US_PER_SECOND;
        let mut t = start;
        while t <= start + HOLD_TIME_US {
            tb.poll_inputs(t);
            t += STEP;
        }
        levels[RESET].set(false);
        tb.poll_inputs(t);
        tb.update_timer_displays(t);

        assert_eq!(tb.running_count(), 0);
        for i in 0..TIMER_COUNT {
            assert_eq!(tb.channel(i).unwrap().timer().elapsed_us(t), 0);
            assert_eq!(shown(&tb, i), Shown::Off);
        }
    }

    proptest! {
        #[test]
        fn prop_at_most_one_channel_runs(
            presses in proptest::collection::vec((0usize..TIMER_COUNT, 1u64..5_000_000), 1..60),
        ) {
            let levels = levels();
            let mut tb = build(&levels);
            let mut now: Micros = 0;

            for (channel, gap) in presses {
                let (_, next) = tap(&mut tb, &levels, channel, now);
                prop_assert!(tb.running_count() <= 1);
                now = next + gap;
            }
        }

        #[test]
        fn prop_overlapping_presses_keep_exclusion(
            masks in proptest::collection::vec(0u8..32, 1..80),
        ) {
            let levels = levels();
            let mut tb = build(&levels);
            let mut now: Micros = 0;

            for mask in masks {
                for (i, level) in levels.iter().take(TIMER_COUNT).enumerate() {
                    level.set(mask & (1 << i) != 0);
                }
                tb.poll_inputs(now);
                prop_assert!(tb.running_count() <= 1);
                now += STEP;
            }
        }
    }
}
