//! Input sampling and classification
//!
//! A [`Switch`] is a raw sample of one pin. A [`Button`] adds a hold
//! timer on top and classifies each sample into a [`ButtonState`].

pub mod button;
pub mod switch;

pub use button::{Button, ButtonState};
pub use switch::Switch;

#[cfg(test)]
pub(crate) mod mock {
    //! Shared test pins whose level the test can change while a
    //! switch or button owns the pin.

    use core::cell::Cell;

    use chronobox_hal::InputPin;

    /// Input pin reading from a test-owned cell
    #[derive(Clone, Copy)]
    pub struct MockPin<'a>(pub &'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }
}
