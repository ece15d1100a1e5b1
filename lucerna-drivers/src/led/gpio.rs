//! GPIO LED bank
//!
//! Drives the three status LEDs directly from GPIO pins. The kit wires
//! the LEDs between the supply rail and the pin, so the logic is
//! inverted: a pin held LOW lights its LED, a pin held HIGH keeps it
//! dark.

use lucerna_core::traits::LedDriver;
use lucerna_core::OutputState;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;
}

/// Three-LED output bank over raw GPIO pins
///
/// Applying a state drives the selected LED's pin low and the other two
/// high, in one pass. The constructor forces all pins high so the bank
/// starts dark regardless of prior pin state.
pub struct GpioLedBank<P> {
    led1: P,
    led2: P,
    led3: P,
}

impl<P: OutputPin> GpioLedBank<P> {
    /// Create a new LED bank and turn all LEDs off
    pub fn new(led1: P, led2: P, led3: P) -> Self {
        let mut bank = Self { led1, led2, led3 };
        bank.apply(OutputState::Off);
        bank
    }
}

impl<P: OutputPin> LedDriver for GpioLedBank<P> {
    fn apply(&mut self, state: OutputState) {
        let (lit1, lit2, lit3) = match state {
            OutputState::Off => (false, false, false),
            OutputState::Led1 => (true, false, false),
            OutputState::Led2 => (false, true, false),
            OutputState::Led3 => (false, false, true),
        };

        // Active low: lit = pin driven low
        set_inverted(&mut self.led1, lit1);
        set_inverted(&mut self.led2, lit2);
        set_inverted(&mut self.led3, lit3);
    }
}

fn set_inverted<P: OutputPin>(pin: &mut P, lit: bool) {
    if lit {
        pin.set_low();
    } else {
        pin.set_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            // Pins come up low on reset
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn pin_levels<P: OutputPin>(bank: &GpioLedBank<P>) -> (bool, bool, bool) {
        (
            bank.led1.is_set_high(),
            bank.led2.is_set_high(),
            bank.led3.is_set_high(),
        )
    }

    #[test]
    fn test_bank_starts_dark() {
        let bank = GpioLedBank::new(MockPin::new(), MockPin::new(), MockPin::new());
        // All pins high = all LEDs off
        assert_eq!(pin_levels(&bank), (true, true, true));
    }

    #[test]
    fn test_exactly_one_pin_low_per_state() {
        let mut bank = GpioLedBank::new(MockPin::new(), MockPin::new(), MockPin::new());

        bank.apply(OutputState::Led1);
        assert_eq!(pin_levels(&bank), (false, true, true));

        bank.apply(OutputState::Led2);
        assert_eq!(pin_levels(&bank), (true, false, true));

        bank.apply(OutputState::Led3);
        assert_eq!(pin_levels(&bank), (true, true, false));

        bank.apply(OutputState::Off);
        assert_eq!(pin_levels(&bank), (true, true, true));
    }

    #[test]
    fn test_reapply_is_stable() {
        let mut bank = GpioLedBank::new(MockPin::new(), MockPin::new(), MockPin::new());

        bank.apply(OutputState::Led2);
        bank.apply(OutputState::Led2);
        assert_eq!(pin_levels(&bank), (true, false, true));
    }
}
