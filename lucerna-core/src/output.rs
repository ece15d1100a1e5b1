//! Output state model
//!
//! The node drives three discrete LEDs of which at most one is ever lit.
//! There are no combination states.

use lucerna_protocol::StatusCode;

/// The node's current output selection
///
/// Exactly one variant is active at any time. The state starts as `Off`
/// after reset and changes only when the decoder accepts a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputState {
    /// All LEDs off
    #[default]
    Off,
    /// LED1 (red) active
    Led1,
    /// LED2 (green) active
    Led2,
    /// LED3 (blue) active
    Led3,
}

impl OutputState {
    /// The status code reported for this state
    ///
    /// Status byte 1 on the bus is always this deterministic mapping,
    /// captured at the moment a command is accepted.
    pub fn status_code(self) -> StatusCode {
        match self {
            OutputState::Off => StatusCode::AllOff,
            OutputState::Led1 => StatusCode::Led1On,
            OutputState::Led2 => StatusCode::Led2On,
            OutputState::Led3 => StatusCode::Led3On,
        }
    }

    /// Check if no LED is active
    pub fn is_off(self) -> bool {
        matches!(self, OutputState::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_off() {
        assert_eq!(OutputState::default(), OutputState::Off);
        assert!(OutputState::default().is_off());
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(OutputState::Off.status_code(), StatusCode::AllOff);
        assert_eq!(OutputState::Led1.status_code(), StatusCode::Led1On);
        assert_eq!(OutputState::Led2.status_code(), StatusCode::Led2On);
        assert_eq!(OutputState::Led3.status_code(), StatusCode::Led3On);
    }
}
