//! Command decoder
//!
//! Pure mapping from a received command byte to an output transition and
//! the status code reported for it. The protocol is stateless per command:
//! a valid byte fully determines the next output state regardless of
//! history.

use lucerna_protocol::{Command, StatusCode};

use crate::output::OutputState;

/// An accepted command's effect: the output to select and the code to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Output state to apply
    pub output: OutputState,
    /// Status code to report for it
    pub status: StatusCode,
}

/// Decode one command byte
///
/// Returns `None` for unrecognized bytes. That is the protocol's defined
/// ignore policy, not an error: the caller must leave the output state,
/// the last-command record, and the outbound payload untouched.
pub fn decode(byte: u8) -> Option<Transition> {
    let output = match Command::from_byte(byte)? {
        Command::AllOff => OutputState::Off,
        Command::SetLed1 => OutputState::Led1,
        Command::SetLed2 => OutputState::Led2,
        Command::SetLed3 => OutputState::Led3,
    };

    Some(Transition {
        output,
        status: output.status_code(),
    })
}
