//! LED bank trait

use crate::output::OutputState;

/// Trait for the three-LED output bank
///
/// Implementations own the pin-level details (polarity, drive mode) and
/// guarantee that applying a state drives exactly one LED active and the
/// other two inactive. The pins are assumed always available, so there is
/// no error path.
pub trait LedDriver {
    /// Drive the LEDs to match the given state
    ///
    /// Applying the same state twice is harmless (no toggling).
    fn apply(&mut self, state: OutputState);
}
