//! LIN frame interface trait
//!
//! The protocol engine (framing, bit timing, checksums, schedule handling)
//! lives behind this trait. The application sees only edge-triggered
//! pending flags and the two signal byte ranges it cares about.

use lucerna_protocol::{FrameSlot, StatusReport};

/// Application-side view of the LIN protocol engine
///
/// A pending flag is the single point of ownership transfer for a frame
/// event: once the application clears it with [`frame_acknowledge`], a new
/// occurrence from the engine is required before the same event is seen
/// again. Implementations must keep the flagged payload stable until the
/// flag is cleared.
///
/// [`frame_acknowledge`]: LinBus::frame_acknowledge
pub trait LinBus {
    /// Check whether the given frame slot has a pending event
    fn frame_pending(&self, slot: FrameSlot) -> bool;

    /// Clear the pending flag for the given frame slot
    ///
    /// Called exactly once per observed event, after all payload access
    /// for that event is complete.
    fn frame_acknowledge(&mut self, slot: FrameSlot);

    /// Read the command signal (byte 0 of the command frame)
    fn read_command(&mut self) -> u8;

    /// Write the status signal (bytes 0-1 of the status frame)
    ///
    /// The engine transmits whatever was most recently written here the
    /// next time the master schedules the status frame.
    fn write_status(&mut self, report: StatusReport);
}
