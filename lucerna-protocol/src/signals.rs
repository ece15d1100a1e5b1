//! Frame identifiers and signal layout
//!
//! These constants mirror the master's schedule table entry for this node.
//! The slave never selects frames itself; it only reacts when the protocol
//! engine flags one of the two slots below.

/// Bus identifier of the command frame (master -> slave)
pub const FRAME_ID_COMMAND: u8 = 0x10;

/// Bus identifier of the status frame (slave -> master)
pub const FRAME_ID_STATUS: u8 = 0x11;

/// Byte offset of the command signal within the command frame payload
pub const COMMAND_SIGNAL_OFFSET: usize = 0;

/// Length of the command signal in bytes
pub const COMMAND_SIGNAL_LEN: usize = 1;

/// Byte offset of the status signal within the status frame payload
pub const STATUS_SIGNAL_OFFSET: usize = 0;

/// Length of the status signal in bytes
pub const STATUS_SIGNAL_LEN: usize = 2;

/// The two frame events the slave observes from the protocol engine
///
/// Each slot has an edge-triggered pending flag owned by the engine. The
/// application clears a flag exactly once per occurrence, after it has
/// finished touching the associated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSlot {
    /// Command frame fully received from the master
    Command,
    /// Status frame consumed by the master (transmit complete)
    Status,
}
