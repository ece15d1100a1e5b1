//! Frame dispatcher
//!
//! The event loop of the slave: reacts to the two frame events the
//! protocol engine raises, feeds received commands through the decoder,
//! drives the LED bank, and keeps the outbound status payload current.

use lucerna_protocol::{FrameSlot, StatusReport};

use crate::decode::{decode, Transition};
use crate::output::OutputState;
use crate::traits::{LedDriver, LinBus};

/// The slave node's dispatcher state
///
/// Holds the current output selection and the last accepted command byte.
/// Both live for the process lifetime and reset to `Off` / none on
/// restart. All mutation happens inside [`service`], from a single logical
/// thread of control.
///
/// [`service`]: SlaveNode::service
#[derive(Debug, Default)]
pub struct SlaveNode {
    output: OutputState,
    last_command: Option<u8>,
}

impl SlaveNode {
    /// Create a node in the reset state (all LEDs off, no command yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Current output selection
    pub fn output(&self) -> OutputState {
        self.output
    }

    /// Raw byte of the most recently accepted command, if any
    pub fn last_command(&self) -> Option<u8> {
        self.last_command
    }

    /// Process at most one occurrence of each frame event
    ///
    /// Command frame pending: read the command byte, decode it, and on an
    /// accepted command apply the LED transition, record the byte, and
    /// write the fresh status report into the outbound signal. An
    /// unrecognized byte changes nothing, including the outbound payload,
    /// which keeps reporting the previously accepted command.
    ///
    /// Status frame pending: acknowledge only. The payload was populated
    /// when the command was accepted; transmit completion carries no data.
    ///
    /// Each pending flag is cleared exactly once, after all payload access
    /// for that event is done, so a re-arrival from the engine is neither
    /// missed nor double-processed.
    ///
    /// Returns the transition applied this call, if a command was
    /// accepted.
    pub fn service<B, L>(&mut self, bus: &mut B, leds: &mut L) -> Option<Transition>
    where
        B: LinBus,
        L: LedDriver,
    {
        let mut applied = None;

        if bus.frame_pending(FrameSlot::Command) {
            let byte = bus.read_command();

            if let Some(transition) = decode(byte) {
                leds.apply(transition.output);
                self.output = transition.output;
                self.last_command = Some(byte);
                bus.write_status(StatusReport::new(byte, transition.status));
                applied = Some(transition);
            }

            // Flag cleared last: the engine may refill the buffer the
            // moment we hand the slot back.
            bus.frame_acknowledge(FrameSlot::Command);
        }

        if bus.frame_pending(FrameSlot::Status) {
            bus.frame_acknowledge(FrameSlot::Status);
        }

        applied
    }
}
