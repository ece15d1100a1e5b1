//! LIN Slave LED Node Protocol
//!
//! This crate defines the application-layer payloads exchanged between the
//! LIN master and the Lucerna slave node. The slave participates in two
//! unconditional frames on the master's schedule:
//!
//! ```text
//! ┌────────────────┬─────────┬───────────────────────────────────────┐
//! │ Frame          │ Bus ID  │ Payload                               │
//! ├────────────────┼─────────┼───────────────────────────────────────┤
//! │ Command (rx)   │ 0x10    │ byte 0: LED command                   │
//! │ Status (tx)    │ 0x11    │ byte 0: echoed command                │
//! │                │         │ byte 1: LED status code               │
//! └────────────────┴─────────┴───────────────────────────────────────┘
//! ```
//!
//! Frame transport (break/sync detection, checksums, schedule handling) is
//! the protocol engine's business; this crate only names the bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod signals;
pub mod status;

pub use command::Command;
pub use signals::{
    FrameSlot, COMMAND_SIGNAL_LEN, COMMAND_SIGNAL_OFFSET, FRAME_ID_COMMAND, FRAME_ID_STATUS,
    STATUS_SIGNAL_LEN, STATUS_SIGNAL_OFFSET,
};
pub use status::{StatusCode, StatusReport};
