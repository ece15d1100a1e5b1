//! Board-agnostic application logic for the LIN slave LED node
//!
//! This crate contains everything between the protocol engine and the LED
//! pins that does not depend on specific hardware:
//!
//! - The output state model (one active LED, or none)
//! - The command decoder (command byte -> LED transition + status code)
//! - Hardware abstraction traits (LED bank, LIN frame interface)
//! - The frame dispatcher that ties them together
//!
//! The LIN protocol engine itself (framing, checksums, schedule handling)
//! is consumed through the [`traits::LinBus`] interface and never
//! implemented here.

#![no_std]
#![deny(unsafe_code)]

pub mod decode;
pub mod dispatch;
pub mod output;
pub mod traits;

pub use decode::{decode, Transition};
pub use dispatch::SlaveNode;
pub use output::OutputState;
