//! LED bank drivers

pub mod gpio;

pub use gpio::{GpioLedBank, OutputPin};
