//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod bus;
pub mod led;

pub use bus::LinBus;
pub use led::LedDriver;
