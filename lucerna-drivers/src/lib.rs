//! Driver implementations for the LIN slave LED node
//!
//! This crate provides concrete implementations of the traits defined
//! in lucerna-core:
//!
//! - LED bank over raw GPIO pins (inverse-logic, active low)
//! - An in-memory LIN frame interface for host testing

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod lin;

pub use led::GpioLedBank;
pub use lin::SimLinBus;
