//! Inter-task communication
//!
//! The engine task and the slave task share the frame port defined in
//! `lin.rs` plus a wake signal. Uses embassy-sync primitives for safe
//! async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::lin::LinPort;

/// Shared frame buffers and pending flags
pub static LIN_PORT: LinPort = LinPort::new();

/// Raised by the engine task whenever it sets a pending flag
///
/// The slave task sleeps on this instead of spinning on the flags; the
/// flags themselves stay the single source of truth for what is pending.
pub static LIN_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
