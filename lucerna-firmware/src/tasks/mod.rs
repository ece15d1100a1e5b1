//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared frame
//! port and wake signal.

pub mod engine;
pub mod slave;

pub use engine::lin_engine_task;
pub use slave::{slave_task, LedPin};
