//! LIN frame interface implementations

pub mod sim;

pub use sim::SimLinBus;
