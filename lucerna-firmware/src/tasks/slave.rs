//! Slave dispatcher task
//!
//! Runs the board-agnostic frame dispatcher against the shared frame port
//! and the GPIO LED bank. Sleeps on the wake signal between events; the
//! pending flags on the port remain the source of truth for what needs
//! servicing.

use defmt::*;
use embassy_rp::gpio::Output;

use lucerna_core::SlaveNode;
use lucerna_drivers::led::OutputPin;
use lucerna_drivers::GpioLedBank;

use crate::channels::{LIN_PORT, LIN_WAKE};

/// Adapter from an RP2040 GPIO output to the LED bank's pin trait
pub struct LedPin(pub Output<'static>);

impl OutputPin for LedPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Slave task - dispatches frame events for the process lifetime
#[embassy_executor::task]
pub async fn slave_task(mut leds: GpioLedBank<LedPin>) {
    info!("Slave task started");

    let mut node = SlaveNode::new();
    let mut bus = LIN_PORT.app_side();

    loop {
        LIN_WAKE.wait().await;

        if let Some(transition) = node.service(&mut bus, &mut leds) {
            info!(
                "Command applied: {:?}, reporting {:?}",
                transition.output, transition.status
            );
        }
    }
}
