//! Lucerna - LIN slave LED node firmware
//!
//! Main firmware binary for RP2040-based boards behind a LIN transceiver.
//! The node answers two unconditional frames on the master's schedule:
//! frame 0x10 carries a command byte selecting one of three LEDs (or all
//! off), frame 0x11 reports the last accepted command and the resulting
//! LED status back to the master.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lucerna_drivers::GpioLedBank;

use crate::tasks::LedPin;

mod channels;
mod lin;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// LIN bus baud rate
const LIN_BAUD: u32 = 19_200;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lucerna firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // LED pins idle high: inverse logic, a low pin lights its LED.
    // Nothing may reach the bus before this bring-up completes; any
    // failure past this point halts via panic before the engine starts.
    let leds = GpioLedBank::new(
        LedPin(Output::new(p.PIN_2, Level::High)),
        LedPin(Output::new(p.PIN_3, Level::High)),
        LedPin(Output::new(p.PIN_4, Level::High)),
    );
    info!("LED bank initialized");

    // UART0 to the LIN transceiver
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = LIN_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("LIN UART initialized at {} baud", LIN_BAUD);

    // Spawn tasks
    spawner.spawn(tasks::lin_engine_task(rx, tx)).unwrap();
    spawner.spawn(tasks::slave_task(leds)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
