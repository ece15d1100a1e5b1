//! Application-side port of the LIN engine
//!
//! The engine task and the slave task share two signal buffers and two
//! edge-triggered pending flags through [`LinPort`]. The engine side fills
//! the command buffer and raises flags; the slave side observes them
//! through the [`LinBus`] trait and clears each flag after it is done with
//! the payload, so a refill by the engine can never race a read in
//! progress.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use lucerna_core::traits::LinBus;
use lucerna_protocol::{FrameSlot, StatusReport, COMMAND_SIGNAL_LEN, STATUS_SIGNAL_LEN};

/// Frame buffers and pending flags shared between engine and slave tasks
struct PortState {
    command_pending: bool,
    status_pending: bool,
    command_buf: [u8; COMMAND_SIGNAL_LEN],
    status_buf: [u8; STATUS_SIGNAL_LEN],
}

/// Shared frame port between the engine task and the slave task
pub struct LinPort {
    state: Mutex<CriticalSectionRawMutex, RefCell<PortState>>,
}

impl LinPort {
    /// Create an empty port with no pending events
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(PortState {
                command_pending: false,
                status_pending: false,
                command_buf: [0; COMMAND_SIGNAL_LEN],
                status_buf: [0; STATUS_SIGNAL_LEN],
            })),
        }
    }

    /// Slave-side handle implementing [`LinBus`]
    pub fn app_side(&'static self) -> AppSide {
        AppSide { port: self }
    }

    /// Engine side: publish a received command byte and flag the event
    pub fn publish_command(&self, byte: u8) {
        self.state.lock(|s| {
            let mut s = s.borrow_mut();
            s.command_buf[0] = byte;
            s.command_pending = true;
        });
    }

    /// Engine side: the payload to transmit in the status frame
    pub fn status_payload(&self) -> [u8; STATUS_SIGNAL_LEN] {
        self.state.lock(|s| s.borrow().status_buf)
    }

    /// Engine side: flag that the status frame was transmitted
    pub fn mark_transmitted(&self) {
        self.state.lock(|s| s.borrow_mut().status_pending = true);
    }
}

/// Slave-side handle to a [`LinPort`]
pub struct AppSide {
    port: &'static LinPort,
}

impl LinBus for AppSide {
    fn frame_pending(&self, slot: FrameSlot) -> bool {
        self.port.state.lock(|s| {
            let s = s.borrow();
            match slot {
                FrameSlot::Command => s.command_pending,
                FrameSlot::Status => s.status_pending,
            }
        })
    }

    fn frame_acknowledge(&mut self, slot: FrameSlot) {
        self.port.state.lock(|s| {
            let mut s = s.borrow_mut();
            match slot {
                FrameSlot::Command => s.command_pending = false,
                FrameSlot::Status => s.status_pending = false,
            }
        })
    }

    fn read_command(&mut self) -> u8 {
        self.port.state.lock(|s| s.borrow().command_buf[0])
    }

    fn write_status(&mut self, report: StatusReport) {
        self.port
            .state
            .lock(|s| s.borrow_mut().status_buf = report.to_bytes());
    }
}

/// Compute the protected identifier (frame ID plus parity bits) for a
/// 6-bit frame ID
pub const fn protected_id(id: u8) -> u8 {
    let p0 = (id ^ (id >> 1) ^ (id >> 2) ^ (id >> 4)) & 1;
    let p1 = (((id >> 1) ^ (id >> 3) ^ (id >> 4) ^ (id >> 5)) & 1) ^ 1;
    (id & 0x3F) | (p0 << 6) | (p1 << 7)
}

/// LIN classic checksum: inverted modulo-255 sum of the data bytes
pub fn checksum(data: &[u8]) -> u8 {
    let mut sum: u16 = 0;
    for &byte in data {
        sum += byte as u16;
        if sum > 0xFF {
            sum -= 0xFF;
        }
    }
    !(sum as u8)
}
