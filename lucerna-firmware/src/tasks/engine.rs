//! LIN engine task
//!
//! A minimal software slave engine over the buffered UART to the LIN
//! transceiver. It hunts for the break/sync header of each schedule slot,
//! then either receives the command frame or answers the status frame.
//! The application never sees any of this; it observes only the pending
//! flags and signal bytes on the shared port.
//!
//! Frames addressed to other slaves are skipped by resynchronizing on the
//! next break, since their response length is unknown to this node.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use lucerna_protocol::{FRAME_ID_COMMAND, FRAME_ID_STATUS, STATUS_SIGNAL_LEN};

use crate::channels::{LIN_PORT, LIN_WAKE};
use crate::lin::{checksum, protected_id};

/// Sync byte following the break field
const SYNC: u8 = 0x55;

/// Protected identifier of the command frame
const PID_COMMAND: u8 = protected_id(FRAME_ID_COMMAND);

/// Protected identifier of the status frame
const PID_STATUS: u8 = protected_id(FRAME_ID_STATUS);

/// LIN engine task - serves the two schedule slots addressed to this node
#[embassy_executor::task]
pub async fn lin_engine_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("LIN engine task started");

    loop {
        if let Err(()) = serve_slot(&mut rx, &mut tx).await {
            // Framing or bus error; hunt for the next break
            warn!("LIN slot error, resynchronizing");
        }
    }
}

/// Handle one schedule slot: header hunt, then receive or respond
async fn serve_slot(rx: &mut BufferedUartRx, tx: &mut BufferedUartTx) -> Result<(), ()> {
    // The break field reads as a 0x00 data byte on this UART
    if read_byte(rx).await? != 0x00 {
        return Ok(());
    }
    if read_byte(rx).await? != SYNC {
        return Ok(());
    }

    let pid = read_byte(rx).await?;
    match pid {
        PID_COMMAND => receive_command(rx).await,
        PID_STATUS => respond_status(rx, tx).await,
        _ => {
            trace!("Ignoring frame with PID {:#04x}", pid);
            Ok(())
        }
    }
}

/// Receive the command frame's data byte and checksum, then publish it
async fn receive_command(rx: &mut BufferedUartRx) -> Result<(), ()> {
    let data = read_byte(rx).await?;
    let received_checksum = read_byte(rx).await?;

    if received_checksum != checksum(&[data]) {
        warn!("Command frame checksum mismatch");
        return Err(());
    }

    debug!("Command frame received: {:#04x}", data);
    LIN_PORT.publish_command(data);
    LIN_WAKE.signal(());
    Ok(())
}

/// Transmit the status frame response in this slot
async fn respond_status(rx: &mut BufferedUartRx, tx: &mut BufferedUartTx) -> Result<(), ()> {
    let payload = LIN_PORT.status_payload();

    let mut response = [0u8; STATUS_SIGNAL_LEN + 1];
    response[..STATUS_SIGNAL_LEN].copy_from_slice(&payload);
    response[STATUS_SIGNAL_LEN] = checksum(&payload);

    tx.write_all(&response).await.map_err(|_| ())?;
    tx.flush().await.map_err(|_| ())?;

    // Single-wire bus: our own response echoes back on rx
    let mut echo = [0u8; STATUS_SIGNAL_LEN + 1];
    rx.read_exact(&mut echo).await.map_err(|_| ())?;

    debug!("Status frame sent: {:#04x} {:#04x}", payload[0], payload[1]);
    LIN_PORT.mark_transmitted();
    LIN_WAKE.signal(());
    Ok(())
}

async fn read_byte(rx: &mut BufferedUartRx) -> Result<u8, ()> {
    let mut buf = [0u8; 1];
    rx.read_exact(&mut buf).await.map_err(|_| ())?;
    Ok(buf[0])
}
