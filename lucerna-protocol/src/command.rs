//! LED commands received from the LIN master

// Wire format values
const CMD_ALL_OFF: u8 = 0x00;
const CMD_SET_LED1: u8 = 0x11;
const CMD_SET_LED2: u8 = 0x22;
const CMD_SET_LED3: u8 = 0x33;

/// Command values accepted in byte 0 of the command frame
///
/// Any byte outside this set is ignored by the slave: the LEDs and the
/// status payload keep their previous values. That is a defined policy of
/// the protocol, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Turn all LEDs off
    AllOff,
    /// Turn LED1 (red) on, others off
    SetLed1,
    /// Turn LED2 (green) on, others off
    SetLed2,
    /// Turn LED3 (blue) on, others off
    SetLed3,
}

impl Command {
    /// Parse a command from its wire format byte
    ///
    /// Exact match only; returns `None` for every other value.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_ALL_OFF => Some(Command::AllOff),
            CMD_SET_LED1 => Some(Command::SetLed1),
            CMD_SET_LED2 => Some(Command::SetLed2),
            CMD_SET_LED3 => Some(Command::SetLed3),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::AllOff => CMD_ALL_OFF,
            Command::SetLed1 => CMD_SET_LED1,
            Command::SetLed2 => CMD_SET_LED2,
            Command::SetLed3 => CMD_SET_LED3,
        }
    }
}
