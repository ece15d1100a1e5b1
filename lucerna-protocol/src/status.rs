//! Status payload reported back to the LIN master

// Wire format values
const STATUS_LED1_ON: u8 = 0xAA;
const STATUS_LED2_ON: u8 = 0xBB;
const STATUS_LED3_ON: u8 = 0xCC;
const STATUS_ALL_OFF: u8 = 0xDD;

/// LED status codes carried in byte 1 of the status frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCode {
    /// LED1 (red) is the active output
    Led1On,
    /// LED2 (green) is the active output
    Led2On,
    /// LED3 (blue) is the active output
    Led3On,
    /// No LED is active
    AllOff,
}

impl StatusCode {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            StatusCode::Led1On => STATUS_LED1_ON,
            StatusCode::Led2On => STATUS_LED2_ON,
            StatusCode::Led3On => STATUS_LED3_ON,
            StatusCode::AllOff => STATUS_ALL_OFF,
        }
    }

    /// Parse a status code from its wire format byte
    ///
    /// Used by master-side tooling when reading the status frame back.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            STATUS_LED1_ON => Some(StatusCode::Led1On),
            STATUS_LED2_ON => Some(StatusCode::Led2On),
            STATUS_LED3_ON => Some(StatusCode::Led3On),
            STATUS_ALL_OFF => Some(StatusCode::AllOff),
            _ => None,
        }
    }
}

/// The 2-byte payload of the status frame
///
/// Byte 0 echoes the most recently accepted command byte; byte 1 carries
/// the status code for the LED state that command produced. The two bytes
/// always describe the same accepted command: the report is assembled in
/// one step when a command is applied, never from two independent sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Raw byte of the last accepted command
    pub command: u8,
    /// Status code for the resulting LED state
    pub status: StatusCode,
}

impl StatusReport {
    /// Number of bytes in the encoded payload
    pub const LEN: usize = 2;

    /// Create a report for an accepted command
    pub fn new(command: u8, status: StatusCode) -> Self {
        Self { command, status }
    }

    /// Encode into the status frame payload layout
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        [self.command, self.status.to_byte()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Led1On.to_byte(), 0xAA);
        assert_eq!(StatusCode::Led2On.to_byte(), 0xBB);
        assert_eq!(StatusCode::Led3On.to_byte(), 0xCC);
        assert_eq!(StatusCode::AllOff.to_byte(), 0xDD);
    }

    #[test]
    fn test_status_code_roundtrip() {
        let codes = [
            StatusCode::Led1On,
            StatusCode::Led2On,
            StatusCode::Led3On,
            StatusCode::AllOff,
        ];

        for code in codes {
            assert_eq!(StatusCode::from_byte(code.to_byte()), Some(code));
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(StatusCode::from_byte(0x00), None);
        assert_eq!(StatusCode::from_byte(0xAB), None);
        assert_eq!(StatusCode::from_byte(0xFF), None);
    }

    #[test]
    fn test_report_layout() {
        let report = StatusReport::new(0x11, StatusCode::Led1On);
        assert_eq!(report.to_bytes(), [0x11, 0xAA]);
    }
}
