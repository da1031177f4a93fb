use std::fmt;

use serde::Serialize;

use crate::control::ControlId;
use crate::error::{CodecError, Result};

/// MIDI channel the V-8HD listens on (zero-based).
pub const MIDI_CHANNEL: u8 = 0;

/// Status byte: Control Change on [`MIDI_CHANNEL`].
pub const CONTROL_CHANGE: u8 = 0xB0 | MIDI_CHANNEL;

/// Largest 7-bit data byte.
pub const MAX_DATA: u8 = 0x7F;

/// Wire size of one unit: status + control + value.
pub const MESSAGE_LEN: usize = 3;

/// One Control-Change unit addressed to the V-8HD.
///
/// Construction validates the value, so every instance is transmittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ControlChange {
    control: ControlId,
    value: u8,
}

impl ControlChange {
    /// Create a unit. Fails if `value` does not fit seven bits.
    pub fn new(control: ControlId, value: u8) -> Result<Self> {
        if value > MAX_DATA {
            return Err(CodecError::InvalidValue {
                parameter: control.label(),
                value,
            });
        }
        Ok(Self { control, value })
    }

    pub fn control(&self) -> ControlId {
        self.control
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Encode into the wire format.
    ///
    /// ```text
    /// ┌──────────────┬──────────────┬──────────────┐
    /// │ Status       │ Control      │ Value        │
    /// │ 0xB0         │ (7-bit)      │ (7-bit)      │
    /// └──────────────┴──────────────┴──────────────┘
    /// ```
    pub fn to_bytes(&self) -> [u8; MESSAGE_LEN] {
        [CONTROL_CHANGE, self.control.raw(), self.value]
    }

    /// Decode one unit from exactly [`MESSAGE_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let [status, control, value] = <[u8; MESSAGE_LEN]>::try_from(bytes).map_err(|_| {
            CodecError::InvalidMessage(format!(
                "expected {MESSAGE_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        if status & 0xF0 != 0xB0 {
            return Err(CodecError::InvalidMessage(format!(
                "status 0x{status:02X} is not a control change"
            )));
        }
        if status & 0x0F != MIDI_CHANNEL {
            return Err(CodecError::InvalidMessage(format!(
                "channel {} is not channel {}",
                status & 0x0F,
                MIDI_CHANNEL
            )));
        }
        if control > MAX_DATA || value > MAX_DATA {
            return Err(CodecError::InvalidMessage(
                "data bytes must be 7-bit".to_string(),
            ));
        }

        Self::new(ControlId::from_raw(control)?, value)
    }
}

impl fmt::Display for ControlChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [status, control, value] = self.to_bytes();
        write!(f, "{status:02X} {control:02X} {value:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_layout() {
        let cc = ControlChange::new(ControlId::MixWipeTime, 15).unwrap();
        assert_eq!(cc.to_bytes(), [0xB0, 0x0C, 15]);
        assert_eq!(cc.to_string(), "B0 0C 0F");
    }

    #[test]
    fn test_value_must_be_seven_bit() {
        assert!(ControlChange::new(ControlId::VideoFader, 0x7F).is_ok());
        assert!(matches!(
            ControlChange::new(ControlId::VideoFader, 0x80),
            Err(CodecError::InvalidValue { value: 0x80, .. })
        ));
    }

    #[test]
    fn test_from_bytes() {
        let cc = ControlChange::from_bytes(&[0xB0, 0x11, 35]).unwrap();
        assert_eq!(cc.control(), ControlId::PinP1PositionH);
        assert_eq!(cc.value(), 35);
        assert_eq!(ControlChange::from_bytes(&cc.to_bytes()), Ok(cc));
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        assert!(matches!(
            ControlChange::from_bytes(&[0xB0, 0x0A]),
            Err(CodecError::InvalidMessage(_))
        ));
        assert!(matches!(
            ControlChange::from_bytes(&[0xB0, 0x0A, 0, 0]),
            Err(CodecError::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_other_status() {
        // Note On
        assert!(ControlChange::from_bytes(&[0x90, 0x0A, 0x10]).is_err());
        // Control Change on channel 2
        let err = ControlChange::from_bytes(&[0xB1, 0x0A, 0x10]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid control-change message: channel 1 is not channel 0"
        );
    }

    #[test]
    fn test_from_bytes_rejects_eight_bit_data() {
        assert!(ControlChange::from_bytes(&[0xB0, 0x8A, 0x10]).is_err());
        assert!(ControlChange::from_bytes(&[0xB0, 0x0A, 0x80]).is_err());
    }

    #[test]
    fn test_from_bytes_unknown_control() {
        assert_eq!(
            ControlChange::from_bytes(&[0xB0, 0x30, 0x00]),
            Err(CodecError::UnknownControl(0x30))
        );
    }
}
