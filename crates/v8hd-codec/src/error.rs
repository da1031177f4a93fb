/// Errors that can occur while encoding or decoding V-8HD parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// A semantic value lies outside its parameter's inclusive domain.
    #[error("{parameter} must be between {min} and {max}{unit}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// Audio input channel outside 1..=8.
    #[error("audio input channel must be between 1 and 8, got {channel}")]
    InvalidChannel { channel: u8 },

    /// A control identifier that names no V-8HD parameter.
    #[error("control 0x{0:02X} is not a V-8HD parameter")]
    UnknownControl(u8),

    /// A protocol value that decodes to nothing valid for its parameter.
    #[error("protocol value {value} is not valid for {parameter}")]
    InvalidValue { parameter: &'static str, value: u8 },

    /// Bytes that do not form a channel-0 Control-Change unit.
    #[error("invalid control-change message: {0}")]
    InvalidMessage(String),

    /// A textual name that matches no member of an enumeration.
    #[error("unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: String,
    },
}

pub type Result<T> = std::result::Result<T, CodecError>;
