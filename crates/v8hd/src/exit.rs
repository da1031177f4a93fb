use std::fmt;

use v8hd_codec::CodecError;
use v8hd_session::SessionError;
use v8hd_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const HEALTH_CHECK_FAILED: i32 = 30;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
/// sysexits `EX_UNAVAILABLE`: no matching MIDI output.
pub const DEVICE_NOT_FOUND: i32 = 69;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::AlreadyOpen | TransportError::NotConnected => {
            CliError::new(INTERNAL, format!("{context}: {err}"))
        }
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn session_error(context: &str, err: SessionError) -> CliError {
    match err {
        SessionError::Transport(err) => transport_error(context, err),
        SessionError::Validation(err) => codec_error(context, err),
        SessionError::DeviceNotFound { .. } => {
            CliError::new(DEVICE_NOT_FOUND, format!("{context}: {err}"))
        }
        SessionError::NotOpen => CliError::new(FAILURE, format!("{context}: {err}")),
        SessionError::AlreadyAttempted => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_data_invalid() {
        let err = session_error(
            "send failed",
            SessionError::Validation(CodecError::InvalidChannel { channel: 9 }),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.to_string(),
            "send failed: audio input channel must be between 1 and 8, got 9"
        );
    }

    #[test]
    fn device_not_found_maps_to_unavailable() {
        let err = session_error(
            "connect failed",
            SessionError::DeviceNotFound {
                patterns: vec!["Roland".to_string()],
                available: vec!["Midi Through".to_string()],
            },
        );
        assert_eq!(err.code, DEVICE_NOT_FOUND);
        assert!(err.message.contains("Midi Through"));
    }

    #[test]
    fn transport_failures_map_to_transport_error() {
        let err = session_error(
            "send failed",
            SessionError::Transport(TransportError::Send {
                source: Box::new(std::io::Error::other("device unplugged")),
            }),
        );
        assert_eq!(err.code, TRANSPORT_ERROR);
        assert_eq!(
            transport_error("x", TransportError::NotConnected).code,
            INTERNAL
        );
    }
}
