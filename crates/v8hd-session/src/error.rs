/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No output endpoint matched during discovery.
    #[error(
        "no MIDI output matching {} found (available: {})",
        .patterns.join(" or "),
        describe_ports(.available)
    )]
    DeviceNotFound {
        patterns: Vec<String>,
        available: Vec<String>,
    },

    /// The session was never opened or has been closed.
    #[error("session is not open")]
    NotOpen,

    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] v8hd_transport::TransportError),

    /// A semantic value failed validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] v8hd_codec::CodecError),

    /// Discovery runs at most once per session.
    #[error("device discovery was already attempted on this session")]
    AlreadyAttempted,
}

fn describe_ports(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_not_found_lists_every_port() {
        let err = SessionError::DeviceNotFound {
            patterns: vec!["Roland".to_string(), "V-8HD".to_string()],
            available: vec!["Midi Through".to_string(), "USB Keys".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no MIDI output matching Roland or V-8HD found (available: Midi Through, USB Keys)"
        );
    }

    #[test]
    fn device_not_found_without_ports() {
        let err = SessionError::DeviceNotFound {
            patterns: vec!["Roland".to_string()],
            available: Vec::new(),
        };
        assert!(err.to_string().ends_with("(available: none)"));
    }
}
