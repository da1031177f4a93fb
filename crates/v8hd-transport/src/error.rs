/// Errors that can occur in MIDI transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The MIDI backend could not be initialized.
    #[error("failed to initialize {backend} MIDI client: {reason}")]
    Init {
        backend: &'static str,
        reason: String,
    },

    /// The name of an enumerated port could not be read.
    #[error("failed to read name of MIDI output port {index}: {reason}")]
    PortInfo { index: usize, reason: String },

    /// The requested port index is not in the current enumeration.
    #[error("MIDI output port {index} does not exist ({count} available)")]
    NoSuchPort { index: usize, count: usize },

    /// Failed to connect to the selected port.
    #[error("failed to connect to MIDI output port {index} ({name}): {reason}")]
    Connect {
        index: usize,
        name: String,
        reason: String,
    },

    /// A port is already bound on this transport.
    #[error("a MIDI output port is already open on this transport")]
    AlreadyOpen,

    /// No port is bound on this transport.
    #[error("no MIDI output port is open")]
    NotConnected,

    /// The backend rejected an outgoing message.
    #[error("failed to send MIDI message: {source}")]
    Send {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, TransportError>;
