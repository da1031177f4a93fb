//! Session management for a Roland V-8HD control connection.
//!
//! This is the "just works" layer. Discover the switcher among the host's
//! MIDI outputs, bind to it once, and drive it with semantic setters that
//! encode through `v8hd-codec`.

pub mod config;
pub mod connector;
pub mod control;
pub mod error;
pub mod session;

#[cfg(feature = "midir")]
pub use connector::connect_device;
pub use connector::{connect, connect_with_config};
pub use config::{SessionConfig, DEFAULT_CLIENT_NAME, DEFAULT_MATCH_PATTERNS, DEFAULT_PORT_LABEL};
pub use error::{Result, SessionError};
pub use session::{Session, SessionState};
