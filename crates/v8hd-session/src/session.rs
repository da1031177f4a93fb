use std::fmt;

use tracing::{debug, info, warn};
use v8hd_codec::{Command, ControlChange, ControlId};
use v8hd_transport::{MidiTransport, PortInfo};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};

/// Lifecycle of a [`Session`]. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unopened,
    Open,
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::Unopened => "unopened",
            SessionState::Open => "open",
            SessionState::Closed => "closed",
        })
    }
}

/// Exclusive binding to one V-8HD output endpoint.
///
/// Discovery happens once; there is no reconnection. A transport failure
/// fails the call that hit it and leaves the session open. Dropping an
/// open session closes it.
#[derive(Debug)]
pub struct Session<T: MidiTransport> {
    transport: T,
    config: SessionConfig,
    state: SessionState,
    port: Option<PortInfo>,
    attempted: bool,
}

impl<T: MidiTransport> Session<T> {
    /// Create an unopened session with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create an unopened session.
    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            state: SessionState::Unopened,
            port: None,
            attempted: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// The bound endpoint, while open.
    pub fn port(&self) -> Option<&PortInfo> {
        match self.state {
            SessionState::Open => self.port.as_ref(),
            _ => None,
        }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bind to the first endpoint whose name matches the configured
    /// patterns, in enumeration order.
    ///
    /// Only one attempt is allowed per session, successful or not.
    pub fn discover_and_open(&mut self) -> Result<&PortInfo> {
        if self.attempted {
            return Err(SessionError::AlreadyAttempted);
        }
        self.attempted = true;

        let ports = self.transport.list_ports()?;
        debug!(
            transport = self.transport.transport_name(),
            count = ports.len(),
            "enumerated MIDI outputs"
        );

        let Some(port) = ports.iter().find(|port| self.config.matches(&port.name)) else {
            let available: Vec<String> = ports.into_iter().map(|port| port.name).collect();
            warn!(
                patterns = ?self.config.match_patterns,
                available = ?available,
                "no matching MIDI output"
            );
            return Err(SessionError::DeviceNotFound {
                patterns: self.config.match_patterns.clone(),
                available,
            });
        };

        let port = port.clone();
        self.transport.open(port.index, &self.config.port_label)?;
        info!(index = port.index, port = %port.name, "V-8HD session opened");

        self.state = SessionState::Open;
        Ok(&*self.port.insert(port))
    }

    /// Send one Control-Change unit as-is.
    pub fn transmit(&mut self, control: ControlId, value: u8) -> Result<()> {
        if self.state != SessionState::Open {
            return Err(SessionError::NotOpen);
        }
        let cc = ControlChange::new(control, value)?;
        self.write(cc)
    }

    /// Encode `command` and transmit it. Returns the unit sent.
    ///
    /// Validation happens first, so a rejected value never reaches the
    /// transport.
    pub fn send(&mut self, command: Command) -> Result<ControlChange> {
        let cc = command.encode()?;
        if self.state != SessionState::Open {
            return Err(SessionError::NotOpen);
        }
        self.write(cc)?;
        Ok(cc)
    }

    fn write(&mut self, cc: ControlChange) -> Result<()> {
        debug!(control = ?cc.control(), value = cc.value(), bytes = %cc, "transmit");
        self.transport.send(&cc.to_bytes())?;
        Ok(())
    }

    /// Release the endpoint. Idempotent; the session cannot be reopened.
    pub fn close(&mut self) {
        if self.state == SessionState::Open {
            self.transport.close();
            if let Some(port) = &self.port {
                info!(index = port.index, port = %port.name, "V-8HD session closed");
            }
        }
        self.state = SessionState::Closed;
        self.attempted = true;
    }
}

impl<T: MidiTransport> Drop for Session<T> {
    fn drop(&mut self) {
        if self.state == SessionState::Open {
            self.close();
        }
    }
}
