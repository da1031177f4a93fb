use midir::{MidiOutput, MidiOutputConnection};
use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::traits::MidiTransport;

/// System MIDI output transport backed by `midir`.
///
/// Holds either the unconnected client (for enumeration) or the live
/// connection; `midir` consumes the client on connect and hands it back on
/// close, so the two are never present at once.
pub struct MidirTransport {
    client_name: String,
    output: Option<MidiOutput>,
    connection: Option<MidiOutputConnection>,
}

impl MidirTransport {
    /// Create a MIDI client registered under `client_name`.
    pub fn new(client_name: &str) -> Result<Self> {
        let output = MidiOutput::new(client_name).map_err(|err| TransportError::Init {
            backend: "midir",
            reason: err.to_string(),
        })?;
        debug!(client_name, "midir client initialized");
        Ok(Self {
            client_name: client_name.to_string(),
            output: Some(output),
            connection: None,
        })
    }

    /// Name the client was registered under.
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl MidiTransport for MidirTransport {
    fn port_names(&self) -> Result<Vec<String>> {
        let output = self.output.as_ref().ok_or(TransportError::AlreadyOpen)?;
        output
            .ports()
            .iter()
            .enumerate()
            .map(|(index, port)| {
                output
                    .port_name(port)
                    .map_err(|err| TransportError::PortInfo {
                        index,
                        reason: err.to_string(),
                    })
            })
            .collect()
    }

    fn open(&mut self, index: usize, label: &str) -> Result<()> {
        let output = self.output.take().ok_or(TransportError::AlreadyOpen)?;
        let ports = output.ports();
        let Some(port) = ports.get(index) else {
            let count = ports.len();
            self.output = Some(output);
            return Err(TransportError::NoSuchPort { index, count });
        };
        let name = output.port_name(port).unwrap_or_default();

        match output.connect(port, label) {
            Ok(connection) => {
                info!(index, port = %name, "connected to MIDI output");
                self.connection = Some(connection);
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                self.output = Some(err.into_inner());
                Err(TransportError::Connect {
                    index,
                    name,
                    reason,
                })
            }
        }
    }

    fn send(&mut self, message: &[u8]) -> Result<()> {
        let connection = self
            .connection
            .as_mut()
            .ok_or(TransportError::NotConnected)?;
        connection
            .send(message)
            .map_err(|err| TransportError::Send {
                source: Box::new(err),
            })
    }

    fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            self.output = Some(connection.close());
            debug!("MIDI output connection closed");
        }
    }

    fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn transport_name(&self) -> &'static str {
        "midir"
    }
}

impl Drop for MidirTransport {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for MidirTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MidirTransport")
            .field("client_name", &self.client_name)
            .field("connected", &self.connection.is_some())
            .finish()
    }
}
