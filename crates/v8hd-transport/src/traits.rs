use std::fmt;

use crate::error::Result;

/// One MIDI output endpoint as reported by the transport's enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    /// Position in the enumeration at the time it was listed.
    pub index: usize,
    /// Name exactly as the backend reports it.
    pub name: String,
}

impl fmt::Display for PortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.name)
    }
}

/// A message-oriented MIDI output transport.
///
/// Implementations expose the endpoints available on the host, bind to at
/// most one of them at a time, and forward complete messages unmodified.
/// Calls are blocking and are expected from a single owner.
pub trait MidiTransport {
    /// Names of every available output endpoint, in enumeration order.
    fn port_names(&self) -> Result<Vec<String>>;

    /// Bind to the endpoint at `index`. `label` names the connection on
    /// backends that support it.
    fn open(&mut self, index: usize, label: &str) -> Result<()>;

    /// Send one complete message on the bound endpoint.
    fn send(&mut self, message: &[u8]) -> Result<()>;

    /// Release the bound endpoint. Does nothing when nothing is bound.
    fn close(&mut self);

    /// Whether an endpoint is currently bound.
    fn is_open(&self) -> bool;

    /// Transport name for diagnostics.
    fn transport_name(&self) -> &'static str;

    /// Enumerate endpoints with their indices.
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        Ok(self
            .port_names()?
            .into_iter()
            .enumerate()
            .map(|(index, name)| PortInfo { index, name })
            .collect())
    }
}

impl<T: MidiTransport + ?Sized> MidiTransport for Box<T> {
    fn port_names(&self) -> Result<Vec<String>> {
        (**self).port_names()
    }

    fn open(&mut self, index: usize, label: &str) -> Result<()> {
        (**self).open(index, label)
    }

    fn send(&mut self, message: &[u8]) -> Result<()> {
        (**self).send(message)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn transport_name(&self) -> &'static str {
        (**self).transport_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;

    #[test]
    fn list_ports_pairs_names_with_indices() {
        let transport = MemoryTransport::new(["Midi Through", "Roland V-8HD"]);
        let ports = transport.list_ports().unwrap();
        assert_eq!(
            ports,
            vec![
                PortInfo {
                    index: 0,
                    name: "Midi Through".to_string()
                },
                PortInfo {
                    index: 1,
                    name: "Roland V-8HD".to_string()
                },
            ]
        );
        assert_eq!(ports[1].to_string(), "1: Roland V-8HD");
    }

    #[test]
    fn boxed_transport_forwards_calls() {
        let memory = MemoryTransport::new(["A"]);
        let handle = memory.handle();
        let mut boxed: Box<dyn MidiTransport> = Box::new(memory);

        boxed.open(0, "test").unwrap();
        assert!(boxed.is_open());
        boxed.send(&[0xB0, 0x0A, 1]).unwrap();
        boxed.close();
        assert!(!boxed.is_open());
        assert_eq!(handle.sent(), vec![vec![0xB0, 0x0A, 1]]);
        assert_eq!(boxed.transport_name(), "memory");
    }
}
