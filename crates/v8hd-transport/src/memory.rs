use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::MidiTransport;

#[derive(Debug, Default)]
struct Shared {
    sent: Mutex<Vec<Vec<u8>>>,
    opened: Mutex<Option<(usize, String)>>,
    reject_sends: AtomicBool,
}

impl Shared {
    fn sent(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn opened(&self) -> MutexGuard<'_, Option<(usize, String)>> {
        self.opened.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory transport that records every message it is asked to send.
///
/// Stands in for real hardware in tests and dry runs. The port list is
/// fixed at construction; a [`MemoryHandle`] observes the transport after
/// it has been moved into a session.
#[derive(Debug)]
pub struct MemoryTransport {
    ports: Vec<String>,
    open: Option<usize>,
    shared: Arc<Shared>,
}

impl MemoryTransport {
    /// Create a transport that advertises `ports` in the given order.
    pub fn new<I, S>(ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ports: ports.into_iter().map(Into::into).collect(),
            open: None,
            shared: Arc::default(),
        }
    }

    /// A handle that observes this transport.
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl MidiTransport for MemoryTransport {
    fn port_names(&self) -> Result<Vec<String>> {
        Ok(self.ports.clone())
    }

    fn open(&mut self, index: usize, label: &str) -> Result<()> {
        if self.open.is_some() {
            return Err(TransportError::AlreadyOpen);
        }
        if index >= self.ports.len() {
            return Err(TransportError::NoSuchPort {
                index,
                count: self.ports.len(),
            });
        }
        debug!(index, port = %self.ports[index], label, "memory port opened");
        self.open = Some(index);
        *self.shared.opened() = Some((index, self.ports[index].clone()));
        Ok(())
    }

    fn send(&mut self, message: &[u8]) -> Result<()> {
        if self.open.is_none() {
            return Err(TransportError::NotConnected);
        }
        if self.shared.reject_sends.load(Ordering::SeqCst) {
            return Err(TransportError::Send {
                source: Box::new(std::io::Error::other("memory transport rejecting sends")),
            });
        }
        self.shared.sent().push(message.to_vec());
        Ok(())
    }

    fn close(&mut self) {
        if self.open.take().is_some() {
            debug!("memory port closed");
        }
        *self.shared.opened() = None;
    }

    fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn transport_name(&self) -> &'static str {
        "memory"
    }
}

/// Observer for a [`MemoryTransport`].
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    shared: Arc<Shared>,
}

impl MemoryHandle {
    /// Every message sent so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.shared.sent().clone()
    }

    /// Drain and return the recorded messages.
    pub fn take_sent(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *self.shared.sent())
    }

    /// The bound port, if any.
    pub fn opened(&self) -> Option<(usize, String)> {
        self.shared.opened().clone()
    }

    /// Make subsequent sends fail with [`TransportError::Send`].
    pub fn reject_sends(&self, reject: bool) {
        self.shared.reject_sends.store(reject, Ordering::SeqCst);
    }
}
