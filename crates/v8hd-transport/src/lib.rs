//! MIDI output transport abstraction.
//!
//! Provides a unified interface over the endpoints a host exposes for
//! sending MIDI:
//! - System MIDI output ports via `midir` (feature `midir`)
//! - An in-memory recorder for tests and dry runs
//!
//! This is the lowest layer of v8hd. Everything else builds on top of the
//! [`MidiTransport`] trait provided here.

pub mod error;
pub mod memory;
pub mod traits;

#[cfg(feature = "midir")]
pub mod midi_port;

pub use error::{Result, TransportError};
pub use memory::{MemoryHandle, MemoryTransport};
pub use traits::{MidiTransport, PortInfo};

#[cfg(feature = "midir")]
pub use midi_port::MidirTransport;
