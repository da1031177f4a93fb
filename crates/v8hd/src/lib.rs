//! Drive a Roland V-8HD video switcher over MIDI Control Change.
//!
//! Every switcher setting (fader, transition, PinP and DSK layers,
//! SPLIT/VFX, audio levels and mutes, buttons) is one three-byte
//! Control-Change message on MIDI channel 1.
//!
//! # Crate Structure
//!
//! - [`transport`]: MIDI output abstraction (`midir` behind the `midir` feature, in-memory recorder)
//! - [`codec`]: Parameter codec between semantic values and Control-Change units
//! - [`session`]: Device discovery and semantic setters (behind `session` feature)

/// Re-export transport types.
pub mod transport {
    pub use v8hd_transport::*;
}

/// Re-export codec types.
pub mod codec {
    pub use v8hd_codec::*;
}

/// Re-export session types (requires `session` feature).
#[cfg(feature = "session")]
pub mod session {
    pub use v8hd_session::*;
}
