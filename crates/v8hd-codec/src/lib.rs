//! Parameter codec for the Roland V-8HD MIDI control surface.
//!
//! Everything the switcher understands over MIDI is decided here. Every
//! semantic setting maps to exactly one three-byte Control-Change unit:
//! - A status byte, `0xB0` (Control Change on MIDI channel 0)
//! - A 7-bit control identifier naming the parameter
//! - A 7-bit protocol value, quantized from engineering units
//!
//! Encoding is pure and atomic: a value outside its parameter's domain fails
//! before anything is produced.

pub mod audio;
pub mod command;
pub mod control;
pub mod error;
pub mod message;
pub mod params;
pub mod quantize;
pub mod types;

pub use audio::{
    encode_channel_offset, encode_toggle_with_identity, AudioChannel, MuteTarget,
    AUDIO_IN_MUTE_IDENTITY, OUTPUT_MUTE_IDENTITY,
};
pub use command::{Command, TRIGGER_VALUE};
pub use control::ControlId;
pub use error::{CodecError, Result};
pub use message::{ControlChange, CONTROL_CHANGE, MAX_DATA, MESSAGE_LEN, MIDI_CHANNEL};
pub use quantize::{
    decode_bounded, decode_direct, encode_bounded, encode_direct, encode_enum, ParamSpec,
    Quantizer,
};
pub use types::{ButtonState, InputSource, PinPLayer, SplitVfxBank, SplitVfxType, TransitionType};
