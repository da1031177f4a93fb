//! Per-input addressing and mute encodings for the audio mixer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::control::ControlId;
use crate::error::{CodecError, Result};
use crate::types::ButtonState;

/// Mute value of the AUDIO IN path.
pub const AUDIO_IN_MUTE_IDENTITY: u8 = 9;

/// Mute value of the main output.
pub const OUTPUT_MUTE_IDENTITY: u8 = 16;

const INPUT_MUTES: [ControlId; 8] = [
    ControlId::AudioMuteInput1,
    ControlId::AudioMuteInput2,
    ControlId::AudioMuteInput3,
    ControlId::AudioMuteInput4,
    ControlId::AudioMuteInput5,
    ControlId::AudioMuteInput6,
    ControlId::AudioMuteInput7,
    ControlId::AudioMuteInput8,
];

/// Audio input channel, 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AudioChannel(u8);

impl AudioChannel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(channel: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&channel) {
            Ok(Self(channel))
        } else {
            Err(CodecError::InvalidChannel { channel })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Channels 1..=8 in order.
    pub fn all() -> impl Iterator<Item = AudioChannel> {
        (Self::MIN..=Self::MAX).map(AudioChannel)
    }
}

impl TryFrom<u8> for AudioChannel {
    type Error = CodecError;

    fn try_from(channel: u8) -> Result<Self> {
        Self::new(channel)
    }
}

impl From<AudioChannel> for u8 {
    fn from(channel: AudioChannel) -> u8 {
        channel.0
    }
}

impl fmt::Display for AudioChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Address one of eight consecutive slots starting at `base`.
///
/// Fails unless `1 <= channel <= 8`, and when the slot names no parameter.
pub fn encode_channel_offset(base: ControlId, channel: u8) -> Result<ControlId> {
    let channel = AudioChannel::new(channel)?;
    ControlId::from_raw(base.raw() + (channel.get() - 1))
}

/// Encode a toggle whose active value is the target's own identity.
pub fn encode_toggle_with_identity(state: ButtonState, identity: u8) -> u8 {
    match state {
        ButtonState::On => identity,
        ButtonState::Off => 0,
    }
}

impl From<AudioChannel> for MuteTarget {
    fn from(channel: AudioChannel) -> Self {
        MuteTarget::Input(channel)
    }
}

/// Path a mute applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MuteTarget {
    Input(AudioChannel),
    AudioIn,
    Output,
}

impl MuteTarget {
    pub fn control(self) -> ControlId {
        match self {
            MuteTarget::Input(channel) => INPUT_MUTES[usize::from(channel.get() - 1)],
            MuteTarget::AudioIn => ControlId::AudioMuteAudioIn,
            MuteTarget::Output => ControlId::AudioMuteOutput,
        }
    }

    /// Value transmitted when this path is muted.
    pub fn identity(self) -> u8 {
        match self {
            MuteTarget::Input(channel) => channel.get(),
            MuteTarget::AudioIn => AUDIO_IN_MUTE_IDENTITY,
            MuteTarget::Output => OUTPUT_MUTE_IDENTITY,
        }
    }

    /// Inverse of [`MuteTarget::control`].
    pub fn from_control(control: ControlId) -> Option<Self> {
        let raw = control.raw();
        let first = ControlId::AudioMuteInput1.raw();
        match control {
            ControlId::AudioMuteAudioIn => Some(MuteTarget::AudioIn),
            ControlId::AudioMuteOutput => Some(MuteTarget::Output),
            _ if (first..first + AudioChannel::MAX).contains(&raw) => {
                Some(MuteTarget::Input(AudioChannel(raw - first + 1)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for MuteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuteTarget::Input(channel) => write!(f, "input{channel}"),
            MuteTarget::AudioIn => f.write_str("audio-in"),
            MuteTarget::Output => f.write_str("output"),
        }
    }
}

impl FromStr for MuteTarget {
    type Err = CodecError;

    /// Accepts `input1`..`input8` (or a bare channel number), `audio-in`
    /// and `output`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        match wanted.as_str() {
            "audio-in" => return Ok(MuteTarget::AudioIn),
            "output" => return Ok(MuteTarget::Output),
            _ => {}
        }
        let digits = wanted.strip_prefix("input").unwrap_or(&wanted);
        match digits.parse::<u8>() {
            Ok(channel) => AudioChannel::new(channel).map(MuteTarget::Input),
            Err(_) => Err(CodecError::UnknownName {
                kind: "mute target",
                name: s.to_string(),
                expected: "input1..input8, audio-in, output".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_offset_is_injective_over_domain() {
        let mut seen = Vec::new();
        for channel in 1..=8u8 {
            let control = encode_channel_offset(ControlId::AudioLevelInput1, channel).unwrap();
            assert_eq!(control.raw(), 0x24 + channel - 1);
            assert!(!seen.contains(&control));
            seen.push(control);
        }
        assert_eq!(
            encode_channel_offset(ControlId::AudioMuteInput1, 8),
            Ok(ControlId::AudioMuteInput8)
        );
    }

    #[test]
    fn channel_outside_one_to_eight_rejected() {
        for channel in [0u8, 9, 255] {
            assert_eq!(
                encode_channel_offset(ControlId::AudioLevelInput1, channel),
                Err(CodecError::InvalidChannel { channel })
            );
        }
        assert!(AudioChannel::try_from(0).is_err());
        assert_eq!(AudioChannel::all().count(), 8);
    }

    #[test]
    fn mute_identities() {
        for channel in AudioChannel::all() {
            let target = MuteTarget::Input(channel);
            assert_eq!(
                encode_toggle_with_identity(ButtonState::On, target.identity()),
                channel.get()
            );
            assert_eq!(
                encode_toggle_with_identity(ButtonState::Off, target.identity()),
                0
            );
        }
        assert_eq!(
            encode_toggle_with_identity(ButtonState::On, MuteTarget::AudioIn.identity()),
            9
        );
        assert_eq!(
            encode_toggle_with_identity(ButtonState::On, MuteTarget::Output.identity()),
            16
        );
    }

    #[test]
    fn mute_controls_round_trip() {
        let three = AudioChannel::new(3).unwrap();
        assert_eq!(MuteTarget::Input(three).control().raw(), 0x3A);
        assert_eq!(MuteTarget::AudioIn.control().raw(), 0x40);
        assert_eq!(MuteTarget::Output.control().raw(), 0x41);
        for control in ControlId::all() {
            if let Some(target) = MuteTarget::from_control(control) {
                assert_eq!(target.control(), control);
            }
        }
        assert_eq!(MuteTarget::from_control(ControlId::AudioLevelInput1), None);
    }

    #[test]
    fn parse_mute_targets() {
        let five = AudioChannel::new(5).unwrap();
        assert_eq!("input5".parse::<MuteTarget>(), Ok(MuteTarget::Input(five)));
        assert_eq!("5".parse::<MuteTarget>(), Ok(MuteTarget::Input(five)));
        assert_eq!("AUDIO_IN".parse::<MuteTarget>(), Ok(MuteTarget::AudioIn));
        assert_eq!("output".parse::<MuteTarget>(), Ok(MuteTarget::Output));
        assert_eq!(
            "input9".parse::<MuteTarget>(),
            Err(CodecError::InvalidChannel { channel: 9 })
        );
        assert!("monitor".parse::<MuteTarget>().is_err());
        assert_eq!(MuteTarget::Input(five).to_string(), "input5");
    }
}
