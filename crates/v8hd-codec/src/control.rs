//! Control identifiers.
//!
//! One identifier per controllable parameter. Per-input audio levels and
//! mutes occupy eight consecutive slots addressed from the first one.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

use crate::error::{CodecError, Result};

/// 7-bit Control-Change number of a V-8HD parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum ControlId {
    VideoFader = 0x0A,
    TransitionType = 0x0B,
    MixWipeTime = 0x0C,
    PinP1Time = 0x0D,
    PinP2Time = 0x0E,
    DskTime = 0x0F,
    PinP1Source = 0x10,
    PinP1PositionH = 0x11,
    PinP1PositionV = 0x12,
    PinP1Size = 0x13,
    PinP1ViewZoom = 0x14,
    PinP2Source = 0x15,
    PinP2PositionH = 0x16,
    PinP2PositionV = 0x17,
    PinP2Size = 0x18,
    PinP2ViewZoom = 0x19,
    DskSource = 0x1A,
    DskLevel = 0x1B,
    DskGain = 0x1C,
    DskMixLevel = 0x1D,
    SplitVfxASwitch = 0x1E,
    SplitVfxAType = 0x1F,
    SplitVfxBSwitch = 0x20,
    SplitVfxBType = 0x21,
    OutputFadeCcw = 0x22,
    OutputFadeCw = 0x23,
    AudioLevelInput1 = 0x24,
    AudioLevelInput2 = 0x25,
    AudioLevelInput3 = 0x26,
    AudioLevelInput4 = 0x27,
    AudioLevelInput5 = 0x28,
    AudioLevelInput6 = 0x29,
    AudioLevelInput7 = 0x2A,
    AudioLevelInput8 = 0x2B,
    AudioLevelAudioIn = 0x2C,
    AudioOutputLevel = 0x2D,
    CutButton = 0x34,
    AutoButton = 0x35,
    HCut = 0x36,
    HAutoTake = 0x37,
    AudioMuteInput1 = 0x38,
    AudioMuteInput2 = 0x39,
    AudioMuteInput3 = 0x3A,
    AudioMuteInput4 = 0x3B,
    AudioMuteInput5 = 0x3C,
    AudioMuteInput6 = 0x3D,
    AudioMuteInput7 = 0x3E,
    AudioMuteInput8 = 0x3F,
    AudioMuteAudioIn = 0x40,
    AudioMuteOutput = 0x41,
}

impl ControlId {
    /// Look up the parameter addressed by a raw control number.
    pub fn from_raw(raw: u8) -> Result<Self> {
        Self::try_from(raw).map_err(|_| CodecError::UnknownControl(raw))
    }

    /// The raw 7-bit control number.
    pub fn raw(self) -> u8 {
        self.into()
    }

    /// Every identifier in ascending wire order.
    pub fn all() -> impl Iterator<Item = ControlId> {
        (0u8..=0x7F).filter_map(|raw| ControlId::try_from(raw).ok())
    }

    /// Human-readable parameter name, as printed on the device.
    pub fn label(self) -> &'static str {
        match self {
            ControlId::VideoFader => "Video fader",
            ControlId::TransitionType => "Transition type",
            ControlId::MixWipeTime => "MIX/WIPE time",
            ControlId::PinP1Time => "PinP 1 time",
            ControlId::PinP2Time => "PinP 2 time",
            ControlId::DskTime => "DSK time",
            ControlId::PinP1Source => "PinP 1 source",
            ControlId::PinP1PositionH => "PinP 1 position H",
            ControlId::PinP1PositionV => "PinP 1 position V",
            ControlId::PinP1Size => "PinP 1 size",
            ControlId::PinP1ViewZoom => "PinP 1 view zoom",
            ControlId::PinP2Source => "PinP 2 source",
            ControlId::PinP2PositionH => "PinP 2 position H",
            ControlId::PinP2PositionV => "PinP 2 position V",
            ControlId::PinP2Size => "PinP 2 size",
            ControlId::PinP2ViewZoom => "PinP 2 view zoom",
            ControlId::DskSource => "DSK source",
            ControlId::DskLevel => "DSK level",
            ControlId::DskGain => "DSK gain",
            ControlId::DskMixLevel => "DSK mix level",
            ControlId::SplitVfxASwitch => "SPLIT/VFX A switch",
            ControlId::SplitVfxAType => "SPLIT/VFX A type",
            ControlId::SplitVfxBSwitch => "SPLIT/VFX B switch",
            ControlId::SplitVfxBType => "SPLIT/VFX B type",
            ControlId::OutputFadeCcw => "OUTPUT FADE (counter-clockwise)",
            ControlId::OutputFadeCw => "OUTPUT FADE (clockwise)",
            ControlId::AudioLevelInput1 => "Audio level INPUT 1",
            ControlId::AudioLevelInput2 => "Audio level INPUT 2",
            ControlId::AudioLevelInput3 => "Audio level INPUT 3",
            ControlId::AudioLevelInput4 => "Audio level INPUT 4",
            ControlId::AudioLevelInput5 => "Audio level INPUT 5",
            ControlId::AudioLevelInput6 => "Audio level INPUT 6",
            ControlId::AudioLevelInput7 => "Audio level INPUT 7",
            ControlId::AudioLevelInput8 => "Audio level INPUT 8",
            ControlId::AudioLevelAudioIn => "Audio level AUDIO IN",
            ControlId::AudioOutputLevel => "Audio output level",
            ControlId::CutButton => "CUT button",
            ControlId::AutoButton => "AUTO button",
            ControlId::HCut => "H CUT I",
            ControlId::HAutoTake => "H AUTO TAKE I",
            ControlId::AudioMuteInput1 => "Audio mute INPUT 1",
            ControlId::AudioMuteInput2 => "Audio mute INPUT 2",
            ControlId::AudioMuteInput3 => "Audio mute INPUT 3",
            ControlId::AudioMuteInput4 => "Audio mute INPUT 4",
            ControlId::AudioMuteInput5 => "Audio mute INPUT 5",
            ControlId::AudioMuteInput6 => "Audio mute INPUT 6",
            ControlId::AudioMuteInput7 => "Audio mute INPUT 7",
            ControlId::AudioMuteInput8 => "Audio mute INPUT 8",
            ControlId::AudioMuteAudioIn => "Audio mute AUDIO IN",
            ControlId::AudioMuteOutput => "Audio mute OUTPUT",
        }
    }
}
