//! Semantic commands and their Control-Change encodings.

use std::fmt;

use serde::Serialize;

use crate::audio::{encode_channel_offset, encode_toggle_with_identity, MuteTarget};
use crate::control::ControlId;
use crate::error::{CodecError, Result};
use crate::message::ControlChange;
use crate::params::{
    self, AUDIO_INPUT_LEVEL, AUDIO_IN_LEVEL, AUDIO_OUTPUT_LEVEL, DSK_GAIN, DSK_LEVEL,
    DSK_MIX_LEVEL, DSK_TIME, MIX_WIPE_TIME, OUTPUT_FADE_CCW, OUTPUT_FADE_CW, VIDEO_FADER,
};
use crate::quantize::{decode_bounded, decode_direct, encode_bounded, encode_direct, encode_enum};
use crate::types::{ButtonState, InputSource, PinPLayer, SplitVfxBank, SplitVfxType, TransitionType};

/// Value sent by momentary triggers (H CUT, H AUTO TAKE).
pub const TRIGGER_VALUE: u8 = 1;

/// One semantic setting of the V-8HD.
///
/// Every variant encodes to exactly one [`ControlChange`]. Values are kept
/// in engineering units and validated by [`Command::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    VideoFader {
        position: u8,
    },
    TransitionType {
        transition: TransitionType,
    },
    MixWipeTime {
        seconds: f64,
    },
    #[serde(rename = "pinp-time")]
    PinPTime {
        layer: PinPLayer,
        seconds: f64,
    },
    DskTime {
        seconds: f64,
    },
    #[serde(rename = "pinp-source")]
    PinPSource {
        layer: PinPLayer,
        source: InputSource,
    },
    #[serde(rename = "pinp-position-h")]
    PinPPositionH {
        layer: PinPLayer,
        percent: f64,
    },
    #[serde(rename = "pinp-position-v")]
    PinPPositionV {
        layer: PinPLayer,
        percent: f64,
    },
    #[serde(rename = "pinp-size")]
    PinPSize {
        layer: PinPLayer,
        percent: u8,
    },
    #[serde(rename = "pinp-view-zoom")]
    PinPViewZoom {
        layer: PinPLayer,
        percent: f64,
    },
    DskSource {
        source: InputSource,
    },
    DskLevel {
        level: u8,
    },
    DskGain {
        level: u8,
    },
    DskMixLevel {
        level: u8,
    },
    SplitVfxSwitch {
        bank: SplitVfxBank,
        state: ButtonState,
    },
    SplitVfxType {
        bank: SplitVfxBank,
        effect: SplitVfxType,
    },
    OutputFadeCcw {
        value: u8,
    },
    OutputFadeCw {
        value: u8,
    },
    /// `channel` is checked against 1..=8 when encoding.
    AudioInputLevel {
        channel: u8,
        level: u8,
    },
    AudioInLevel {
        level: u8,
    },
    AudioOutputLevel {
        level: u8,
    },
    CutButton {
        state: ButtonState,
    },
    AutoButton {
        state: ButtonState,
    },
    HCut,
    HAutoTake,
    AudioMute {
        target: MuteTarget,
        state: ButtonState,
    },
}

impl Command {
    /// Stable kebab-case name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::VideoFader { .. } => "video-fader",
            Command::TransitionType { .. } => "transition-type",
            Command::MixWipeTime { .. } => "mix-wipe-time",
            Command::PinPTime { .. } => "pinp-time",
            Command::DskTime { .. } => "dsk-time",
            Command::PinPSource { .. } => "pinp-source",
            Command::PinPPositionH { .. } => "pinp-position-h",
            Command::PinPPositionV { .. } => "pinp-position-v",
            Command::PinPSize { .. } => "pinp-size",
            Command::PinPViewZoom { .. } => "pinp-view-zoom",
            Command::DskSource { .. } => "dsk-source",
            Command::DskLevel { .. } => "dsk-level",
            Command::DskGain { .. } => "dsk-gain",
            Command::DskMixLevel { .. } => "dsk-mix-level",
            Command::SplitVfxSwitch { .. } => "split-vfx-switch",
            Command::SplitVfxType { .. } => "split-vfx-type",
            Command::OutputFadeCcw { .. } => "output-fade-ccw",
            Command::OutputFadeCw { .. } => "output-fade-cw",
            Command::AudioInputLevel { .. } => "audio-input-level",
            Command::AudioInLevel { .. } => "audio-in-level",
            Command::AudioOutputLevel { .. } => "audio-output-level",
            Command::CutButton { .. } => "cut-button",
            Command::AutoButton { .. } => "auto-button",
            Command::HCut => "h-cut",
            Command::HAutoTake => "h-auto-take",
            Command::AudioMute { .. } => "audio-mute",
        }
    }

    /// Validate and encode. Nothing is produced on failure.
    pub fn encode(&self) -> Result<ControlChange> {
        let (control, value) = match *self {
            Command::VideoFader { position } => {
                (VIDEO_FADER.control, encode_direct(&VIDEO_FADER, position)?)
            }
            Command::TransitionType { transition } => {
                (ControlId::TransitionType, encode_enum(transition))
            }
            Command::MixWipeTime { seconds } => {
                (MIX_WIPE_TIME.control, encode_bounded(&MIX_WIPE_TIME, seconds)?)
            }
            Command::PinPTime { layer, seconds } => {
                let spec = params::pinp_time(layer);
                (spec.control, encode_bounded(spec, seconds)?)
            }
            Command::DskTime { seconds } => (DSK_TIME.control, encode_bounded(&DSK_TIME, seconds)?),
            Command::PinPSource { layer, source } => (layer.source_control(), encode_enum(source)),
            Command::PinPPositionH { layer, percent } => {
                let spec = params::pinp_position_h(layer);
                (spec.control, encode_bounded(spec, percent)?)
            }
            Command::PinPPositionV { layer, percent } => {
                let spec = params::pinp_position_v(layer);
                (spec.control, encode_bounded(spec, percent)?)
            }
            Command::PinPSize { layer, percent } => {
                let spec = params::pinp_size(layer);
                (spec.control, encode_direct(spec, percent)?)
            }
            Command::PinPViewZoom { layer, percent } => {
                let spec = params::pinp_view_zoom(layer);
                (spec.control, encode_bounded(spec, percent)?)
            }
            Command::DskSource { source } => (ControlId::DskSource, encode_enum(source)),
            Command::DskLevel { level } => (DSK_LEVEL.control, encode_direct(&DSK_LEVEL, level)?),
            Command::DskGain { level } => (DSK_GAIN.control, encode_direct(&DSK_GAIN, level)?),
            Command::DskMixLevel { level } => {
                (DSK_MIX_LEVEL.control, encode_direct(&DSK_MIX_LEVEL, level)?)
            }
            Command::SplitVfxSwitch { bank, state } => (bank.switch_control(), encode_enum(state)),
            Command::SplitVfxType { bank, effect } => (bank.type_control(), encode_enum(effect)),
            Command::OutputFadeCcw { value } => (
                OUTPUT_FADE_CCW.control,
                encode_direct(&OUTPUT_FADE_CCW, value)?,
            ),
            Command::OutputFadeCw { value } => {
                (OUTPUT_FADE_CW.control, encode_direct(&OUTPUT_FADE_CW, value)?)
            }
            Command::AudioInputLevel { channel, level } => (
                encode_channel_offset(AUDIO_INPUT_LEVEL.control, channel)?,
                encode_direct(&AUDIO_INPUT_LEVEL, level)?,
            ),
            Command::AudioInLevel { level } => {
                (AUDIO_IN_LEVEL.control, encode_direct(&AUDIO_IN_LEVEL, level)?)
            }
            Command::AudioOutputLevel { level } => (
                AUDIO_OUTPUT_LEVEL.control,
                encode_direct(&AUDIO_OUTPUT_LEVEL, level)?,
            ),
            Command::CutButton { state } => (ControlId::CutButton, encode_enum(state)),
            Command::AutoButton { state } => (ControlId::AutoButton, encode_enum(state)),
            Command::HCut => (ControlId::HCut, TRIGGER_VALUE),
            Command::HAutoTake => (ControlId::HAutoTake, TRIGGER_VALUE),
            Command::AudioMute { target, state } => (
                target.control(),
                encode_toggle_with_identity(state, target.identity()),
            ),
        };
        ControlChange::new(control, value)
    }

    /// Map a unit back to the command that produces it.
    ///
    /// Triggers accept any value. Mutes accept only 0 and the target's
    /// identity.
    pub fn decode(cc: ControlChange) -> Result<Command> {
        let control = cc.control();
        let value = cc.value();
        let invalid = || CodecError::InvalidValue {
            parameter: control.label(),
            value,
        };

        let command = match control {
            ControlId::VideoFader => Command::VideoFader {
                position: decode_direct(&VIDEO_FADER, value)?,
            },
            ControlId::TransitionType => Command::TransitionType {
                transition: TransitionType::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::MixWipeTime => Command::MixWipeTime {
                seconds: decode_bounded(&MIX_WIPE_TIME, value)?,
            },
            ControlId::PinP1Time | ControlId::PinP2Time => {
                let layer = pinp_layer(control, ControlId::PinP1Time);
                Command::PinPTime {
                    layer,
                    seconds: decode_bounded(params::pinp_time(layer), value)?,
                }
            }
            ControlId::DskTime => Command::DskTime {
                seconds: decode_bounded(&DSK_TIME, value)?,
            },
            ControlId::PinP1Source | ControlId::PinP2Source => Command::PinPSource {
                layer: pinp_layer(control, ControlId::PinP1Source),
                source: InputSource::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::PinP1PositionH | ControlId::PinP2PositionH => {
                let layer = pinp_layer(control, ControlId::PinP1PositionH);
                Command::PinPPositionH {
                    layer,
                    percent: decode_bounded(params::pinp_position_h(layer), value)?,
                }
            }
            ControlId::PinP1PositionV | ControlId::PinP2PositionV => {
                let layer = pinp_layer(control, ControlId::PinP1PositionV);
                Command::PinPPositionV {
                    layer,
                    percent: decode_bounded(params::pinp_position_v(layer), value)?,
                }
            }
            ControlId::PinP1Size | ControlId::PinP2Size => {
                let layer = pinp_layer(control, ControlId::PinP1Size);
                Command::PinPSize {
                    layer,
                    percent: decode_direct(params::pinp_size(layer), value)?,
                }
            }
            ControlId::PinP1ViewZoom | ControlId::PinP2ViewZoom => {
                let layer = pinp_layer(control, ControlId::PinP1ViewZoom);
                Command::PinPViewZoom {
                    layer,
                    percent: decode_bounded(params::pinp_view_zoom(layer), value)?,
                }
            }
            ControlId::DskSource => Command::DskSource {
                source: InputSource::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::DskLevel => Command::DskLevel {
                level: decode_direct(&DSK_LEVEL, value)?,
            },
            ControlId::DskGain => Command::DskGain {
                level: decode_direct(&DSK_GAIN, value)?,
            },
            ControlId::DskMixLevel => Command::DskMixLevel {
                level: decode_direct(&DSK_MIX_LEVEL, value)?,
            },
            ControlId::SplitVfxASwitch | ControlId::SplitVfxBSwitch => Command::SplitVfxSwitch {
                bank: if control == ControlId::SplitVfxASwitch {
                    SplitVfxBank::A
                } else {
                    SplitVfxBank::B
                },
                state: ButtonState::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::SplitVfxAType | ControlId::SplitVfxBType => Command::SplitVfxType {
                bank: if control == ControlId::SplitVfxAType {
                    SplitVfxBank::A
                } else {
                    SplitVfxBank::B
                },
                effect: SplitVfxType::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::OutputFadeCcw => Command::OutputFadeCcw {
                value: decode_direct(&OUTPUT_FADE_CCW, value)?,
            },
            ControlId::OutputFadeCw => Command::OutputFadeCw {
                value: decode_direct(&OUTPUT_FADE_CW, value)?,
            },
            ControlId::AudioLevelInput1
            | ControlId::AudioLevelInput2
            | ControlId::AudioLevelInput3
            | ControlId::AudioLevelInput4
            | ControlId::AudioLevelInput5
            | ControlId::AudioLevelInput6
            | ControlId::AudioLevelInput7
            | ControlId::AudioLevelInput8 => Command::AudioInputLevel {
                channel: control.raw() - ControlId::AudioLevelInput1.raw() + 1,
                level: decode_direct(&AUDIO_INPUT_LEVEL, value)?,
            },
            ControlId::AudioLevelAudioIn => Command::AudioInLevel {
                level: decode_direct(&AUDIO_IN_LEVEL, value)?,
            },
            ControlId::AudioOutputLevel => Command::AudioOutputLevel {
                level: decode_direct(&AUDIO_OUTPUT_LEVEL, value)?,
            },
            ControlId::CutButton => Command::CutButton {
                state: ButtonState::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::AutoButton => Command::AutoButton {
                state: ButtonState::try_from(value).map_err(|_| invalid())?,
            },
            ControlId::HCut => Command::HCut,
            ControlId::HAutoTake => Command::HAutoTake,
            ControlId::AudioMuteInput1
            | ControlId::AudioMuteInput2
            | ControlId::AudioMuteInput3
            | ControlId::AudioMuteInput4
            | ControlId::AudioMuteInput5
            | ControlId::AudioMuteInput6
            | ControlId::AudioMuteInput7
            | ControlId::AudioMuteInput8
            | ControlId::AudioMuteAudioIn
            | ControlId::AudioMuteOutput => {
                let target = MuteTarget::from_control(control).ok_or_else(invalid)?;
                let state = if value == 0 {
                    ButtonState::Off
                } else if value == target.identity() {
                    ButtonState::On
                } else {
                    return Err(invalid());
                };
                Command::AudioMute { target, state }
            }
        };
        Ok(command)
    }

    /// Decode raw wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Command> {
        Self::decode(ControlChange::from_bytes(bytes)?)
    }
}

/// Layer addressed by a PinP control, given the PinP 1 control of its kind.
fn pinp_layer(control: ControlId, pinp1: ControlId) -> PinPLayer {
    if control == pinp1 {
        PinPLayer::PinP1
    } else {
        PinPLayer::PinP2
    }
}

impl fmt::Display for Command {
    /// Renders the command in command-line form, e.g. `pinp-source pinp1 hdmi3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Command::VideoFader { position } => write!(f, "{name} {position}"),
            Command::TransitionType { transition } => write!(f, "{name} {transition}"),
            Command::MixWipeTime { seconds } | Command::DskTime { seconds } => {
                write!(f, "{name} {seconds}")
            }
            Command::PinPTime { layer, seconds } => write!(f, "{name} {layer} {seconds}"),
            Command::PinPSource { layer, source } => write!(f, "{name} {layer} {source}"),
            Command::PinPPositionH { layer, percent }
            | Command::PinPPositionV { layer, percent }
            | Command::PinPViewZoom { layer, percent } => write!(f, "{name} {layer} {percent}"),
            Command::PinPSize { layer, percent } => write!(f, "{name} {layer} {percent}"),
            Command::DskSource { source } => write!(f, "{name} {source}"),
            Command::DskLevel { level }
            | Command::DskGain { level }
            | Command::DskMixLevel { level }
            | Command::AudioInLevel { level }
            | Command::AudioOutputLevel { level } => write!(f, "{name} {level}"),
            Command::SplitVfxSwitch { bank, state } => write!(f, "{name} {bank} {state}"),
            Command::SplitVfxType { bank, effect } => write!(f, "{name} {bank} {effect}"),
            Command::OutputFadeCcw { value } | Command::OutputFadeCw { value } => {
                write!(f, "{name} {value}")
            }
            Command::AudioInputLevel { channel, level } => write!(f, "{name} {channel} {level}"),
            Command::CutButton { state } | Command::AutoButton { state } => {
                write!(f, "{name} {state}")
            }
            Command::HCut | Command::HAutoTake => f.write_str(name),
            Command::AudioMute { target, state } => write!(f, "{name} {target} {state}"),
        }
    }
}
