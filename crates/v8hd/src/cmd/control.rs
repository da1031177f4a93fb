use clap::Subcommand;
use v8hd_codec::{
    AudioChannel, ButtonState, CodecError, Command, InputSource, MuteTarget, PinPLayer,
    SplitVfxBank, SplitVfxType, TransitionType,
};

/// One V-8HD control and its value, in engineering units.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ControlArgs {
    /// Video fader position (0-127).
    VideoFader { position: u8 },
    /// Transition type: mix, wipe.
    TransitionType { transition: TransitionType },
    /// MIX/WIPE time in seconds (0-4).
    MixWipeTime {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// PinP 1 transition time in seconds (0-4).
    Pinp1Time {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// PinP 2 transition time in seconds (0-4).
    Pinp2Time {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// DSK transition time in seconds (0-4).
    DskTime {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// PinP 1 source: hdmi1-hdmi8, still1-still8.
    Pinp1Source { source: InputSource },
    /// PinP 1 horizontal position in percent (-50 to 50).
    Pinp1PositionH {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// PinP 1 vertical position in percent (-50 to 50).
    Pinp1PositionV {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// PinP 1 size in percent (10-100).
    Pinp1Size { percent: u8 },
    /// PinP 1 view zoom in percent (100-1000).
    Pinp1ViewZoom {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// PinP 2 source: hdmi1-hdmi8, still1-still8.
    Pinp2Source { source: InputSource },
    /// PinP 2 horizontal position in percent (-50 to 50).
    Pinp2PositionH {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// PinP 2 vertical position in percent (-50 to 50).
    Pinp2PositionV {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// PinP 2 size in percent (10-100).
    Pinp2Size { percent: u8 },
    /// PinP 2 view zoom in percent (100-1000).
    Pinp2ViewZoom {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// DSK source: hdmi1-hdmi8, still1-still8.
    DskSource { source: InputSource },
    /// DSK level (0-127).
    DskLevel { level: u8 },
    /// DSK gain (0-127).
    DskGain { level: u8 },
    /// DSK mix level (0-127).
    DskMixLevel { level: u8 },
    /// SPLIT/VFX A on or off.
    SplitVfxASwitch { state: ButtonState },
    /// SPLIT/VFX A effect type.
    SplitVfxAType { effect: SplitVfxType },
    /// SPLIT/VFX B on or off.
    SplitVfxBSwitch { state: ButtonState },
    /// SPLIT/VFX B effect type.
    SplitVfxBType { effect: SplitVfxType },
    /// OUTPUT FADE counter-clockwise amount (0-63).
    OutputFadeCcw { value: u8 },
    /// OUTPUT FADE clockwise amount (0-63).
    OutputFadeCw { value: u8 },
    /// Level of audio input 1-8 (0-127).
    AudioInputLevel { channel: u8, level: u8 },
    /// AUDIO IN level (0-127).
    AudioInLevel { level: u8 },
    /// Audio output level (0-127).
    AudioOutputLevel { level: u8 },
    /// Press (on) or release (off) CUT.
    CutButton {
        #[arg(default_value = "on")]
        state: ButtonState,
    },
    /// Press (on) or release (off) AUTO.
    AutoButton {
        #[arg(default_value = "on")]
        state: ButtonState,
    },
    /// Trigger H CUT.
    HCut,
    /// Trigger H AUTO TAKE.
    HAutoTake,
    /// Mute or unmute audio input 1-8.
    AudioInputMute {
        channel: u8,
        #[arg(default_value = "on")]
        state: ButtonState,
    },
    /// Mute or unmute AUDIO IN.
    AudioInMute {
        #[arg(default_value = "on")]
        state: ButtonState,
    },
    /// Mute or unmute the audio output.
    AudioOutputMute {
        #[arg(default_value = "on")]
        state: ButtonState,
    },
}

impl ControlArgs {
    /// The codec command this control sets. Only channel numbers are
    /// checked here; value domains are checked when encoding.
    pub fn to_command(&self) -> Result<Command, CodecError> {
        use PinPLayer::{PinP1, PinP2};
        use SplitVfxBank::{A, B};

        let command = match *self {
            ControlArgs::VideoFader { position } => Command::VideoFader { position },
            ControlArgs::TransitionType { transition } => Command::TransitionType { transition },
            ControlArgs::MixWipeTime { seconds } => Command::MixWipeTime { seconds },
            ControlArgs::Pinp1Time { seconds } => Command::PinPTime {
                layer: PinP1,
                seconds,
            },
            ControlArgs::Pinp2Time { seconds } => Command::PinPTime {
                layer: PinP2,
                seconds,
            },
            ControlArgs::DskTime { seconds } => Command::DskTime { seconds },
            ControlArgs::Pinp1Source { source } => Command::PinPSource {
                layer: PinP1,
                source,
            },
            ControlArgs::Pinp1PositionH { percent } => Command::PinPPositionH {
                layer: PinP1,
                percent,
            },
            ControlArgs::Pinp1PositionV { percent } => Command::PinPPositionV {
                layer: PinP1,
                percent,
            },
            ControlArgs::Pinp1Size { percent } => Command::PinPSize {
                layer: PinP1,
                percent,
            },
            ControlArgs::Pinp1ViewZoom { percent } => Command::PinPViewZoom {
                layer: PinP1,
                percent,
            },
            ControlArgs::Pinp2Source { source } => Command::PinPSource {
                layer: PinP2,
                source,
            },
            ControlArgs::Pinp2PositionH { percent } => Command::PinPPositionH {
                layer: PinP2,
                percent,
            },
            ControlArgs::Pinp2PositionV { percent } => Command::PinPPositionV {
                layer: PinP2,
                percent,
            },
            ControlArgs::Pinp2Size { percent } => Command::PinPSize {
                layer: PinP2,
                percent,
            },
            ControlArgs::Pinp2ViewZoom { percent } => Command::PinPViewZoom {
                layer: PinP2,
                percent,
            },
            ControlArgs::DskSource { source } => Command::DskSource { source },
            ControlArgs::DskLevel { level } => Command::DskLevel { level },
            ControlArgs::DskGain { level } => Command::DskGain { level },
            ControlArgs::DskMixLevel { level } => Command::DskMixLevel { level },
            ControlArgs::SplitVfxASwitch { state } => Command::SplitVfxSwitch { bank: A, state },
            ControlArgs::SplitVfxAType { effect } => Command::SplitVfxType { bank: A, effect },
            ControlArgs::SplitVfxBSwitch { state } => Command::SplitVfxSwitch { bank: B, state },
            ControlArgs::SplitVfxBType { effect } => Command::SplitVfxType { bank: B, effect },
            ControlArgs::OutputFadeCcw { value } => Command::OutputFadeCcw { value },
            ControlArgs::OutputFadeCw { value } => Command::OutputFadeCw { value },
            ControlArgs::AudioInputLevel { channel, level } => {
                Command::AudioInputLevel { channel, level }
            }
            ControlArgs::AudioInLevel { level } => Command::AudioInLevel { level },
            ControlArgs::AudioOutputLevel { level } => Command::AudioOutputLevel { level },
            ControlArgs::CutButton { state } => Command::CutButton { state },
            ControlArgs::AutoButton { state } => Command::AutoButton { state },
            ControlArgs::HCut => Command::HCut,
            ControlArgs::HAutoTake => Command::HAutoTake,
            ControlArgs::AudioInputMute { channel, state } => Command::AudioMute {
                target: MuteTarget::Input(AudioChannel::new(channel)?),
                state,
            },
            ControlArgs::AudioInMute { state } => Command::AudioMute {
                target: MuteTarget::AudioIn,
                state,
            },
            ControlArgs::AudioOutputMute { state } => Command::AudioMute {
                target: MuteTarget::Output,
                state,
            },
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinp_controls_select_their_layer() {
        let command = ControlArgs::Pinp2ViewZoom { percent: 550.0 }
            .to_command()
            .unwrap();
        assert_eq!(command.encode().unwrap().to_bytes(), [0xB0, 0x19, 55]);
    }

    #[test]
    fn split_vfx_controls_select_their_bank() {
        let command = ControlArgs::SplitVfxBType {
            effect: SplitVfxType::SplitH,
        }
        .to_command()
        .unwrap();
        assert_eq!(command.encode().unwrap().to_bytes(), [0xB0, 0x21, 1]);
    }

    #[test]
    fn mute_channel_checked_up_front() {
        let err = ControlArgs::AudioInputMute {
            channel: 9,
            state: ButtonState::On,
        }
        .to_command()
        .unwrap_err();
        assert_eq!(err, CodecError::InvalidChannel { channel: 9 });
    }
}
