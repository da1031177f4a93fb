//! One setter per V-8HD control.
//!
//! Each setter builds a [`Command`], which the codec validates and encodes
//! before the session transmits it.

use v8hd_codec::{
    AudioChannel, ButtonState, Command, InputSource, MuteTarget, PinPLayer, SplitVfxBank,
    SplitVfxType, TransitionType,
};
use v8hd_transport::MidiTransport;

use crate::error::Result;
use crate::session::Session;

impl<T: MidiTransport> Session<T> {
    fn apply(&mut self, command: Command) -> Result<()> {
        self.send(command).map(|_| ())
    }

    /// Video fader position, 0..=127.
    pub fn set_video_fader(&mut self, position: u8) -> Result<()> {
        self.apply(Command::VideoFader { position })
    }

    pub fn set_transition_type(&mut self, transition: TransitionType) -> Result<()> {
        self.apply(Command::TransitionType { transition })
    }

    /// Seconds, 0.0..=4.0 in 0.1 s steps.
    pub fn set_mix_wipe_time(&mut self, seconds: f64) -> Result<()> {
        self.apply(Command::MixWipeTime { seconds })
    }

    pub fn set_pinp1_time(&mut self, seconds: f64) -> Result<()> {
        self.apply(Command::PinPTime {
            layer: PinPLayer::PinP1,
            seconds,
        })
    }

    pub fn set_pinp2_time(&mut self, seconds: f64) -> Result<()> {
        self.apply(Command::PinPTime {
            layer: PinPLayer::PinP2,
            seconds,
        })
    }

    pub fn set_dsk_time(&mut self, seconds: f64) -> Result<()> {
        self.apply(Command::DskTime { seconds })
    }

    pub fn set_pinp1_source(&mut self, source: InputSource) -> Result<()> {
        self.apply(Command::PinPSource {
            layer: PinPLayer::PinP1,
            source,
        })
    }

    pub fn set_pinp2_source(&mut self, source: InputSource) -> Result<()> {
        self.apply(Command::PinPSource {
            layer: PinPLayer::PinP2,
            source,
        })
    }

    /// Percent, -50.0..=50.0.
    pub fn set_pinp1_position_h(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPPositionH {
            layer: PinPLayer::PinP1,
            percent,
        })
    }

    pub fn set_pinp1_position_v(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPPositionV {
            layer: PinPLayer::PinP1,
            percent,
        })
    }

    pub fn set_pinp2_position_h(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPPositionH {
            layer: PinPLayer::PinP2,
            percent,
        })
    }

    pub fn set_pinp2_position_v(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPPositionV {
            layer: PinPLayer::PinP2,
            percent,
        })
    }

    /// Percent, 10..=100.
    pub fn set_pinp1_size(&mut self, percent: u8) -> Result<()> {
        self.apply(Command::PinPSize {
            layer: PinPLayer::PinP1,
            percent,
        })
    }

    pub fn set_pinp2_size(&mut self, percent: u8) -> Result<()> {
        self.apply(Command::PinPSize {
            layer: PinPLayer::PinP2,
            percent,
        })
    }

    /// Percent, 100.0..=1000.0.
    pub fn set_pinp1_view_zoom(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPViewZoom {
            layer: PinPLayer::PinP1,
            percent,
        })
    }

    pub fn set_pinp2_view_zoom(&mut self, percent: f64) -> Result<()> {
        self.apply(Command::PinPViewZoom {
            layer: PinPLayer::PinP2,
            percent,
        })
    }

    pub fn set_dsk_source(&mut self, source: InputSource) -> Result<()> {
        self.apply(Command::DskSource { source })
    }

    pub fn set_dsk_level(&mut self, level: u8) -> Result<()> {
        self.apply(Command::DskLevel { level })
    }

    pub fn set_dsk_gain(&mut self, level: u8) -> Result<()> {
        self.apply(Command::DskGain { level })
    }

    pub fn set_dsk_mix_level(&mut self, level: u8) -> Result<()> {
        self.apply(Command::DskMixLevel { level })
    }

    pub fn set_split_vfx_a_switch(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::SplitVfxSwitch {
            bank: SplitVfxBank::A,
            state,
        })
    }

    pub fn set_split_vfx_b_switch(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::SplitVfxSwitch {
            bank: SplitVfxBank::B,
            state,
        })
    }

    pub fn set_split_vfx_a_type(&mut self, effect: SplitVfxType) -> Result<()> {
        self.apply(Command::SplitVfxType {
            bank: SplitVfxBank::A,
            effect,
        })
    }

    pub fn set_split_vfx_b_type(&mut self, effect: SplitVfxType) -> Result<()> {
        self.apply(Command::SplitVfxType {
            bank: SplitVfxBank::B,
            effect,
        })
    }

    /// Counter-clockwise OUTPUT FADE amount, 0..=63.
    pub fn set_output_fade_ccw(&mut self, value: u8) -> Result<()> {
        self.apply(Command::OutputFadeCcw { value })
    }

    /// Clockwise OUTPUT FADE amount, 0..=63.
    pub fn set_output_fade_cw(&mut self, value: u8) -> Result<()> {
        self.apply(Command::OutputFadeCw { value })
    }

    /// Level of audio input `channel` (1..=8).
    pub fn set_audio_input_level(&mut self, channel: u8, level: u8) -> Result<()> {
        self.apply(Command::AudioInputLevel { channel, level })
    }

    pub fn set_audio_in_level(&mut self, level: u8) -> Result<()> {
        self.apply(Command::AudioInLevel { level })
    }

    pub fn set_audio_output_level(&mut self, level: u8) -> Result<()> {
        self.apply(Command::AudioOutputLevel { level })
    }

    pub fn set_cut_button(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::CutButton { state })
    }

    pub fn set_auto_button(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::AutoButton { state })
    }

    pub fn trigger_h_cut(&mut self) -> Result<()> {
        self.apply(Command::HCut)
    }

    pub fn trigger_h_auto_take(&mut self) -> Result<()> {
        self.apply(Command::HAutoTake)
    }

    /// Mute or unmute audio input `channel` (1..=8).
    pub fn set_audio_input_mute(&mut self, channel: u8, state: ButtonState) -> Result<()> {
        let target = MuteTarget::Input(AudioChannel::new(channel)?);
        self.apply(Command::AudioMute { target, state })
    }

    pub fn set_audio_in_mute(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::AudioMute {
            target: MuteTarget::AudioIn,
            state,
        })
    }

    pub fn set_audio_output_mute(&mut self, state: ButtonState) -> Result<()> {
        self.apply(Command::AudioMute {
            target: MuteTarget::Output,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use v8hd_codec::CodecError;
    use v8hd_transport::{MemoryHandle, MemoryTransport};

    use super::*;
    use crate::error::SessionError;

    fn session() -> (Session<MemoryTransport>, MemoryHandle) {
        let transport = MemoryTransport::new(["Midi Through", "Roland V-8HD"]);
        let handle = transport.handle();
        let mut session = Session::new(transport);
        session.discover_and_open().unwrap();
        (session, handle)
    }

    #[test]
    fn every_setter_sends_its_unit() {
        let (mut s, handle) = session();

        s.set_video_fader(127).unwrap();
        s.set_transition_type(TransitionType::Wipe).unwrap();
        s.set_mix_wipe_time(1.5).unwrap();
        s.set_pinp1_time(0.0).unwrap();
        s.set_pinp2_time(4.0).unwrap();
        s.set_dsk_time(2.2).unwrap();
        s.set_pinp1_source(InputSource::Hdmi3).unwrap();
        s.set_pinp1_position_h(-25.0).unwrap();
        s.set_pinp1_position_v(0.0).unwrap();
        s.set_pinp1_size(50).unwrap();
        s.set_pinp1_view_zoom(100.0).unwrap();
        s.set_pinp2_source(InputSource::Still8).unwrap();
        s.set_pinp2_position_h(50.0).unwrap();
        s.set_pinp2_position_v(-50.0).unwrap();
        s.set_pinp2_size(100).unwrap();
        s.set_pinp2_view_zoom(1000.0).unwrap();
        s.set_dsk_source(InputSource::Hdmi1).unwrap();
        s.set_dsk_level(10).unwrap();
        s.set_dsk_gain(20).unwrap();
        s.set_dsk_mix_level(30).unwrap();
        s.set_split_vfx_a_switch(ButtonState::On).unwrap();
        s.set_split_vfx_a_type(SplitVfxType::Wave).unwrap();
        s.set_split_vfx_b_switch(ButtonState::Off).unwrap();
        s.set_split_vfx_b_type(SplitVfxType::Emboss).unwrap();
        s.set_output_fade_ccw(63).unwrap();
        s.set_output_fade_cw(0).unwrap();
        s.set_audio_input_level(4, 90).unwrap();
        s.set_audio_in_level(80).unwrap();
        s.set_audio_output_level(70).unwrap();
        s.set_cut_button(ButtonState::On).unwrap();
        s.set_auto_button(ButtonState::On).unwrap();
        s.trigger_h_cut().unwrap();
        s.trigger_h_auto_take().unwrap();
        s.set_audio_input_mute(2, ButtonState::On).unwrap();
        s.set_audio_in_mute(ButtonState::On).unwrap();
        s.set_audio_output_mute(ButtonState::On).unwrap();

        let expected: Vec<[u8; 2]> = vec![
            [0x0A, 127],
            [0x0B, 1],
            [0x0C, 15],
            [0x0D, 0],
            [0x0E, 40],
            [0x0F, 22],
            [0x10, 2],
            [0x11, 35],
            [0x12, 60],
            [0x13, 50],
            [0x14, 10],
            [0x15, 15],
            [0x16, 110],
            [0x17, 10],
            [0x18, 100],
            [0x19, 100],
            [0x1A, 0],
            [0x1B, 10],
            [0x1C, 20],
            [0x1D, 30],
            [0x1E, 1],
            [0x1F, 5],
            [0x20, 0],
            [0x21, 12],
            [0x22, 63],
            [0x23, 0],
            [0x27, 90],
            [0x2C, 80],
            [0x2D, 70],
            [0x34, 1],
            [0x35, 1],
            [0x36, 1],
            [0x37, 1],
            [0x39, 2],
            [0x40, 9],
            [0x41, 16],
        ];
        let sent = handle.sent();
        assert_eq!(sent.len(), expected.len());
        for (message, [control, value]) in sent.iter().zip(expected) {
            assert_eq!(message.as_slice(), [0xB0, control, value]);
        }
    }

    #[test]
    fn unmute_sends_zero() {
        let (mut s, handle) = session();
        s.set_audio_input_mute(8, ButtonState::Off).unwrap();
        s.set_audio_in_mute(ButtonState::Off).unwrap();
        s.set_audio_output_mute(ButtonState::Off).unwrap();
        assert_eq!(
            handle.sent(),
            vec![vec![0xB0, 0x3F, 0], vec![0xB0, 0x40, 0], vec![0xB0, 0x41, 0]]
        );
    }

    #[test]
    fn out_of_domain_values_send_nothing() {
        let (mut s, handle) = session();

        assert!(s.set_video_fader(128).is_err());
        assert!(s.set_mix_wipe_time(4.1).is_err());
        assert!(s.set_pinp1_position_h(-50.5).is_err());
        assert!(s.set_pinp2_size(9).is_err());
        assert!(s.set_pinp1_view_zoom(1000.5).is_err());
        assert!(s.set_output_fade_cw(64).is_err());
        for channel in [0, 9] {
            assert!(matches!(
                s.set_audio_input_level(channel, 0),
                Err(SessionError::Validation(CodecError::InvalidChannel { .. }))
            ));
            assert!(matches!(
                s.set_audio_input_mute(channel, ButtonState::On),
                Err(SessionError::Validation(CodecError::InvalidChannel { .. }))
            ));
        }

        assert!(handle.sent().is_empty());
        assert!(s.is_open());
    }

    #[test]
    fn setters_require_open_session() {
        let transport = MemoryTransport::new(["Roland V-8HD"]);
        let handle = transport.handle();
        let mut s = Session::new(transport);
        assert!(matches!(s.trigger_h_cut(), Err(SessionError::NotOpen)));

        s.discover_and_open().unwrap();
        s.close();
        assert!(matches!(
            s.set_auto_button(ButtonState::On),
            Err(SessionError::NotOpen)
        ));
        assert!(handle.sent().is_empty());
    }
}
