//! Parameter table: domain and transform for every quantized control.
//!
//! Enumerated controls (sources, transition and effect types, buttons) are
//! encoded by discriminant and have no entry here.

use crate::control::ControlId;
use crate::quantize::{ParamSpec, Quantizer};
use crate::types::PinPLayer;

const TENTHS: Quantizer = Quantizer::Scale { factor: 10.0 };

const POSITION: Quantizer = Quantizer::Offset {
    offset: 50.0,
    bias: 10,
};

const ZOOM: Quantizer = Quantizer::Span {
    origin: 100.0,
    span: 900.0,
    steps: 90.0,
    bias: 10,
};

const fn level(name: &'static str, control: ControlId, max: f64) -> ParamSpec {
    ParamSpec {
        name,
        control,
        min: 0.0,
        max,
        unit: "",
        quantizer: Quantizer::Identity,
    }
}

const fn time(name: &'static str, control: ControlId) -> ParamSpec {
    ParamSpec {
        name,
        control,
        min: 0.0,
        max: 4.0,
        unit: "s",
        quantizer: TENTHS,
    }
}

const fn position(name: &'static str, control: ControlId) -> ParamSpec {
    ParamSpec {
        name,
        control,
        min: -50.0,
        max: 50.0,
        unit: "%",
        quantizer: POSITION,
    }
}

const fn size(name: &'static str, control: ControlId) -> ParamSpec {
    ParamSpec {
        name,
        control,
        min: 10.0,
        max: 100.0,
        unit: "%",
        quantizer: Quantizer::Identity,
    }
}

const fn zoom(name: &'static str, control: ControlId) -> ParamSpec {
    ParamSpec {
        name,
        control,
        min: 100.0,
        max: 1000.0,
        unit: "%",
        quantizer: ZOOM,
    }
}

pub const VIDEO_FADER: ParamSpec = level("Video fader position", ControlId::VideoFader, 127.0);

pub const MIX_WIPE_TIME: ParamSpec = time("MIX/WIPE time", ControlId::MixWipeTime);
pub const PINP1_TIME: ParamSpec = time("PinP 1 time", ControlId::PinP1Time);
pub const PINP2_TIME: ParamSpec = time("PinP 2 time", ControlId::PinP2Time);
pub const DSK_TIME: ParamSpec = time("DSK time", ControlId::DskTime);

pub const PINP1_POSITION_H: ParamSpec =
    position("PinP 1 horizontal position", ControlId::PinP1PositionH);
pub const PINP1_POSITION_V: ParamSpec =
    position("PinP 1 vertical position", ControlId::PinP1PositionV);
pub const PINP2_POSITION_H: ParamSpec =
    position("PinP 2 horizontal position", ControlId::PinP2PositionH);
pub const PINP2_POSITION_V: ParamSpec =
    position("PinP 2 vertical position", ControlId::PinP2PositionV);

pub const PINP1_SIZE: ParamSpec = size("PinP 1 size", ControlId::PinP1Size);
pub const PINP2_SIZE: ParamSpec = size("PinP 2 size", ControlId::PinP2Size);

pub const PINP1_VIEW_ZOOM: ParamSpec = zoom("PinP 1 view zoom", ControlId::PinP1ViewZoom);
pub const PINP2_VIEW_ZOOM: ParamSpec = zoom("PinP 2 view zoom", ControlId::PinP2ViewZoom);

pub const DSK_LEVEL: ParamSpec = level("DSK level", ControlId::DskLevel, 127.0);
pub const DSK_GAIN: ParamSpec = level("DSK gain", ControlId::DskGain, 127.0);
pub const DSK_MIX_LEVEL: ParamSpec = level("DSK mix level", ControlId::DskMixLevel, 127.0);

pub const OUTPUT_FADE_CCW: ParamSpec = level(
    "OUTPUT FADE counter-clockwise value",
    ControlId::OutputFadeCcw,
    63.0,
);
pub const OUTPUT_FADE_CW: ParamSpec =
    level("OUTPUT FADE clockwise value", ControlId::OutputFadeCw, 63.0);

/// Base slot; the channel offset selects INPUT 1..8.
pub const AUDIO_INPUT_LEVEL: ParamSpec =
    level("Audio input level", ControlId::AudioLevelInput1, 127.0);
pub const AUDIO_IN_LEVEL: ParamSpec =
    level("AUDIO IN level", ControlId::AudioLevelAudioIn, 127.0);
pub const AUDIO_OUTPUT_LEVEL: ParamSpec =
    level("Audio output level", ControlId::AudioOutputLevel, 127.0);

pub const TIME_PARAMS: [&ParamSpec; 4] = [&MIX_WIPE_TIME, &PINP1_TIME, &PINP2_TIME, &DSK_TIME];

pub fn pinp_time(layer: PinPLayer) -> &'static ParamSpec {
    match layer {
        PinPLayer::PinP1 => &PINP1_TIME,
        PinPLayer::PinP2 => &PINP2_TIME,
    }
}

pub fn pinp_position_h(layer: PinPLayer) -> &'static ParamSpec {
    match layer {
        PinPLayer::PinP1 => &PINP1_POSITION_H,
        PinPLayer::PinP2 => &PINP2_POSITION_H,
    }
}

pub fn pinp_position_v(layer: PinPLayer) -> &'static ParamSpec {
    match layer {
        PinPLayer::PinP1 => &PINP1_POSITION_V,
        PinPLayer::PinP2 => &PINP2_POSITION_V,
    }
}

pub fn pinp_size(layer: PinPLayer) -> &'static ParamSpec {
    match layer {
        PinPLayer::PinP1 => &PINP1_SIZE,
        PinPLayer::PinP2 => &PINP2_SIZE,
    }
}

pub fn pinp_view_zoom(layer: PinPLayer) -> &'static ParamSpec {
    match layer {
        PinPLayer::PinP1 => &PINP1_VIEW_ZOOM,
        PinPLayer::PinP2 => &PINP2_VIEW_ZOOM,
    }
}
