//! Closed enumerations carried as protocol values.

use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

use crate::control::ControlId;
use crate::error::{CodecError, Result};

/// Implements stable kebab-case names, `Display` and `FromStr` for an
/// enumeration. Parsing ignores case and accepts `_` for `-`.
macro_rules! named_values {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every value, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Stable name used on the command line and in JSON.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = CodecError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|value| value.name() == wanted)
                    .ok_or_else(|| CodecError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                        expected: $ty::ALL
                            .iter()
                            .map(|value| value.name())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

/// Transition applied by the video fader and AUTO.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum TransitionType {
    /// Crossfade between sources.
    Mix = 0x00,
    /// One source replaces the other behind a moving boundary.
    Wipe = 0x01,
}

named_values!(TransitionType, "transition type", {
    Mix => "mix",
    Wipe => "wipe",
});

/// Video source selectable for PinP and DSK.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum InputSource {
    Hdmi1 = 0x00,
    Hdmi2 = 0x01,
    Hdmi3 = 0x02,
    Hdmi4 = 0x03,
    Hdmi5 = 0x04,
    Hdmi6 = 0x05,
    Hdmi7 = 0x06,
    Hdmi8 = 0x07,
    Still1 = 0x08,
    Still2 = 0x09,
    Still3 = 0x0A,
    Still4 = 0x0B,
    Still5 = 0x0C,
    Still6 = 0x0D,
    Still7 = 0x0E,
    Still8 = 0x0F,
}

named_values!(InputSource, "input source", {
    Hdmi1 => "hdmi1",
    Hdmi2 => "hdmi2",
    Hdmi3 => "hdmi3",
    Hdmi4 => "hdmi4",
    Hdmi5 => "hdmi5",
    Hdmi6 => "hdmi6",
    Hdmi7 => "hdmi7",
    Hdmi8 => "hdmi8",
    Still1 => "still1",
    Still2 => "still2",
    Still3 => "still3",
    Still4 => "still4",
    Still5 => "still5",
    Still6 => "still6",
    Still7 => "still7",
    Still8 => "still8",
});

/// SPLIT/VFX effect types (owner's manual p. 106).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum SplitVfxType {
    SplitV = 0x00,
    SplitH = 0x01,
    PartMosaic = 0x02,
    BackgroundMosaic = 0x03,
    FullMosaic = 0x04,
    Wave = 0x05,
    RgbReplace = 0x06,
    ColorPass = 0x07,
    Negative = 0x08,
    Colorize = 0x09,
    Posterize = 0x0A,
    Silhouette = 0x0B,
    Emboss = 0x0C,
    FindEdges = 0x0D,
    Monocolor = 0x0E,
    HueOffset = 0x0F,
    SaturationOffset = 0x10,
    ValueOffset = 0x11,
}

named_values!(SplitVfxType, "split/vfx type", {
    SplitV => "split-v",
    SplitH => "split-h",
    PartMosaic => "part-mosaic",
    BackgroundMosaic => "background-mosaic",
    FullMosaic => "full-mosaic",
    Wave => "wave",
    RgbReplace => "rgb-replace",
    ColorPass => "color-pass",
    Negative => "negative",
    Colorize => "colorize",
    Posterize => "posterize",
    Silhouette => "silhouette",
    Emboss => "emboss",
    FindEdges => "find-edges",
    Monocolor => "monocolor",
    HueOffset => "hue-offset",
    SaturationOffset => "saturation-offset",
    ValueOffset => "value-offset",
});

/// State of a toggle control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum ButtonState {
    Off = 0x00,
    On = 0x01,
}

named_values!(ButtonState, "button state", {
    Off => "off",
    On => "on",
});

impl Default for ButtonState {
    /// Buttons are pressed unless stated otherwise.
    fn default() -> Self {
        ButtonState::On
    }
}

impl ButtonState {
    pub fn is_on(self) -> bool {
        self == ButtonState::On
    }
}

impl From<bool> for ButtonState {
    fn from(on: bool) -> Self {
        if on {
            ButtonState::On
        } else {
            ButtonState::Off
        }
    }
}

/// Picture-in-picture layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PinPLayer {
    #[serde(rename = "pinp1")]
    PinP1,
    #[serde(rename = "pinp2")]
    PinP2,
}

named_values!(PinPLayer, "PinP layer", {
    PinP1 => "pinp1",
    PinP2 => "pinp2",
});

impl PinPLayer {
    pub fn time_control(self) -> ControlId {
        match self {
            PinPLayer::PinP1 => ControlId::PinP1Time,
            PinPLayer::PinP2 => ControlId::PinP2Time,
        }
    }

    pub fn source_control(self) -> ControlId {
        match self {
            PinPLayer::PinP1 => ControlId::PinP1Source,
            PinPLayer::PinP2 => ControlId::PinP2Source,
        }
    }
}

/// SPLIT/VFX effect bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitVfxBank {
    A,
    B,
}

named_values!(SplitVfxBank, "split/vfx bank", {
    A => "a",
    B => "b",
});

impl SplitVfxBank {
    pub fn switch_control(self) -> ControlId {
        match self {
            SplitVfxBank::A => ControlId::SplitVfxASwitch,
            SplitVfxBank::B => ControlId::SplitVfxBSwitch,
        }
    }

    pub fn type_control(self) -> ControlId {
        match self {
            SplitVfxBank::A => ControlId::SplitVfxAType,
            SplitVfxBank::B => ControlId::SplitVfxBType,
        }
    }
}
