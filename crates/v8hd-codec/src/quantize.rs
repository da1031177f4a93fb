//! Transforms between engineering units and 7-bit protocol values.

use crate::control::ControlId;
use crate::error::{CodecError, Result};
use crate::message::MAX_DATA;

/// How a parameter's semantic value becomes a protocol value.
///
/// Each variant reproduces one formula exactly, including the order of
/// floating-point operations, so every encoder produces the same integers
/// as the device documentation tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantizer {
    /// `value` as-is.
    Identity,
    /// `round(value * factor)`.
    Scale { factor: f64 },
    /// `round(value + offset) + bias`.
    Offset { offset: f64, bias: u8 },
    /// `round((value - origin) / span * steps) + bias`.
    Span {
        origin: f64,
        span: f64,
        steps: f64,
        bias: u8,
    },
}

impl Quantizer {
    /// Apply the forward transform. The caller validates the domain.
    pub fn quantize(self, value: f64) -> f64 {
        match self {
            Quantizer::Identity => value.round(),
            Quantizer::Scale { factor } => (value * factor).round(),
            Quantizer::Offset { offset, bias } => (value + offset).round() + f64::from(bias),
            Quantizer::Span {
                origin,
                span,
                steps,
                bias,
            } => ((value - origin) / span * steps).round() + f64::from(bias),
        }
    }

    /// Apply the inverse transform, yielding the grid point `raw` stands for.
    pub fn dequantize(self, raw: u8) -> f64 {
        let raw = f64::from(raw);
        match self {
            Quantizer::Identity => raw,
            Quantizer::Scale { factor } => raw / factor,
            Quantizer::Offset { offset, bias } => raw - f64::from(bias) - offset,
            // Multiply before dividing so grid points come back exact.
            Quantizer::Span {
                origin,
                span,
                steps,
                bias,
            } => (raw - f64::from(bias)) * span / steps + origin,
        }
    }
}

/// Domain and transform of one device parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Name used in diagnostics.
    pub name: &'static str,
    /// Control identifier, or the base slot for per-channel parameters.
    pub control: ControlId,
    /// Inclusive lower bound in engineering units.
    pub min: f64,
    /// Inclusive upper bound in engineering units.
    pub max: f64,
    /// Unit suffix for diagnostics (`"s"`, `"%"` or empty).
    pub unit: &'static str,
    pub quantizer: Quantizer,
}

impl ParamSpec {
    /// Whether `value` lies in the inclusive domain. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn out_of_range(&self, value: f64) -> CodecError {
        CodecError::OutOfRange {
            parameter: self.name,
            value,
            min: self.min,
            max: self.max,
            unit: self.unit,
        }
    }

    fn invalid(&self, raw: u8) -> CodecError {
        CodecError::InvalidValue {
            parameter: self.name,
            value: raw,
        }
    }
}

/// Validate a real-valued quantity and quantize it.
pub fn encode_bounded(spec: &ParamSpec, value: f64) -> Result<u8> {
    if !spec.contains(value) {
        return Err(spec.out_of_range(value));
    }
    let quantized = spec.quantizer.quantize(value);
    if !(0.0..=f64::from(MAX_DATA)).contains(&quantized) {
        return Err(spec.out_of_range(value));
    }
    Ok(quantized as u8)
}

/// Validate an integer level and pass it through.
pub fn encode_direct(spec: &ParamSpec, value: u8) -> Result<u8> {
    encode_bounded(spec, f64::from(value))
}

/// Protocol value of a closed enumeration: its discriminant.
pub fn encode_enum<E: Into<u8>>(value: E) -> u8 {
    value.into()
}

/// Inverse of [`encode_bounded`]: the engineering value `raw` represents.
pub fn decode_bounded(spec: &ParamSpec, raw: u8) -> Result<f64> {
    if raw > MAX_DATA {
        return Err(spec.invalid(raw));
    }
    let value = spec.quantizer.dequantize(raw);
    if spec.contains(value) {
        Ok(value)
    } else {
        Err(spec.invalid(raw))
    }
}

/// Inverse of [`encode_direct`].
pub fn decode_direct(spec: &ParamSpec, raw: u8) -> Result<u8> {
    decode_bounded(spec, raw).map(|value| value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        MIX_WIPE_TIME, OUTPUT_FADE_CW, PINP1_POSITION_H, PINP1_SIZE, PINP1_VIEW_ZOOM,
        PINP2_VIEW_ZOOM, TIME_PARAMS, VIDEO_FADER,
    };

    #[test]
    fn time_endpoints() {
        for spec in TIME_PARAMS {
            assert_eq!(encode_bounded(spec, 0.0), Ok(0));
            assert_eq!(encode_bounded(spec, 4.0), Ok(40));
        }
        assert_eq!(encode_bounded(&MIX_WIPE_TIME, 1.5), Ok(15));
        assert_eq!(encode_bounded(&MIX_WIPE_TIME, 0.25), Ok(3));
    }

    #[test]
    fn time_is_monotonic() {
        for spec in TIME_PARAMS {
            let mut previous = 0u8;
            for step in 0..=400 {
                let value = encode_bounded(spec, f64::from(step) / 100.0).unwrap();
                assert!(value >= previous, "{} not monotonic at {step}", spec.name);
                previous = value;
            }
        }
    }

    #[test]
    fn time_out_of_range() {
        let err = encode_bounded(&MIX_WIPE_TIME, 4.1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MIX/WIPE time must be between 0 and 4s, got 4.1"
        );
        assert!(encode_bounded(&MIX_WIPE_TIME, -0.01).is_err());
        assert!(encode_bounded(&MIX_WIPE_TIME, f64::NAN).is_err());
    }

    #[test]
    fn position_mapping() {
        assert_eq!(encode_bounded(&PINP1_POSITION_H, -50.0), Ok(10));
        assert_eq!(encode_bounded(&PINP1_POSITION_H, 0.0), Ok(60));
        assert_eq!(encode_bounded(&PINP1_POSITION_H, 50.0), Ok(110));
        assert_eq!(encode_bounded(&PINP1_POSITION_H, -25.0), Ok(35));
        assert_eq!(encode_bounded(&PINP1_POSITION_H, 12.5), Ok(73));
        assert!(encode_bounded(&PINP1_POSITION_H, 50.5).is_err());
        assert!(encode_bounded(&PINP1_POSITION_H, -50.5).is_err());
    }

    #[test]
    fn zoom_mapping() {
        for spec in [&PINP1_VIEW_ZOOM, &PINP2_VIEW_ZOOM] {
            assert_eq!(encode_bounded(spec, 100.0), Ok(10));
            assert_eq!(encode_bounded(spec, 550.0), Ok(55));
            assert_eq!(encode_bounded(spec, 1000.0), Ok(100));
            assert!(encode_bounded(spec, 99.0).is_err());
            assert!(encode_bounded(spec, 1001.0).is_err());
        }
    }

    #[test]
    fn direct_levels_inclusive() {
        assert_eq!(encode_direct(&VIDEO_FADER, 0), Ok(0));
        assert_eq!(encode_direct(&VIDEO_FADER, 127), Ok(127));
        assert!(encode_direct(&VIDEO_FADER, 128).is_err());
        assert_eq!(encode_direct(&OUTPUT_FADE_CW, 63), Ok(63));
        assert!(encode_direct(&OUTPUT_FADE_CW, 64).is_err());
        assert_eq!(encode_direct(&PINP1_SIZE, 10), Ok(10));
        assert!(encode_direct(&PINP1_SIZE, 9).is_err());
        assert!(encode_direct(&PINP1_SIZE, 101).is_err());
    }

    #[test]
    fn fader_negative_is_rejected() {
        assert!(encode_bounded(&VIDEO_FADER, -1.0).is_err());
    }

    #[test]
    fn decode_inverts_grid_points() {
        assert_eq!(decode_bounded(&MIX_WIPE_TIME, 15), Ok(1.5));
        assert_eq!(decode_bounded(&MIX_WIPE_TIME, 1), Ok(0.1));
        assert_eq!(decode_bounded(&PINP1_POSITION_H, 35), Ok(-25.0));
        assert_eq!(decode_bounded(&PINP1_VIEW_ZOOM, 11), Ok(110.0));
        assert_eq!(decode_bounded(&PINP1_VIEW_ZOOM, 100), Ok(1000.0));
        for raw in 10..=100u8 {
            let zoom = decode_bounded(&PINP1_VIEW_ZOOM, raw).unwrap();
            assert_eq!(encode_bounded(&PINP1_VIEW_ZOOM, zoom), Ok(raw));
        }
    }

    #[test]
    fn decode_rejects_values_outside_domain() {
        assert!(decode_bounded(&MIX_WIPE_TIME, 41).is_err());
        assert!(decode_bounded(&PINP1_POSITION_H, 9).is_err());
        assert!(decode_bounded(&PINP1_POSITION_H, 111).is_err());
        assert!(decode_bounded(&PINP1_VIEW_ZOOM, 101).is_err());
        assert!(decode_direct(&OUTPUT_FADE_CW, 64).is_err());
        assert!(decode_direct(&VIDEO_FADER, 0x80).is_err());
    }

    #[test]
    fn quantizer_formulas() {
        let offset = Quantizer::Offset {
            offset: 50.0,
            bias: 10,
        };
        assert_eq!(offset.quantize(-49.6), 10.0);
        assert_eq!(offset.dequantize(60), 0.0);
        assert_eq!(Quantizer::Scale { factor: 10.0 }.quantize(0.05), 1.0);
        assert_eq!(Quantizer::Identity.dequantize(42), 42.0);
    }
}
