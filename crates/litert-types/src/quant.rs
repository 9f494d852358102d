//! Legacy affine quantization parameters.

use std::fmt;

use crate::error::TypeError;

/// Parameters of the affine mapping between quantized integers and real
/// values: `real = scale * (quantized - zero_point)`.
///
/// Field order and widths are part of the C-compatible layout (`float`
/// then `int32_t`) and must not change. A `scale` of zero or a negative
/// scale is representable; callers that need the parameters to be
/// meaningful run [`QuantizationParams::validate`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct QuantizationParams {
    /// Step size between adjacent quantized values.
    pub scale: f32,
    /// Quantized value that maps to real zero.
    pub zero_point: i32,
}

impl QuantizationParams {
    /// Creates parameters from a scale and zero point.
    pub fn new(scale: f32, zero_point: i32) -> Self {
        Self { scale, zero_point }
    }

    /// Maps a quantized value to its real value.
    pub fn dequantize(self, quantized: i32) -> f32 {
        self.scale * (f64::from(quantized) - f64::from(self.zero_point)) as f32
    }

    /// Maps a real value to the nearest quantized value.
    ///
    /// The intermediate runs in `f64` and the result saturates at the
    /// `i32` bounds, so a zero scale or an out-of-range input cannot
    /// panic. A NaN input maps to the zero point.
    pub fn quantize(self, real: f32) -> i32 {
        let q = (f64::from(real) / f64::from(self.scale)).round() + f64::from(self.zero_point);
        if q.is_nan() {
            self.zero_point
        } else {
            q.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
        }
    }

    /// Checks that the scale is finite and non-negative.
    pub fn validate(self) -> Result<(), TypeError> {
        if self.scale.is_finite() && self.scale >= 0.0 {
            Ok(())
        } else {
            Err(TypeError::InvalidScale { scale: self.scale })
        }
    }
}

impl fmt::Display for QuantizationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantizationParams {{ scale: {}, zero_point: {} }}",
            self.scale, self.zero_point
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_on_zero() {
        let params = QuantizationParams::default();
        assert_eq!(params.scale, 0.0);
        assert_eq!(params.zero_point, 0);
        assert_eq!(params.dequantize(0), 0.0);
    }

    #[test]
    fn copy_round_trip() {
        let params = QuantizationParams::new(0.5, 128);
        let copy = params;
        assert_eq!(copy.scale, 0.5);
        assert_eq!(copy.zero_point, 128);
        assert_eq!(copy, params);
    }

    #[test]
    fn dequantize_affine_mapping() {
        let params = QuantizationParams::new(0.5, 128);
        assert_eq!(params.dequantize(128), 0.0);
        assert_eq!(params.dequantize(130), 1.0);
        assert_eq!(params.dequantize(0), -64.0);
    }

    #[test]
    fn quantize_inverts_dequantize() {
        let params = QuantizationParams::new(0.5, 128);
        for q in [0, 1, 127, 128, 200, 255] {
            assert_eq!(params.quantize(params.dequantize(q)), q);
        }
    }

    #[test]
    fn quantize_rounds_to_nearest() {
        let params = QuantizationParams::new(1.0, 0);
        assert_eq!(params.quantize(0.4), 0);
        assert_eq!(params.quantize(0.6), 1);
        assert_eq!(params.quantize(-2.6), -3);
    }

    #[test]
    fn quantize_saturates_instead_of_panicking() {
        let params = QuantizationParams::new(0.0, 3);
        assert_eq!(params.quantize(1.0), i32::MAX);
        assert_eq!(params.quantize(-1.0), i32::MIN);
        // 0.0 / 0.0 is NaN; fall back to the zero point.
        assert_eq!(params.quantize(0.0), 3);

        let tiny = QuantizationParams::new(f32::MIN_POSITIVE, 0);
        assert_eq!(tiny.quantize(f32::MAX), i32::MAX);
        assert_eq!(tiny.quantize(f32::MIN), i32::MIN);
    }

    #[test]
    fn dequantize_extreme_values_stay_finite_math() {
        let params = QuantizationParams::new(1.0, 128);
        // i32::MIN - 128 overflows in integer math; the f64 path must not.
        assert_eq!(params.dequantize(i32::MIN), i32::MIN as f32 - 128.0);
    }

    #[test]
    fn validate_accepts_non_negative_finite_scales() {
        assert!(QuantizationParams::new(0.0, 0).validate().is_ok());
        assert!(QuantizationParams::new(0.5, 128).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_scales() {
        for scale in [-0.5, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = QuantizationParams::new(scale, 0).validate().unwrap_err();
            assert!(matches!(err, TypeError::InvalidScale { .. }));
        }
    }

    #[test]
    fn display() {
        let params = QuantizationParams::new(0.5, 128);
        assert_eq!(
            format!("{params}"),
            "QuantizationParams { scale: 0.5, zero_point: 128 }"
        );
    }
}
