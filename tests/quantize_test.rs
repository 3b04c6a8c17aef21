use approx::{assert_abs_diff_eq, assert_relative_eq};
use micropool::prelude::*;

#[test]
fn test_from_range_uint8_params() {
    let quant = QuantParams::from_range(ElementKind::Uint8, -15.9375, 15.9375).unwrap();
    assert_relative_eq!(quant.scale, 0.125);
    assert_eq!(quant.zero_point, 128);
}

#[test]
fn test_from_range_int8_params() {
    // An asymmetric range placing real zero exactly at stored zero
    let quant = QuantParams::from_range(ElementKind::Int8, -15.9375, 15.8130).unwrap();
    assert_relative_eq!(quant.scale, 31.7505 / 255.0, max_relative = 1e-6);
    assert_eq!(quant.zero_point, 0);

    // A non-negative range anchors the zero point at the stored minimum
    let quant = QuantParams::from_range(ElementKind::Int8, 0.0, 15.9375).unwrap();
    assert_relative_eq!(quant.scale, 0.0625);
    assert_eq!(quant.zero_point, -128);
}

#[test]
fn test_from_range_rejects_degenerate_range() {
    // An empty range would produce a zero scale; it must fail here rather
    // than inside a later kernel invocation
    let result = QuantParams::from_range(ElementKind::Uint8, 1.0, 1.0);
    assert!(matches!(result, Err(KernelError::ConfigError(_))));

    let result = QuantParams::from_range(ElementKind::Int8, 2.0, -2.0);
    assert!(matches!(result, Err(KernelError::ConfigError(_))));

    let result = QuantParams::from_range(ElementKind::Uint8, 0.0, f32::INFINITY);
    assert!(matches!(result, Err(KernelError::ConfigError(_))));
}

#[test]
fn test_from_range_float32_is_identity() {
    let quant = QuantParams::from_range(ElementKind::Float32, -1.0, 1.0).unwrap();
    assert_relative_eq!(quant.scale, 1.0);
    assert_eq!(quant.zero_point, 0);
}

#[test]
fn test_dequantize_affine_mapping() {
    let quant = QuantParams {
        scale: 0.125,
        zero_point: 128,
    };
    assert_relative_eq!(dequantize(128, quant), 0.0);
    assert_relative_eq!(dequantize(114, quant), -1.75);
    assert_relative_eq!(dequantize(255, quant), 15.875);
    assert_relative_eq!(dequantize(0, quant), -16.0);
}

#[test]
fn test_quantize_dequantize_round_trip_within_one_step() {
    let quant = QuantParams::from_range(ElementKind::Uint8, -15.9375, 15.9375).unwrap();
    for i in 0..=100 {
        let real = -15.0 + 0.3 * i as f32;
        let restored = dequantize(quantize_u8(real, quant) as i32, quant);
        assert_abs_diff_eq!(restored, real, epsilon = quant.scale);
    }

    let quant = QuantParams::from_range(ElementKind::Int8, -15.9375, 15.8130).unwrap();
    for i in 0..=100 {
        let real = -15.0 + 0.3 * i as f32;
        let restored = dequantize(quantize_i8(real, quant) as i32, quant);
        assert_abs_diff_eq!(restored, real, epsilon = quant.scale);
    }
}

#[test]
fn test_quantize_rounds_half_away_from_zero() {
    let quant = QuantParams {
        scale: 0.125,
        zero_point: 128,
    };
    // 0.0625 is exactly half a quantization step
    assert_eq!(quantize_u8(0.0625, quant), 129);
    assert_eq!(quantize_u8(-0.0625, quant), 127);

    let quant = QuantParams {
        scale: 0.125,
        zero_point: 0,
    };
    assert_eq!(quantize_i8(0.1875, quant), 2);
    assert_eq!(quantize_i8(-0.1875, quant), -2);
}

#[test]
fn test_quantize_saturates_instead_of_wrapping() {
    let quant = QuantParams {
        scale: 0.125,
        zero_point: 128,
    };
    assert_eq!(quantize_u8(1.0e6, quant), 255);
    assert_eq!(quantize_u8(-1.0e6, quant), 0);
    // Just past the representable range still clamps
    assert_eq!(quantize_u8(16.0, quant), 255);

    let quant = QuantParams {
        scale: 0.125,
        zero_point: 0,
    };
    assert_eq!(quantize_i8(1.0e6, quant), 127);
    assert_eq!(quantize_i8(-1.0e6, quant), -128);
    assert_eq!(quantize_i8(16.0, quant), 127);
    assert_eq!(quantize_i8(-16.125, quant), -128);
}

#[test]
fn test_quantize_extreme_scale_ratio_saturates() {
    // A tiny scale pushes round(real / scale) far beyond 32-bit range; the
    // result must still clamp to the matching end of the stored range
    let quant = QuantParams {
        scale: 1.0e-6,
        zero_point: 128,
    };
    assert_eq!(quantize_u8(1.0e30, quant), 255);
    assert_eq!(quantize_u8(-1.0e30, quant), 0);

    let quant = QuantParams {
        scale: 1.0e-6,
        zero_point: 0,
    };
    assert_eq!(quantize_i8(1.0e30, quant), 127);
    assert_eq!(quantize_i8(-1.0e30, quant), -128);
}
