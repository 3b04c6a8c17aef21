use crate::tensor::QuantParams;

/// Maps a stored 8-bit value to its real-valued equivalent.
///
/// Implements the affine mapping `real = scale * (stored - zero_point)`.
///
/// # Parameters
///
/// - `stored` - The stored integer value, widened to `i32`
/// - `quant` - The quantization parameters of the tensor the value came from
///
/// # Returns
///
/// * `f32` - The real value the stored integer represents
pub fn dequantize(stored: i32, quant: QuantParams) -> f32 {
    quant.scale * (stored - quant.zero_point) as f32
}

/// Maps a real value to its unsigned 8-bit stored representation.
///
/// Computes `round(real / scale) + zero_point` with ties rounded half away
/// from zero, then saturates to \[0, 255\]. Out-of-range results are clamped,
/// never wrapped; saturation is a normal, silent part of correct operation.
///
/// # Parameters
///
/// - `real` - The real value to store
/// - `quant` - The quantization parameters of the destination tensor
///
/// # Returns
///
/// * `u8` - The saturated stored value
pub fn quantize_u8(real: f32, quant: QuantParams) -> u8 {
    // An extreme input/output scale ratio can push the rounded value past
    // any 32-bit bound; widen and saturate so the clamp still lands on the
    // correct end of the range.
    let stored = ((real / quant.scale).round() as i64).saturating_add(quant.zero_point as i64);
    stored.clamp(u8::MIN as i64, u8::MAX as i64) as u8
}

/// Maps a real value to its signed 8-bit stored representation.
///
/// Computes `round(real / scale) + zero_point` with ties rounded half away
/// from zero, then saturates to \[-128, 127\]. Out-of-range results are
/// clamped, never wrapped.
///
/// # Parameters
///
/// - `real` - The real value to store
/// - `quant` - The quantization parameters of the destination tensor
///
/// # Returns
///
/// * `i8` - The saturated stored value
pub fn quantize_i8(real: f32, quant: QuantParams) -> i8 {
    let stored = ((real / quant.scale).round() as i64).saturating_add(quant.zero_point as i64);
    stored.clamp(i8::MIN as i64, i8::MAX as i64) as i8
}

/// Bridges an element type to the real-valued domain the reduction runs in.
///
/// The three storage types share one window-sweep skeleton; this trait is the
/// seam that keeps the sweep generic while the per-kind conversion is chosen
/// once per invocation.
pub(crate) trait Sample: Copy {
    /// Converts a stored sample to the real-value domain.
    fn to_real(self, quant: QuantParams) -> f32;

    /// Converts a real-valued result back to the stored representation,
    /// saturating where the storage type requires it.
    fn from_real(real: f32, quant: QuantParams) -> Self;
}

/// For float tensors the adapter is the identity; the quantization parameters
/// are never consulted.
impl Sample for f32 {
    fn to_real(self, _quant: QuantParams) -> f32 {
        self
    }

    fn from_real(real: f32, _quant: QuantParams) -> Self {
        real
    }
}

impl Sample for u8 {
    fn to_real(self, quant: QuantParams) -> f32 {
        dequantize(self as i32, quant)
    }

    fn from_real(real: f32, quant: QuantParams) -> Self {
        quantize_u8(real, quant)
    }
}

impl Sample for i8 {
    fn to_real(self, quant: QuantParams) -> f32 {
        dequantize(self as i32, quant)
    }

    fn from_real(real: f32, quant: QuantParams) -> Self {
        quantize_i8(real, quant)
    }
}
