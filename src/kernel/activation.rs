/// Fused activation enum, supporting the closed set of clamping transforms
/// applied to a pooling result before it is written out.
///
/// The activation runs in the real-value domain: after the reduction and, for
/// quantized tensors, after dequantization but before requantization, so that
/// activation clamping and quantization rounding compose in one defined order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Identity; the reduction result passes through unchanged.
    None,
    /// `max(0, x)`
    Relu,
    /// `clamp(x, -1, 1)`
    ReluN1To1,
    /// `clamp(x, 0, 6)`
    Relu6,
}

impl Activation {
    /// Applies the activation to a single real-valued sample.
    ///
    /// Each variant is idempotent: reapplying it to its own output is a
    /// no-op.
    ///
    /// # Parameters
    ///
    /// * `x` - The reduction result in the real-value domain
    ///
    /// # Returns
    ///
    /// * `f32` - The activated value
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::None => x,
            Activation::Relu => x.max(0.0),
            Activation::ReluN1To1 => x.clamp(-1.0, 1.0),
            Activation::Relu6 => x.clamp(0.0, 6.0),
        }
    }
}
