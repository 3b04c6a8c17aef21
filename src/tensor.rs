use crate::error::KernelError;
use ndarray::{ArrayViewD, ArrayViewMutD};

/// Storage representation of a tensor's elements.
///
/// The kernel supports one real-valued representation and two 8-bit
/// affine-quantized representations. The set is closed: dispatch over it
/// happens once per invocation, never per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// 32-bit IEEE floating point, no quantization metadata.
    Float32,
    /// Unsigned 8-bit affine-quantized, stored range \[0, 255\].
    Uint8,
    /// Signed 8-bit affine-quantized, stored range \[-128, 127\].
    Int8,
}

/// Affine quantization parameters attached to an 8-bit tensor.
///
/// The mapping between stored and real values is
/// `real = scale * (stored - zero_point)`.
///
/// # Fields
///
/// - `scale` - Size of one quantization step; must be positive
/// - `zero_point` - Stored value that represents real zero; must lie within the representable range of the element kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantParams {
    pub scale: f32,
    pub zero_point: i32,
}

impl QuantParams {
    /// Derives quantization parameters from a real-valued range.
    ///
    /// The scale spreads `[min, max]` across the 256 stored values of an
    /// 8-bit kind, and the zero point is anchored at the kind's minimum
    /// stored value, the same derivation the quantizing front end uses when
    /// it assigns ranges to tensors.
    ///
    /// # Parameters
    ///
    /// - `kind` - Element kind the parameters are for
    /// - `min` - Smallest representable real value
    /// - `max` - Largest representable real value, must be greater than `min`
    ///
    /// # Returns
    ///
    /// - `Ok(QuantParams)` - Parameters mapping `[min, max]` onto the stored range; for `Float32` the identity parameters (scale 1, zero point 0)
    /// - `Err(KernelError::ConfigError)` - if the range is empty, reversed, or not finite
    pub fn from_range(kind: ElementKind, min: f32, max: f32) -> Result<Self, KernelError> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(KernelError::ConfigError(format!(
                "Quantization range must be finite with max > min, got [{}, {}]",
                min, max
            )));
        }

        let params = match kind {
            ElementKind::Float32 => QuantParams {
                scale: 1.0,
                zero_point: 0,
            },
            ElementKind::Uint8 => {
                let scale = (max - min) / 255.0;
                QuantParams {
                    scale,
                    zero_point: (-min / scale).round() as i32,
                }
            }
            ElementKind::Int8 => {
                let scale = (max - min) / 255.0;
                QuantParams {
                    scale,
                    zero_point: -128 + (-min / scale).round() as i32,
                }
            }
        };
        Ok(params)
    }
}

/// A read-only handle over a 4-dimensional tensor indexed as
/// (batch, height, width, channel).
///
/// The backing storage is created and owned by the caller; the kernel never
/// allocates, resizes, or frees it. Quantized variants carry the
/// [`QuantParams`] that relate stored values to real values. Rank is carried
/// dynamically and validated to be exactly 4 when the kernel runs.
pub enum TensorView<'a> {
    Float32(ArrayViewD<'a, f32>),
    Uint8 {
        data: ArrayViewD<'a, u8>,
        quant: QuantParams,
    },
    Int8 {
        data: ArrayViewD<'a, i8>,
        quant: QuantParams,
    },
}

impl<'a> TensorView<'a> {
    /// Wraps a float32 view.
    pub fn from_float32(data: ArrayViewD<'a, f32>) -> Self {
        TensorView::Float32(data)
    }

    /// Wraps an unsigned 8-bit view together with its quantization parameters.
    pub fn from_uint8(data: ArrayViewD<'a, u8>, quant: QuantParams) -> Self {
        TensorView::Uint8 { data, quant }
    }

    /// Wraps a signed 8-bit view together with its quantization parameters.
    pub fn from_int8(data: ArrayViewD<'a, i8>, quant: QuantParams) -> Self {
        TensorView::Int8 { data, quant }
    }

    /// Returns the tensor shape as a slice of dimension sizes.
    pub fn shape(&self) -> &[usize] {
        match self {
            TensorView::Float32(data) => data.shape(),
            TensorView::Uint8 { data, .. } => data.shape(),
            TensorView::Int8 { data, .. } => data.shape(),
        }
    }

    /// Returns the storage representation of this tensor's elements.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            TensorView::Float32(_) => ElementKind::Float32,
            TensorView::Uint8 { .. } => ElementKind::Uint8,
            TensorView::Int8 { .. } => ElementKind::Int8,
        }
    }

    /// Returns the quantization parameters, or `None` for float32 tensors.
    pub fn quant_params(&self) -> Option<QuantParams> {
        match self {
            TensorView::Float32(_) => None,
            TensorView::Uint8 { quant, .. } => Some(*quant),
            TensorView::Int8 { quant, .. } => Some(*quant),
        }
    }
}

/// A write-only handle over a 4-dimensional output tensor, the mutable
/// counterpart of [`TensorView`].
///
/// On a successful kernel invocation every element is written exactly once;
/// on a validation failure nothing is written.
pub enum TensorViewMut<'a> {
    Float32(ArrayViewMutD<'a, f32>),
    Uint8 {
        data: ArrayViewMutD<'a, u8>,
        quant: QuantParams,
    },
    Int8 {
        data: ArrayViewMutD<'a, i8>,
        quant: QuantParams,
    },
}

impl<'a> TensorViewMut<'a> {
    /// Wraps a mutable float32 view.
    pub fn from_float32(data: ArrayViewMutD<'a, f32>) -> Self {
        TensorViewMut::Float32(data)
    }

    /// Wraps a mutable unsigned 8-bit view together with its quantization parameters.
    pub fn from_uint8(data: ArrayViewMutD<'a, u8>, quant: QuantParams) -> Self {
        TensorViewMut::Uint8 { data, quant }
    }

    /// Wraps a mutable signed 8-bit view together with its quantization parameters.
    pub fn from_int8(data: ArrayViewMutD<'a, i8>, quant: QuantParams) -> Self {
        TensorViewMut::Int8 { data, quant }
    }

    /// Returns the tensor shape as a slice of dimension sizes.
    pub fn shape(&self) -> &[usize] {
        match self {
            TensorViewMut::Float32(data) => data.shape(),
            TensorViewMut::Uint8 { data, .. } => data.shape(),
            TensorViewMut::Int8 { data, .. } => data.shape(),
        }
    }

    /// Returns the storage representation of this tensor's elements.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            TensorViewMut::Float32(_) => ElementKind::Float32,
            TensorViewMut::Uint8 { .. } => ElementKind::Uint8,
            TensorViewMut::Int8 { .. } => ElementKind::Int8,
        }
    }

    /// Returns the quantization parameters, or `None` for float32 tensors.
    pub fn quant_params(&self) -> Option<QuantParams> {
        match self {
            TensorViewMut::Float32(_) => None,
            TensorViewMut::Uint8 { quant, .. } => Some(*quant),
            TensorViewMut::Int8 { quant, .. } => Some(*quant),
        }
    }
}
