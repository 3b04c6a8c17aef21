use crate::error::KernelError;
use crate::kernel::config::PoolingConfig;
use crate::kernel::padding::Padding;

/// Output geometry derived from the input shape and configuration.
///
/// Computed once per invocation and reused across all output positions. The
/// padding offsets are the leading (top/left) padding only; trailing padding
/// is implicit and never materialized, since the window walk simply clips to
/// the input bounds.
///
/// # Fields
///
/// - `output_height` - Number of output rows
/// - `output_width` - Number of output columns
/// - `pad_top` - Rows of implicit padding before the first input row
/// - `pad_left` - Columns of implicit padding before the first input column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGeometry {
    pub output_height: usize,
    pub output_width: usize,
    pub pad_top: usize,
    pub pad_left: usize,
}

/// Computes the output spatial dimensions and leading padding offsets for a
/// pooling invocation.
///
/// For `Valid` padding: `output = (input - filter) / stride + 1` with zero
/// padding offsets. For `Same` padding: `output = ceil(input / stride)`,
/// total padding along an axis is `max(0, (output - 1) * stride + filter - input)`
/// and the leading offset is half of it, rounded down.
///
/// This function is pure: it has no side effects and depends only on its
/// arguments.
///
/// # Parameters
///
/// - `input_height` - Input rows
/// - `input_width` - Input columns
/// - `config` - The pooling configuration supplying filter, strides and padding policy
///
/// # Returns
///
/// - `Ok(ResolvedGeometry)` - the derived output geometry
/// - `Err(KernelError::ShapeError)` - if `Valid` padding is requested and an input dimension is smaller than the filter, so no valid window exists
pub fn resolve_geometry(
    input_height: usize,
    input_width: usize,
    config: &PoolingConfig,
) -> Result<ResolvedGeometry, KernelError> {
    let (filter_h, filter_w) = config.filter;
    let (stride_h, stride_w) = config.strides;

    match config.padding {
        Padding::Valid => {
            if input_height < filter_h || input_width < filter_w {
                return Err(KernelError::ShapeError(format!(
                    "Input spatial dimensions ({}, {}) are smaller than the filter ({}, {}) under valid padding",
                    input_height, input_width, filter_h, filter_w
                )));
            }
            Ok(ResolvedGeometry {
                output_height: (input_height - filter_h) / stride_h + 1,
                output_width: (input_width - filter_w) / stride_w + 1,
                pad_top: 0,
                pad_left: 0,
            })
        }
        Padding::Same => {
            let output_height = input_height.div_ceil(stride_h);
            let output_width = input_width.div_ceil(stride_w);
            Ok(ResolvedGeometry {
                output_height,
                output_width,
                pad_top: total_padding(input_height, filter_h, stride_h, output_height) / 2,
                pad_left: total_padding(input_width, filter_w, stride_w, output_width) / 2,
            })
        }
    }
}

/// Total implicit padding along one axis under `Same` padding.
fn total_padding(input: usize, filter: usize, stride: usize, output: usize) -> usize {
    ((output - 1) * stride + filter).saturating_sub(input)
}
