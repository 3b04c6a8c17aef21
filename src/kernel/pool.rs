use ndarray::{ArrayViewD, ArrayViewMutD};

use crate::error::KernelError;
use crate::kernel::config::PoolingConfig;
use crate::kernel::geometry::{ResolvedGeometry, resolve_geometry};
use crate::kernel::quantize::Sample;
use crate::tensor::{QuantParams, TensorView, TensorViewMut};

/// Performs 2D average pooling over the input tensor, writing one sample per
/// output position and channel.
///
/// For each output position the window of input samples is clipped to the
/// input bounds and the mean of the in-bounds samples is taken: positions
/// padded out under `Same` padding contribute neither value nor count. The
/// fused activation is applied to the mean, and for quantized tensors the
/// result is requantized with saturation to the output's parameters.
///
/// Both tensors are indexed as (batch, height, width, channel) and must use
/// the same element kind. On any validation failure the output tensor is
/// left unmodified.
///
/// # Parameters
///
/// - `input` - Read-only 4D input tensor view
/// - `output` - Write-only 4D output tensor view; its spatial dimensions must match the geometry resolved from the input shape and configuration
/// - `config` - Filter size, strides, padding policy and fused activation
///
/// # Returns
///
/// - `Ok(())` - if every output element was written
/// - `Err(KernelError)` - if validation failed; see [`KernelError`] for the taxonomy
///
/// # Example
/// ```rust
/// use micropool::prelude::*;
/// use ndarray::Array4;
///
/// // One batch, one channel, a 2x4 image pooled with a 2x2 window at stride 2
/// let input =
///     Array4::from_shape_vec((1, 2, 4, 1), vec![0., 6., 2., 4., 3., 2., 10., 7.]).unwrap();
/// let mut output = Array4::<f32>::zeros((1, 1, 2, 1));
///
/// let config = PoolingConfig::new((2, 2), (2, 2), Padding::Valid, Activation::None);
/// average_pool_2d(
///     &TensorView::from_float32(input.view().into_dyn()),
///     &mut TensorViewMut::from_float32(output.view_mut().into_dyn()),
///     &config,
/// )
/// .unwrap();
///
/// // Each output is the mean of one fully-covered 2x2 window
/// assert_eq!(output[[0, 0, 0, 0]], 2.75);
/// assert_eq!(output[[0, 0, 1, 0]], 5.75);
/// ```
pub fn average_pool_2d(
    input: &TensorView<'_>,
    output: &mut TensorViewMut<'_>,
    config: &PoolingConfig,
) -> Result<(), KernelError> {
    run(PoolKind::Average, input, output, config)
}

/// Performs 2D max pooling over the input tensor, writing one sample per
/// output position and channel.
///
/// For each output position the maximum is taken over the in-bounds samples
/// of the window; positions padded out under `Same` padding are excluded
/// rather than treated as zero. The fused activation is applied to the
/// maximum, and for quantized tensors the result is requantized with
/// saturation to the output's parameters.
///
/// Validation, tensor layout and error behavior match [`average_pool_2d`].
///
/// # Parameters
///
/// - `input` - Read-only 4D input tensor view
/// - `output` - Write-only 4D output tensor view
/// - `config` - Filter size, strides, padding policy and fused activation
///
/// # Returns
///
/// - `Ok(())` - if every output element was written
/// - `Err(KernelError)` - if validation failed
pub fn max_pool_2d(
    input: &TensorView<'_>,
    output: &mut TensorViewMut<'_>,
    config: &PoolingConfig,
) -> Result<(), KernelError> {
    run(PoolKind::Max, input, output, config)
}

/// Reduction applied inside each pooling window. Selected by the public
/// entry points and resolved once per invocation, so the per-element loops
/// stay branch-free for a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolKind {
    Average,
    Max,
}

fn run(
    kind: PoolKind,
    input: &TensorView<'_>,
    output: &mut TensorViewMut<'_>,
    config: &PoolingConfig,
) -> Result<(), KernelError> {
    let geometry = validate(input, output, config)?;

    let identity = QuantParams {
        scale: 1.0,
        zero_point: 0,
    };

    match (input, output) {
        (TensorView::Float32(input), TensorViewMut::Float32(output)) => {
            dispatch(kind, input, identity, output, identity, &geometry, config);
        }
        (
            TensorView::Uint8 {
                data: input,
                quant: input_quant,
            },
            TensorViewMut::Uint8 {
                data: output,
                quant: output_quant,
            },
        ) => {
            dispatch(
                kind,
                input,
                *input_quant,
                output,
                *output_quant,
                &geometry,
                config,
            );
        }
        (
            TensorView::Int8 {
                data: input,
                quant: input_quant,
            },
            TensorViewMut::Int8 {
                data: output,
                quant: output_quant,
            },
        ) => {
            dispatch(
                kind,
                input,
                *input_quant,
                output,
                *output_quant,
                &geometry,
                config,
            );
        }
        _ => {
            return Err(KernelError::ConfigError(
                "Input and output tensors must use the same element kind".to_string(),
            ));
        }
    }

    Ok(())
}

/// Runs every check from the error taxonomy before any output write, and
/// resolves the output geometry on success.
fn validate(
    input: &TensorView<'_>,
    output: &TensorViewMut<'_>,
    config: &PoolingConfig,
) -> Result<ResolvedGeometry, KernelError> {
    config.validate()?;

    let input_shape = input.shape();
    let output_shape = output.shape();

    if input_shape.len() != 4 {
        return Err(KernelError::ConfigError(format!(
            "Input tensor must be 4-dimensional [batch, height, width, channels], got rank {}",
            input_shape.len()
        )));
    }
    if output_shape.len() != 4 {
        return Err(KernelError::ConfigError(format!(
            "Output tensor must be 4-dimensional [batch, height, width, channels], got rank {}",
            output_shape.len()
        )));
    }
    if input_shape.contains(&0) || output_shape.contains(&0) {
        return Err(KernelError::ConfigError(format!(
            "Tensor dimensions must be positive, got input {:?} and output {:?}",
            input_shape, output_shape
        )));
    }

    if input.element_kind() != output.element_kind() {
        return Err(KernelError::ConfigError(format!(
            "Input and output tensors must use the same element kind, got {:?} and {:?}",
            input.element_kind(),
            output.element_kind()
        )));
    }

    if input_shape[0] != output_shape[0] {
        return Err(KernelError::ConfigError(format!(
            "Batch counts of input and output must match, got {} and {}",
            input_shape[0], output_shape[0]
        )));
    }
    if input_shape[3] != output_shape[3] {
        return Err(KernelError::ConfigError(format!(
            "Channel counts of input and output must match, got {} and {}",
            input_shape[3], output_shape[3]
        )));
    }

    for quant in [input.quant_params(), output.quant_params()]
        .into_iter()
        .flatten()
    {
        if !(quant.scale.is_finite() && quant.scale > 0.0) {
            return Err(KernelError::ConfigError(format!(
                "Quantization scale must be positive and finite, got {}",
                quant.scale
            )));
        }
    }

    let geometry = resolve_geometry(input_shape[1], input_shape[2], config)?;
    if output_shape[1] != geometry.output_height || output_shape[2] != geometry.output_width {
        return Err(KernelError::ShapeError(format!(
            "Output spatial dimensions ({}, {}) do not match the resolved geometry ({}, {})",
            output_shape[1], output_shape[2], geometry.output_height, geometry.output_width
        )));
    }

    Ok(geometry)
}

fn dispatch<T: Sample>(
    kind: PoolKind,
    input: &ArrayViewD<'_, T>,
    input_quant: QuantParams,
    output: &mut ArrayViewMutD<'_, T>,
    output_quant: QuantParams,
    geometry: &ResolvedGeometry,
    config: &PoolingConfig,
) {
    match kind {
        PoolKind::Average => average_sweep(
            input,
            input_quant,
            output,
            output_quant,
            geometry,
            config,
        ),
        PoolKind::Max => max_sweep(
            input,
            input_quant,
            output,
            output_quant,
            geometry,
            config,
        ),
    }
}

/// One full pass over the output tensor with the sum-then-divide reduction.
///
/// Accumulation runs in the `f32` real domain: quantized samples are
/// dequantized on read and the single scalar mean is requantized on write,
/// so the running sum is always wider than the stored representation. Only
/// scalar locals are used inside the loop.
fn average_sweep<T: Sample>(
    input: &ArrayViewD<'_, T>,
    input_quant: QuantParams,
    output: &mut ArrayViewMutD<'_, T>,
    output_quant: QuantParams,
    geometry: &ResolvedGeometry,
    config: &PoolingConfig,
) {
    let input_shape = input.shape();
    let batch = input_shape[0];
    let input_height = input_shape[1];
    let input_width = input_shape[2];
    let channels = input_shape[3];

    let (stride_h, stride_w) = config.strides;

    for b in 0..batch {
        for oy in 0..geometry.output_height {
            let y_origin = (oy * stride_h) as isize - geometry.pad_top as isize;
            let (fy_start, fy_end) = window_bounds(y_origin, input_height, config.filter.0);

            for ox in 0..geometry.output_width {
                let x_origin = (ox * stride_w) as isize - geometry.pad_left as isize;
                let (fx_start, fx_end) = window_bounds(x_origin, input_width, config.filter.1);

                for c in 0..channels {
                    let mut sum = 0.0f32;
                    let mut count = 0usize;

                    for fy in fy_start..fy_end {
                        let iy = (y_origin + fy as isize) as usize;
                        for fx in fx_start..fx_end {
                            let ix = (x_origin + fx as isize) as usize;
                            sum += input[[b, iy, ix, c]].to_real(input_quant);
                            count += 1;
                        }
                    }

                    // The resolver guarantees every window overlaps the
                    // input, so count >= 1 here.
                    let mean = sum / count as f32;
                    let activated = config.activation.apply(mean);
                    output[[b, oy, ox, c]] = T::from_real(activated, output_quant);
                }
            }
        }
    }
}

/// One full pass over the output tensor with the max-compare reduction,
/// seeded from negative infinity so the first in-bounds sample always wins.
fn max_sweep<T: Sample>(
    input: &ArrayViewD<'_, T>,
    input_quant: QuantParams,
    output: &mut ArrayViewMutD<'_, T>,
    output_quant: QuantParams,
    geometry: &ResolvedGeometry,
    config: &PoolingConfig,
) {
    let input_shape = input.shape();
    let batch = input_shape[0];
    let input_height = input_shape[1];
    let input_width = input_shape[2];
    let channels = input_shape[3];

    let (stride_h, stride_w) = config.strides;

    for b in 0..batch {
        for oy in 0..geometry.output_height {
            let y_origin = (oy * stride_h) as isize - geometry.pad_top as isize;
            let (fy_start, fy_end) = window_bounds(y_origin, input_height, config.filter.0);

            for ox in 0..geometry.output_width {
                let x_origin = (ox * stride_w) as isize - geometry.pad_left as isize;
                let (fx_start, fx_end) = window_bounds(x_origin, input_width, config.filter.1);

                for c in 0..channels {
                    let mut max_val = f32::NEG_INFINITY;

                    for fy in fy_start..fy_end {
                        let iy = (y_origin + fy as isize) as usize;
                        for fx in fx_start..fx_end {
                            let ix = (x_origin + fx as isize) as usize;
                            max_val = max_val.max(input[[b, iy, ix, c]].to_real(input_quant));
                        }
                    }

                    let activated = config.activation.apply(max_val);
                    output[[b, oy, ox, c]] = T::from_real(activated, output_quant);
                }
            }
        }
    }
}

/// Filter offsets whose input coordinates fall inside `[0, input_dim)`,
/// returned as a half-open range over the filter axis.
fn window_bounds(origin: isize, input_dim: usize, filter_dim: usize) -> (usize, usize) {
    let start = (-origin).max(0) as usize;
    let end = (input_dim as isize - origin).min(filter_dim as isize).max(0) as usize;
    (start, end)
}
