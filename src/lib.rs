/// Module `error` contains the error types returned by kernel invocations.
///
/// Every failure path returns a typed [`KernelError`] value before the first
/// output write; the kernel never panics on bad input and never leaves the
/// output tensor partially written.
pub mod error;

/// Module `tensor` contains the caller-owned tensor handles consumed by the
/// kernel.
///
/// A tensor is a contiguous 4-dimensional array indexed as
/// (batch, height, width, channel), wrapped in a read-only [`TensorView`] or
/// write-only [`TensorViewMut`] together with its element kind and, for 8-bit
/// kinds, affine quantization parameters.
///
/// [`TensorView`]: tensor::TensorView
/// [`TensorViewMut`]: tensor::TensorViewMut
pub mod tensor;

/// Module `kernel` contains the 2D spatial pooling kernel.
///
/// The kernel combines shape/padding arithmetic, a windowed reduction
/// (sum-then-divide for average, max-compare for max), quantization-aware
/// numeric semantics, and fused output activations, applied consistently
/// across float32, uint8 and int8 tensors.
///
/// # Components
///
/// - `geometry` - resolves output dimensions and leading padding offsets for the `Valid` and `Same` policies
/// - `pool` - the [`average_pool_2d`] and [`max_pool_2d`] entry points and the window sweep behind them
/// - `quantize` - the affine scale/zero-point mapping with saturating requantization
/// - `activation` - the closed set of fused clamping transforms
/// - `config` - the immutable [`PoolingConfig`] value object
/// - `padding` - the [`Padding`] policy enum
///
/// # Concurrency
///
/// An invocation is synchronous and single-threaded, holds no shared mutable
/// state, performs no allocation inside the sweep, and may run concurrently
/// from independent threads provided each invocation is given disjoint
/// tensor views.
///
/// [`average_pool_2d`]: kernel::pool::average_pool_2d
/// [`max_pool_2d`]: kernel::pool::max_pool_2d
/// [`PoolingConfig`]: kernel::config::PoolingConfig
/// [`Padding`]: kernel::padding::Padding
pub mod kernel;

/// A convenience module that re-exports the most commonly used types and
/// functions from this crate.
///
/// # Example
/// ```rust
/// use micropool::prelude::*;
/// use ndarray::Array4;
///
/// let input =
///     Array4::from_shape_vec((1, 2, 4, 1), vec![0., 6., 2., 4., 3., 2., 10., 7.]).unwrap();
/// let mut output = Array4::<f32>::zeros((1, 2, 4, 1));
///
/// let config = PoolingConfig::new((2, 2), (1, 1), Padding::Same, Activation::None);
/// max_pool_2d(
///     &TensorView::from_float32(input.view().into_dyn()),
///     &mut TensorViewMut::from_float32(output.view_mut().into_dyn()),
///     &config,
/// )
/// .unwrap();
///
/// assert_eq!(output[[0, 0, 0, 0]], 6.0);
/// ```
pub mod prelude;

pub use error::KernelError;
