pub use crate::error::KernelError;
pub use crate::kernel::activation::Activation;
pub use crate::kernel::config::PoolingConfig;
pub use crate::kernel::geometry::{ResolvedGeometry, resolve_geometry};
pub use crate::kernel::padding::Padding;
pub use crate::kernel::pool::{average_pool_2d, max_pool_2d};
pub use crate::kernel::quantize::{dequantize, quantize_i8, quantize_u8};
pub use crate::tensor::{ElementKind, QuantParams, TensorView, TensorViewMut};
