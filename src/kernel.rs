/// Module that contains the fused activation applied to each output sample
pub mod activation;
/// Module that contains the immutable pooling configuration value object
pub mod config;
/// Module that contains the shape and padding resolver
pub mod geometry;
/// Module that contains the padding policy enum
pub mod padding;
/// Module that contains the window sweep and the pooling entry points
pub mod pool;
/// Module that contains the affine quantization adapter
pub mod quantize;

pub use activation::*;
pub use config::*;
pub use geometry::*;
pub use padding::*;
pub use pool::*;
pub use quantize::{dequantize, quantize_i8, quantize_u8};
