use crate::error::KernelError;
use crate::kernel::activation::Activation;
use crate::kernel::padding::Padding;

/// Immutable configuration consumed by one pooling invocation.
///
/// The configuration is passed as a single value object so that call sites
/// and validation stay centralized. The constructing layer is expected to
/// validate it, but the kernel independently re-validates before computing.
///
/// # Fields
///
/// - `filter` - Size of the pooling window as (height, width)
/// - `strides` - Stride of the pooling operation as (vertical step, horizontal step)
/// - `padding` - Padding policy, `Valid` or `Same`
/// - `activation` - Fused activation applied to each output sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolingConfig {
    pub filter: (usize, usize),
    pub strides: (usize, usize),
    pub padding: Padding,
    pub activation: Activation,
}

impl PoolingConfig {
    /// Creates a new pooling configuration.
    ///
    /// # Parameters
    ///
    /// - `filter` - Size of the pooling window as (height, width)
    /// - `strides` - Stride of the pooling operation as (vertical step, horizontal step)
    /// - `padding` - Padding policy
    /// - `activation` - Fused activation
    ///
    /// # Returns
    ///
    /// * `PoolingConfig` - A new configuration value
    pub fn new(
        filter: (usize, usize),
        strides: (usize, usize),
        padding: Padding,
        activation: Activation,
    ) -> Self {
        PoolingConfig {
            filter,
            strides,
            padding,
            activation,
        }
    }

    /// Checks that filter dimensions and strides are at least 1.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - if the configuration is usable
    /// - `Err(KernelError::ConfigError)` - if any filter dimension or stride is zero
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.filter.0 == 0 || self.filter.1 == 0 {
            return Err(KernelError::ConfigError(format!(
                "Filter dimensions must be positive, got ({}, {})",
                self.filter.0, self.filter.1
            )));
        }
        if self.strides.0 == 0 || self.strides.1 == 0 {
            return Err(KernelError::ConfigError(format!(
                "Strides must be positive, got ({}, {})",
                self.strides.0, self.strides.1
            )));
        }
        Ok(())
    }
}
