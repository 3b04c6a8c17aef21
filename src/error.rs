/// Error types that can occur during a kernel invocation
///
/// # Variants
///
/// - `ConfigError` - indicates the pooling configuration or the tensor metadata does not meet the expected format or validation rules
/// - `ShapeError` - indicates that no valid output geometry exists for the given input shape, or that the supplied output view does not match the resolved geometry
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    ConfigError(String),
    ShapeError(String),
}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            KernelError::ShapeError(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

/// Implements the standard error trait for KernelError
impl std::error::Error for KernelError {}
