/// Defines the padding policy used when sliding the pooling window.
///
/// The padding policy determines how output geometry is derived from input
/// geometry:
/// - `Valid`: no padding is applied, which reduces the output dimensions.
/// - `Same`: the output covers `ceil(input / stride)` positions; the window
///   may overlap positions outside the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// No padding is applied. The window is only placed where it fully
    /// overlaps the input, resulting in an output with reduced dimensions.
    Valid,

    /// The window may extend past the input borders so that the output has
    /// `ceil(input / stride)` positions along each spatial axis. Out-of-bounds
    /// positions are excluded from the reduction rather than treated as zero,
    /// so no padding values are ever materialized.
    Same,
}
