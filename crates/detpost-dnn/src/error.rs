/// An error type for the detection post-processing pipeline.
///
/// All variants indicate a caller mistake (wrong tensor shape, wrong
/// configuration); none are transient or retryable.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PostProcessError {
    /// Error when the buffer length does not match the declared tensor shape.
    #[error("Tensor length ({1}) does not match the declared shape ({0})")]
    InvalidShape(usize, usize),

    /// Error when the per-candidate row width is inconsistent with the label
    /// count the pipeline was configured with.
    #[error("Row width ({1}) does not match the configured label count (expected {0})")]
    InvalidRowWidth(usize, usize),

    /// Error when an arg-max scan receives a zero-length score segment.
    #[error("Empty score segment")]
    EmptyScoreSegment,

    /// Error when the supplied color table does not cover every label.
    #[error("Color table length ({1}) does not match the label count ({0})")]
    ColorCountMismatch(usize, usize),

    /// Error when an operation is not available for the configured model
    /// variant, such as box detection on a classification head.
    #[error("Model variant does not support {0}")]
    UnsupportedVariant(&'static str),
}
