//! Error types for tag decoding and parameter validation.

/// Errors that can occur when decoding raw tags or validating
/// quantization parameters.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A raw element-type tag outside the published table.
    #[error("unknown element type tag {raw}")]
    UnknownElementType {
        /// The tag as read from the wire.
        raw: i32,
    },

    /// A raw dimension-encoding tag outside the published table.
    #[error("unknown dimension type tag {raw}")]
    UnknownDimensionType {
        /// The tag as read from the wire.
        raw: i32,
    },

    /// A quantization scale that is negative or non-finite.
    #[error("invalid quantization scale {scale}")]
    InvalidScale {
        /// The offending scale value.
        scale: f32,
    },
}
