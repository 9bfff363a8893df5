//! Error types for water-quality operations.

use thiserror::Error;

/// Result type alias for water-quality operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before or around scoring.
///
/// Scoring itself cannot fail: every variant here is raised either while
/// building an [`Image`](crate::Image) or while loading inputs for one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Image has zero width or zero height.
    #[error("Empty image: {width}x{height} has no pixels")]
    EmptyImage {
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
    },

    /// Channel count other than 1 (gray) or 3 (RGB).
    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(usize),

    /// width * height * channels doesn't fit in `usize`.
    #[error("Dimension overflow: {width}x{height}x{channels} exceeds addressable size")]
    DimensionOverflow {
        /// Image width.
        width: usize,
        /// Image height.
        height: usize,
        /// Channel count.
        channels: usize,
    },

    /// Pixel buffer length doesn't match the stated dimensions.
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize {
        /// Expected length (width * height * channels).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Encoded image bytes could not be decoded.
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Scoring table failed validation.
    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
