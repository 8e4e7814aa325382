//! Error types for overlay rendering operations.
//!
//! All failures are terminal for a single invocation: there is nothing
//! transient to retry, and nothing is recovered silently into degraded
//! output.

use thiserror::Error;

/// Error types that can occur while parsing a layout payload and rendering
/// its overlay.
///
/// # Examples
///
/// ```rust
/// use blockviz_core::{parse_layout, BlockvizError};
///
/// let payload = serde_json::json!({"unrelated": true});
/// match parse_layout(&payload) {
///     Err(BlockvizError::SchemaError(msg)) => assert!(msg.contains("unknown")),
///     other => panic!("expected SchemaError, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum BlockvizError {
    /// File I/O error: missing or unreadable image or JSON file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error for input that is not valid JSON at all.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Payload does not match any known layout format, or a required field
    /// is absent. The message carries the detected format name.
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Requested block index outside the extracted list.
    #[error("block index {index} out of range (valid: 0..{count})")]
    IndexError {
        /// The index that was requested.
        index: usize,
        /// Number of blocks actually extracted.
        count: usize,
    },

    /// Declared canvas dimensions that cannot produce a scale factor.
    /// Reported before any drawing occurs.
    #[error("Geometry error: {0}")]
    GeometryError(String),
}

/// Type alias for [`Result<T, BlockvizError>`].
pub type Result<T> = std::result::Result<T, BlockvizError>;
