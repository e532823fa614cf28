//! Error types for rs-coreex.
//!
//! This module defines the error types returned by extraction operations.
//! Numeric edge cases inside scoring (a node with no trusted words) are not
//! errors; such nodes are simply left unscored.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No candidate element survived preprocessing, or the document has no body.
    ///
    /// A body holding only loose text (no element children) also lands here,
    /// even though the body itself would score. A page whose elements are all
    /// unscored is not an error: the body is returned with those children
    /// pruned.
    #[error("No extractable content found")]
    NoContent,

    /// An `Options` value is out of range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The configured base URL could not be parsed as an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The document is nested deeper than the configured guard allows.
    #[error("Document depth {depth} exceeds limit {limit}")]
    TooDeep {
        /// Deepest element nesting found below the body.
        depth: usize,
        /// Configured `max_tree_depth`.
        limit: usize,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
