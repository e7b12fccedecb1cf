//! Error handling for LGL Matrix documents
//!
//! Covers the failures that can happen while assembling, serializing or
//! writing a project file.

use std::io;
use thiserror::Error;

/// Document error type
#[derive(Error, Debug)]
pub enum DocumentError {
    /// I/O error while writing or reading a project file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An element points at a layer id that is not part of the document.
    #[error("Element {element_id} references unknown layer {layer_id}")]
    InvalidReference {
        /// The offending element.
        element_id: String,
        /// The layer id that could not be resolved.
        layer_id: String,
    },
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
