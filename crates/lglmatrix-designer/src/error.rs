//! Error types for the designer crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning text into outlines.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// No installed font matches the requested family.
    #[error("Font family not found: {0}")]
    FontNotFound(String),

    /// A font file was found but could not be parsed.
    #[error("Failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// Nothing to render.
    #[error("Cannot render empty text")]
    EmptyText,

    /// I/O error while reading a font file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;
