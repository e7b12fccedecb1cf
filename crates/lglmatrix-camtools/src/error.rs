//! Error types for the CAM tools crate.

use lglmatrix_core::DocumentError;
use lglmatrix_designer::OutlineError;
use thiserror::Error;

/// Errors that can occur while generating a project.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Invalid parameters were provided to a generator.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Label text could not be turned into outlines.
    #[error("Text rendering failed: {0}")]
    Outline(#[from] OutlineError),

    /// The assembled document is inconsistent or could not be written.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

/// Errors related to generator parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
