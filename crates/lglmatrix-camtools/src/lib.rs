//! # LGL Matrix CAM Tools
//!
//! Generators that produce complete laser projects.
//!
//! ## Power/Speed Matrix
//!
//! A calibration grid of square tiles sweeping laser power along X and speed
//! along Y. Each tile gets its own processing layer; axis labels and titles
//! are rendered to outlines and share one annotation layer.

pub mod error;
pub mod power_speed_matrix;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use power_speed_matrix::{
    assemble_document, Annotations, GridBuilder, GridCell, GridOutput, LabelAnnotator,
    MatrixOutput, MatrixParameters, MatrixWarning, PowerSpeedMatrix, SortPolicy, TitleStyle,
};
