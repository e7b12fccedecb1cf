//! # LGL Matrix Core
//!
//! Core types for LGL Matrix.
//! Provides the project-file data model consumed by laser-control software:
//! the laser work area, processing layers, positioned elements and the root
//! document that ties them together.

pub mod error;
pub mod model;
pub mod units;

pub use error::{DocumentError, Result};
pub use model::{
    new_id, AnnotationOverrides, Document, Element, ElementBuilder, ElementType, LaserArea, Layer,
    LayerBuilder, LayerMode, ProcessMethod, TextContent, DOCUMENT_VERSION,
};
pub use units::per_minute;
