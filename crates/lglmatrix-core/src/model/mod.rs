//! Project-file data model.
//!
//! Field names serialize in camelCase to match what laser-control software
//! expects when it opens a `.lgl` project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod document;
pub mod element;
pub mod layer;

pub use document::{Document, LaserArea, DOCUMENT_VERSION};
pub use element::{Element, ElementBuilder, ElementType, TextContent};
pub use layer::{AnnotationOverrides, Layer, LayerBuilder};

/// Generate a fresh identifier for a layer or element.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// How a layer's geometry is rendered by the laser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerMode {
    /// Raster-fill the enclosed area
    #[default]
    Fill,
    /// Trace the outline only
    Line,
}

impl fmt::Display for LayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill => write!(f, "Fill"),
            Self::Line => write!(f, "Line"),
        }
    }
}

impl FromStr for LayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fill" => Ok(Self::Fill),
            "line" => Ok(Self::Line),
            _ => Err(format!("Unknown layer mode: {}", s)),
        }
    }
}

/// What the laser does to the material on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessMethod {
    /// Mark the surface
    #[default]
    Engrave,
    /// Cut through
    Cut,
}

impl fmt::Display for ProcessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engrave => write!(f, "Engrave"),
            Self::Cut => write!(f, "Cut"),
        }
    }
}

impl FromStr for ProcessMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "engrave" => Ok(Self::Engrave),
            "cut" => Ok(Self::Cut),
            _ => Err(format!("Unknown process method: {}", s)),
        }
    }
}
