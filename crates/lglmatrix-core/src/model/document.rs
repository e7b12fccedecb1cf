//! Root project document.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::{Element, Layer};
use crate::error::{DocumentError, Result};

/// Project format version written into every document.
pub const DOCUMENT_VERSION: &str = "1.2.1";

/// Machine work envelope in whole millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserArea {
    pub height: u32,
    pub width: u32,
}

impl LaserArea {
    pub fn new(width: u32, height: u32) -> Self {
        Self { height, width }
    }

    /// Whether a `width` x `height` footprint anchored at the origin fits.
    pub fn contains(&self, width: f64, height: f64) -> bool {
        width <= f64::from(self.width) && height <= f64::from(self.height)
    }
}

/// Root of a project file.
///
/// `layers` and `elements` keep the order they were produced in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub version: String,
    pub laser_area: LaserArea,
    pub layers: Vec<Layer>,
    #[serde(alias = "element")]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(laser_area: LaserArea, layers: Vec<Layer>, elements: Vec<Element>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            laser_area,
            layers,
            elements,
        }
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Elements bound to the layer with the given id.
    pub fn elements_on<'a>(&'a self, layer_id: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements
            .iter()
            .filter(move |element| element.layer_id == layer_id)
    }

    /// Check that every element references a layer in this document.
    pub fn validate(&self) -> Result<()> {
        let ids: HashSet<&str> = self.layers.iter().map(|layer| layer.id.as_str()).collect();
        for element in &self.elements {
            if !ids.contains(element.layer_id.as_str()) {
                return Err(DocumentError::InvalidReference {
                    element_id: element.id.clone(),
                    layer_id: element.layer_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Human-indented JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize and write the document to `path`.
    ///
    /// The JSON is fully rendered before the file is opened, so a
    /// serialization failure never leaves a partial file behind. On Unix the
    /// file is created with mode 0644.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        tracing::debug!(
            path = %path.as_ref().display(),
            bytes = json.len(),
            "Project file written"
        );
        Ok(())
    }
}
