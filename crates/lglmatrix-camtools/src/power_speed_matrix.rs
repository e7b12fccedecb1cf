//! Power/Speed Matrix Generator
//!
//! Builds a laser calibration project: a grid of square tiles where power
//! ramps left to right and speed ramps bottom to top, with percentage labels
//! above the columns, speed labels left of the rows and two axis titles.
//!
//! The run is strictly sequential: grid, then labels, then document
//! assembly. Nothing is written until the document is complete.

mod grid;
mod labels;
mod types;

pub use grid::{GridBuilder, GridCell, GridOutput};
pub use labels::{
    Annotations, LabelAnnotator, LABEL_COLOR, LABEL_LAYER_NAME, LABEL_POINT_SIZE,
    TITLE_POINT_SIZE,
};
pub use types::{
    MatrixParameters, MatrixWarning, SortPolicy, TitleStyle, KNOWN_LASER_TYPES,
    MAX_GRID_DIMENSION,
};

use lglmatrix_core::{Document, LaserArea};
use lglmatrix_designer::TextOutliner;

use crate::error::CamToolResult;

/// A generated project and the advisories raised while building it.
#[derive(Debug, Clone)]
pub struct MatrixOutput {
    pub document: Document,
    pub warnings: Vec<MatrixWarning>,
}

/// Compose the root document.
///
/// Grid layers come first followed by the annotation layer; grid elements
/// come first followed by the labels. Neither list is reordered.
pub fn assemble_document(
    area: LaserArea,
    grid: GridOutput,
    annotations: Annotations,
) -> CamToolResult<Document> {
    let (mut layers, mut elements) = grid.into_parts();
    layers.push(annotations.layer);
    elements.extend(annotations.elements);

    let document = Document::new(area, layers, elements);
    document.validate()?;
    Ok(document)
}

/// Generator for power/speed calibration projects.
pub struct PowerSpeedMatrix {
    params: MatrixParameters,
}

impl PowerSpeedMatrix {
    /// Validate `params` and create a generator.
    pub fn new(params: MatrixParameters) -> CamToolResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &MatrixParameters {
        &self.params
    }

    /// Build the complete document, rendering labels with `outliner`.
    pub fn generate<T: TextOutliner + ?Sized>(
        &self,
        outliner: &T,
    ) -> CamToolResult<MatrixOutput> {
        let p = &self.params;
        if let Ok(json) = serde_json::to_string(p) {
            tracing::debug!(params = %json, "Generating power/speed matrix");
        }

        let mut warnings = p.warnings();
        for warning in &warnings {
            match warning {
                MatrixWarning::UnknownLaserType(laser_type) => {
                    tracing::warn!(laser_type = %laser_type, "{}", warning)
                }
                other => tracing::warn!("{}", other),
            }
        }

        let grid = GridBuilder::new(p).build();
        warnings.extend(grid.warnings.iter().cloned());

        let layers: Vec<_> = grid.layers().cloned().collect();
        let annotations = LabelAnnotator::new(p, outliner).annotate(&layers)?;

        let area = LaserArea::new(p.area_width, p.area_height);
        let document = assemble_document(area, grid, annotations)?;

        tracing::info!(
            tiles = p.columns * p.rows,
            layers = document.layers.len(),
            elements = document.elements.len(),
            "Power/speed matrix generated"
        );
        Ok(MatrixOutput { document, warnings })
    }
}
