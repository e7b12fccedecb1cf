//! Axis labels and titles.
//!
//! Column labels sit centered above each column, row labels are
//! right-aligned against the grid's left edge, the power title is centered
//! above the column labels and the speed title runs bottom-to-top left of
//! the row labels. All text shares one annotation layer cloned from the
//! central tile.

use lglmatrix_core::{AnnotationOverrides, Element, Layer, TextContent};
use lglmatrix_designer::{Placement, TextOutliner, TextPath, POINT_TO_MM};

use super::types::MatrixParameters;
use crate::error::{CamToolError, CamToolResult};

/// Point size of per-column and per-row labels.
pub const LABEL_POINT_SIZE: f64 = 10.0;
/// Point size of the axis titles.
pub const TITLE_POINT_SIZE: f64 = 14.0;
/// Name of the shared annotation layer.
pub const LABEL_LAYER_NAME: &str = "Labels";
/// Annotation stroke color, distinct from the tile color.
pub const LABEL_COLOR: &str = "#000000";

/// Gap between the grid edge and its labels (mm).
const LABEL_GAP: f64 = 1.0;
/// Gap between labels and the axis title (mm).
const TITLE_GAP: f64 = 2.0;
/// Cap height as a fraction of the point size, for vertical centering.
const CAP_HEIGHT_RATIO: f64 = 0.7;
const SPEED_TITLE_ROTATION: f64 = -90.0;

/// The shared annotation layer and its text elements.
#[derive(Debug, Clone)]
pub struct Annotations {
    pub layer: Layer,
    pub elements: Vec<Element>,
}

struct RenderedText {
    text: String,
    point_size: f64,
    outline: TextPath,
}

impl RenderedText {
    fn width_mm(&self) -> f64 {
        self.outline.advance * POINT_TO_MM
    }

    fn ascent_mm(&self) -> f64 {
        self.outline.ascent * POINT_TO_MM
    }
}

/// Produces axis labels for a completed grid.
pub struct LabelAnnotator<'a, T: TextOutliner + ?Sized> {
    params: &'a MatrixParameters,
    outliner: &'a T,
}

impl<'a, T: TextOutliner + ?Sized> LabelAnnotator<'a, T> {
    pub fn new(params: &'a MatrixParameters, outliner: &'a T) -> Self {
        Self { params, outliner }
    }

    /// Build the annotation layer and every label.
    ///
    /// Outlines are rendered in order: power title, speed title, column
    /// labels, row labels. Any rendering failure aborts the whole run.
    pub fn annotate(&self, layers: &[Layer]) -> CamToolResult<Annotations> {
        let template = layers.get(layers.len() / 2).ok_or_else(|| {
            CamToolError::InvalidParameters("cannot label an empty grid".to_string())
        })?;
        let layer = template.derive_annotation(AnnotationOverrides {
            name: LABEL_LAYER_NAME.to_string(),
            color: LABEL_COLOR.to_string(),
        });

        let p = self.params;
        let power_title = self.render(p.title_style.power_title(), TITLE_POINT_SIZE)?;
        let speed_title = self.render(p.title_style.speed_title(), TITLE_POINT_SIZE)?;
        let column_labels = (0..p.columns)
            .map(|column| self.render(&format!("{}%", p.power_at(column)), LABEL_POINT_SIZE))
            .collect::<CamToolResult<Vec<_>>>()?;
        let row_labels = (0..p.rows)
            .map(|row| self.render(&format!("{:.1}", p.speed_at(row)), LABEL_POINT_SIZE))
            .collect::<CamToolResult<Vec<_>>>()?;

        let (grid_width, grid_height) = p.footprint();
        let label_baseline = p.spacing - LABEL_GAP;
        let label_right = p.spacing - LABEL_GAP;

        let mut elements = Vec::with_capacity(2 + column_labels.len() + row_labels.len());

        let column_ascent = column_labels
            .iter()
            .map(RenderedText::ascent_mm)
            .fold(0.0, f64::max);
        let power_placement = Placement::glyph(POINT_TO_MM).then_translate(
            grid_width / 2.0 - power_title.width_mm() / 2.0,
            label_baseline - column_ascent - TITLE_GAP,
        );
        elements.push(self.text_element(&layer, power_title, power_placement, 0.0));

        let row_width = row_labels
            .iter()
            .map(RenderedText::width_mm)
            .fold(0.0, f64::max);
        let speed_placement = Placement::glyph(POINT_TO_MM)
            .then_rotate(SPEED_TITLE_ROTATION)
            .then_translate(
                label_right - row_width - TITLE_GAP,
                grid_height / 2.0 + speed_title.width_mm() / 2.0,
            );
        elements.push(self.text_element(
            &layer,
            speed_title,
            speed_placement,
            SPEED_TITLE_ROTATION,
        ));

        for (column, label) in (0..p.columns).zip(column_labels) {
            let x = p.tile_center(column) - label.width_mm() / 2.0;
            let placement = Placement::glyph(POINT_TO_MM).then_translate(x, label_baseline);
            elements.push(self.text_element(&layer, label, placement, 0.0));
        }

        for (row, label) in (0..p.rows).zip(row_labels) {
            let x = label_right - label.width_mm();
            let y = p.tile_center(row) + label.point_size * POINT_TO_MM * CAP_HEIGHT_RATIO / 2.0;
            let placement = Placement::glyph(POINT_TO_MM).then_translate(x, y);
            elements.push(self.text_element(&layer, label, placement, 0.0));
        }

        tracing::debug!(labels = elements.len(), layer = %layer.id, "Labels placed");
        Ok(Annotations { layer, elements })
    }

    fn render(&self, text: &str, point_size: f64) -> CamToolResult<RenderedText> {
        let outline = self.outliner.render_text_to_path(text, point_size)?;
        Ok(RenderedText {
            text: text.to_string(),
            point_size,
            outline,
        })
    }

    fn text_element(
        &self,
        layer: &Layer,
        rendered: RenderedText,
        placement: Placement,
        angle: f64,
    ) -> Element {
        let (width, height) = (rendered.width_mm(), rendered.ascent_mm());
        let (width, height) = if angle == 0.0 {
            (width, height)
        } else {
            (height, width)
        };
        let content = TextContent::new(
            rendered.text,
            rendered.outline.data,
            self.outliner.font_family(),
            rendered.point_size,
        );

        Element::text(layer, content)
            .size(width, height)
            .angle(angle)
            .transform(placement.to_matrix())
            .out_of_work_space(true)
            .build()
    }
}
