//! Positioned vector objects.

use serde::{Deserialize, Serialize};

use super::{new_id, Layer};

/// Identity transform `[a, b, c, d, tx, ty]`.
pub const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Element discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "shape-rect")]
    ShapeRect,
    #[serde(rename = "text")]
    Text,
}

/// Text-only payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// Opaque outline data from the glyph renderer
    pub path: String,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub text_align: String,
    pub letter_spacing: f64,
    pub line_spacing: f64,
}

impl TextContent {
    pub fn new(
        text: impl Into<String>,
        path: impl Into<String>,
        font_family: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            font_family: font_family.into(),
            font_size,
            text_align: "left".to_string(),
            letter_spacing: 0.0,
            line_spacing: 1.0,
        }
    }
}

/// A visual object bound to one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub angle: f64,
    pub selectable: bool,
    pub visible: bool,
    pub layer_id: String,
    pub is_locked: bool,
    /// True for annotations outside the sweep's own footprint
    pub is_out_work_space: bool,
    pub line_color: String,
    pub width: f64,
    pub height: f64,
    pub transform_matrix: [f64; 6],
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
}

impl Element {
    /// Rectangle of the given size, bound to `layer`.
    pub fn rect(layer: &Layer, width: f64, height: f64) -> ElementBuilder {
        ElementBuilder::new(ElementType::ShapeRect, layer).size(width, height)
    }

    /// Text element carrying `content`, bound to `layer`.
    pub fn text(layer: &Layer, content: TextContent) -> ElementBuilder {
        let mut builder = ElementBuilder::new(ElementType::Text, layer);
        builder.element.text = Some(content);
        builder
    }

    /// Translation part of the transform.
    pub fn position(&self) -> (f64, f64) {
        (self.transform_matrix[4], self.transform_matrix[5])
    }
}

/// Builder for [`Element`].
///
/// Defaults: visible, selectable, unlocked, inside the work space, angle 0,
/// identity transform, line color taken from the bound layer.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(element_type: ElementType, layer: &Layer) -> Self {
        Self {
            element: Element {
                id: new_id(),
                element_type,
                angle: 0.0,
                selectable: true,
                visible: true,
                layer_id: layer.id.clone(),
                is_locked: false,
                is_out_work_space: false,
                line_color: layer.color.clone(),
                width: 0.0,
                height: 0.0,
                transform_matrix: IDENTITY_MATRIX,
                text: None,
            },
        }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.element.width = width;
        self.element.height = height;
        self
    }

    pub fn transform(mut self, matrix: [f64; 6]) -> Self {
        self.element.transform_matrix = matrix;
        self
    }

    /// Pure translation to `(x, y)`.
    pub fn at(self, x: f64, y: f64) -> Self {
        self.transform([1.0, 0.0, 0.0, 1.0, x, y])
    }

    /// Rotation in degrees, informational only; the transform carries it.
    pub fn angle(mut self, degrees: f64) -> Self {
        self.element.angle = degrees;
        self
    }

    pub fn out_of_work_space(mut self, outside: bool) -> Self {
        self.element.is_out_work_space = outside;
        self
    }

    pub fn build(self) -> Element {
        self.element
    }
}
