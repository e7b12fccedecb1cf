//! Processing layers.
//!
//! A layer is a named laser profile (power, speed, mode). Every element in a
//! document is bound to exactly one layer through its `layerId`.

use serde::{Deserialize, Serialize};

use super::{new_id, LayerMode, ProcessMethod};

/// Default display color for grid layers.
pub const DEFAULT_LAYER_COLOR: &str = "#00e000";
const DEFAULT_OVERSCAN_PERCENT: f64 = 2.5;
const DEFAULT_IMAGE_MODE: &str = "Stucki";

/// A named processing profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    /// Rendering type, kept in step with `mode`
    #[serde(rename = "type")]
    pub layer_type: LayerMode,
    pub is_output_enabled: bool,
    pub is_air_enable: bool,
    /// Tile footprint, not position
    pub height: f64,
    pub width: f64,
    pub color: String,
    /// Percent of full power
    pub laser_power: u32,
    /// Distance per minute
    pub laser_speed: f64,
    pub engrave_quality: f64,
    pub engrave_count: u32,
    pub mode: LayerMode,
    pub sort: u32,
    pub process_method: ProcessMethod,
    pub laser_type: String,
    pub material_id: i64,
    pub material: String,
    pub thickness: f64,
    pub is_crossed: bool,
    pub is_overscan: bool,
    pub over_scan_per: f64,
    pub image_mode: String,
    pub scan_angle: f64,
    pub is_locked: bool,
    pub kerf_offset: f64,
    pub is_bidirectional: bool,
}

/// Fields replaced when a grid layer is reused as the annotation layer.
///
/// Mode is always forced to `Line` and the process method to `Engrave`; a new
/// id is always assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationOverrides {
    pub name: String,
    pub color: String,
}

impl Layer {
    /// Start building a layer with the given display name.
    pub fn builder(name: impl Into<String>) -> LayerBuilder {
        LayerBuilder::new(name)
    }

    /// Derive the shared annotation layer from a real grid tile.
    ///
    /// Geometry, quality and material fields come from `self`.
    pub fn derive_annotation(&self, overrides: AnnotationOverrides) -> Layer {
        Layer {
            id: new_id(),
            name: overrides.name,
            color: overrides.color,
            layer_type: LayerMode::Line,
            mode: LayerMode::Line,
            process_method: ProcessMethod::Engrave,
            ..self.clone()
        }
    }
}

/// Builder for [`Layer`] with explicit defaults.
///
/// | field | default |
/// |---|---|
/// | `mode` / `type` | `Fill` |
/// | `processMethod` | `Engrave` |
/// | `color` | `#00e000` |
/// | `engraveCount` | 1 |
/// | `isOutputEnabled` | true |
/// | `isBidirectional` | true |
/// | `materialId` | -1 |
/// | `overScanPer` | 2.5 |
/// | `imageMode` | `Stucki` |
///
/// Everything else starts at zero, false or empty.
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    layer: Layer,
}

impl LayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            layer: Layer {
                id: new_id(),
                name: name.into(),
                layer_type: LayerMode::Fill,
                is_output_enabled: true,
                is_air_enable: false,
                height: 0.0,
                width: 0.0,
                color: DEFAULT_LAYER_COLOR.to_string(),
                laser_power: 0,
                laser_speed: 0.0,
                engrave_quality: 0.0,
                engrave_count: 1,
                mode: LayerMode::Fill,
                sort: 0,
                process_method: ProcessMethod::Engrave,
                laser_type: String::new(),
                material_id: -1,
                material: String::new(),
                thickness: 0.0,
                is_crossed: false,
                is_overscan: false,
                over_scan_per: DEFAULT_OVERSCAN_PERCENT,
                image_mode: DEFAULT_IMAGE_MODE.to_string(),
                scan_angle: 0.0,
                is_locked: false,
                kerf_offset: 0.0,
                is_bidirectional: true,
            },
        }
    }

    /// Square footprint of a tile.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.layer.width = width;
        self.layer.height = height;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.layer.color = color.into();
        self
    }

    pub fn power(mut self, percent: u32) -> Self {
        self.layer.laser_power = percent;
        self
    }

    /// Speed in distance per minute.
    pub fn speed(mut self, per_minute: f64) -> Self {
        self.layer.laser_speed = per_minute;
        self
    }

    pub fn quality(mut self, quality: f64) -> Self {
        self.layer.engrave_quality = quality;
        self
    }

    /// Sets both `mode` and `type`.
    pub fn mode(mut self, mode: LayerMode) -> Self {
        self.layer.mode = mode;
        self.layer.layer_type = mode;
        self
    }

    pub fn process_method(mut self, method: ProcessMethod) -> Self {
        self.layer.process_method = method;
        self
    }

    pub fn sort(mut self, sort: u32) -> Self {
        self.layer.sort = sort;
        self
    }

    pub fn laser_type(mut self, laser_type: impl Into<String>) -> Self {
        self.layer.laser_type = laser_type.into();
        self
    }

    pub fn build(self) -> Layer {
        self.layer
    }
}
