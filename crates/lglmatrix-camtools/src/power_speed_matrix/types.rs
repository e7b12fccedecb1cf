//! Parameter types for the power/speed matrix.

use lglmatrix_core::{LaserArea, LayerMode, ProcessMethod};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParameterError, ParameterResult};

/// Largest accepted number of columns or rows.
pub const MAX_GRID_DIMENSION: u32 = 1000;

/// Laser sources recognized without a warning (case-insensitive).
pub const KNOWN_LASER_TYPES: [&str; 4] = ["Diode", "CO2", "Fiber", "Infrared"];

/// How the per-tile `sort` field is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Every tile gets sort 0, matching files produced by earlier generators
    Constant,
    /// Tiles are numbered 0, 1, 2, ... in output order
    #[default]
    Sequential,
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for SortPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "constant" | "zero" => Ok(Self::Constant),
            "sequential" => Ok(Self::Sequential),
            _ => Err(format!("Unknown sort policy: {}", s)),
        }
    }
}

/// Axis title wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    /// "POWER" / "SPEED"
    Short,
    /// "POWER%" / "SPEED (mm/s)"
    #[default]
    Units,
}

impl TitleStyle {
    pub fn power_title(&self) -> &'static str {
        match self {
            Self::Short => "POWER",
            Self::Units => "POWER%",
        }
    }

    pub fn speed_title(&self) -> &'static str {
        match self {
            Self::Short => "SPEED",
            Self::Units => "SPEED (mm/s)",
        }
    }
}

impl fmt::Display for TitleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Units => write!(f, "units"),
        }
    }
}

impl FromStr for TitleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "units" => Ok(Self::Units),
            _ => Err(format!("Unknown title style: {}", s)),
        }
    }
}

/// Advisory conditions found while generating. Never fatal and never
/// written to the project file.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixWarning {
    /// Fill cannot be combined with Cut; tiles were switched to Line.
    FillCoercedToLine,
    /// The laser type is not one of [`KNOWN_LASER_TYPES`].
    UnknownLaserType(String),
    /// The last column exceeds 100% power.
    PowerAboveFull { max_power: u32 },
    /// The grid footprint does not fit the laser area.
    ExceedsLaserArea { width: f64, height: f64 },
}

impl fmt::Display for MatrixWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillCoercedToLine => {
                write!(f, "Fill mode cannot be used with Cut; using Line instead")
            }
            Self::UnknownLaserType(laser_type) => {
                write!(f, "Unrecognized laser type '{}'", laser_type)
            }
            Self::PowerAboveFull { max_power } => {
                write!(f, "Power ramp reaches {}%, above full power", max_power)
            }
            Self::ExceedsLaserArea { width, height } => write!(
                f,
                "Grid footprint {:.1} x {:.1} mm exceeds the laser area",
                width, height
            ),
        }
    }
}

/// Parameters for the power/speed matrix.
///
/// Constructed once and shared read-only by the grid builder and the label
/// annotator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixParameters {
    /// Number of power steps (X)
    pub columns: u32,
    /// Number of speed steps (Y)
    pub rows: u32,
    /// Power of the first column (%)
    pub power_min: u32,
    /// Power added per column (%)
    pub power_increment: u32,
    /// Speed of the bottom row (mm/s)
    pub speed_min: f64,
    /// Speed added per row going up (mm/s)
    pub speed_increment: f64,
    /// Engrave quality (line interval)
    pub quality: f64,
    /// Tile edge length (mm)
    pub tile_width: f64,
    /// Gap between tiles (mm)
    pub spacing: f64,
    /// Laser work area width (mm)
    pub area_width: u32,
    /// Laser work area height (mm)
    pub area_height: u32,
    pub mode: LayerMode,
    pub process_method: ProcessMethod,
    /// Free-form laser source identifier
    pub laser_type: String,
    pub sort_policy: SortPolicy,
    pub title_style: TitleStyle,
}

impl Default for MatrixParameters {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            power_min: 10,
            power_increment: 10,
            speed_min: 20.0,
            speed_increment: 20.0,
            quality: 0.1,
            tile_width: 5.0,
            spacing: 1.0,
            area_width: 400,
            area_height: 400,
            mode: LayerMode::Fill,
            process_method: ProcessMethod::Engrave,
            laser_type: String::new(),
            sort_policy: SortPolicy::default(),
            title_style: TitleStyle::default(),
        }
    }
}

impl MatrixParameters {
    /// Reject values no grid can be built from.
    pub fn validate(&self) -> ParameterResult<()> {
        check_dimension("x", self.columns)?;
        check_dimension("y", self.rows)?;
        check_positive("w", self.tile_width)?;
        check_non_negative("s", self.spacing)?;
        check_positive("sm", self.speed_min)?;
        check_non_negative("si", self.speed_increment)?;
        check_positive("q", self.quality)?;
        check_positive("ax", f64::from(self.area_width))?;
        check_positive("ay", f64::from(self.area_height))?;
        Ok(())
    }

    /// Mode actually written to tile layers.
    pub fn effective_mode(&self) -> LayerMode {
        match (self.mode, self.process_method) {
            (LayerMode::Fill, ProcessMethod::Cut) => LayerMode::Line,
            (mode, _) => mode,
        }
    }

    /// Power for a zero-based column.
    pub fn power_at(&self, column: u32) -> u32 {
        column
            .saturating_mul(self.power_increment)
            .saturating_add(self.power_min)
    }

    /// Speed in mm/s for a zero-based row. Row 0 (top) is the fastest.
    pub fn speed_at(&self, row: u32) -> f64 {
        f64::from(self.rows - 1 - row) * self.speed_increment + self.speed_min
    }

    /// Center of the tile at a zero-based index along either axis.
    pub fn tile_center(&self, index: u32) -> f64 {
        let i = f64::from(index);
        self.tile_width / 2.0 + self.spacing * (i + 1.0) + self.tile_width * i
    }

    /// Footprint including the outer margins, as `(width, height)`.
    pub fn footprint(&self) -> (f64, f64) {
        let extent = |count: u32| {
            let n = f64::from(count);
            n * self.tile_width + (n + 1.0) * self.spacing
        };
        (extent(self.columns), extent(self.rows))
    }

    pub fn is_known_laser_type(&self) -> bool {
        let laser_type = self.laser_type.trim();
        laser_type.is_empty()
            || KNOWN_LASER_TYPES
                .iter()
                .any(|known| known.eq_ignore_ascii_case(laser_type))
    }

    /// Advisory checks on the inputs that do not stop generation.
    ///
    /// Mode coercion is reported by the grid builder when it applies it.
    pub fn warnings(&self) -> Vec<MatrixWarning> {
        let mut warnings = Vec::new();
        if !self.is_known_laser_type() {
            warnings.push(MatrixWarning::UnknownLaserType(self.laser_type.clone()));
        }
        let max_power = self.power_at(self.columns.saturating_sub(1));
        if max_power > 100 {
            warnings.push(MatrixWarning::PowerAboveFull { max_power });
        }
        let (width, height) = self.footprint();
        if !LaserArea::new(self.area_width, self.area_height).contains(width, height) {
            warnings.push(MatrixWarning::ExceedsLaserArea { width, height });
        }
        warnings
    }
}

fn check_dimension(name: &str, value: u32) -> ParameterResult<()> {
    if value < 1 || value > MAX_GRID_DIMENSION {
        return Err(ParameterError::OutOfRange {
            name: name.to_string(),
            value: f64::from(value),
            min: 1.0,
            max: f64::from(MAX_GRID_DIMENSION),
        });
    }
    Ok(())
}

fn check_finite(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> ParameterResult<()> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must be greater than zero, got {}", value),
        });
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}
