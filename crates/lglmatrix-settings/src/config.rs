//! Configuration for LGL Matrix
//!
//! Settings are read from a TOML file with two sections:
//! - `[matrix]`: grid dimensions, power/speed ramps, tile geometry, laser area
//! - `[output]`: output path and label font
//!
//! Every key is optional; missing keys take the built-in defaults.

use lglmatrix_camtools::{MatrixParameters, SortPolicy, TitleStyle};
use lglmatrix_core::{LayerMode, ProcessMethod};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "lglmatrix";

/// Grid and laser settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixSettings {
    /// Number of power steps
    #[serde(alias = "x")]
    pub columns: u32,
    /// Number of speed steps
    #[serde(alias = "y")]
    pub rows: u32,
    /// Starting power (%)
    #[serde(alias = "pm")]
    pub power_min: u32,
    /// Power step (%)
    #[serde(alias = "pi")]
    pub power_increment: u32,
    /// Starting speed (mm/s)
    #[serde(alias = "sm")]
    pub speed_min: f64,
    /// Speed step (mm/s)
    #[serde(alias = "si")]
    pub speed_increment: f64,
    #[serde(alias = "q")]
    pub quality: f64,
    /// Tile edge (mm)
    #[serde(alias = "w")]
    pub tile_width: f64,
    /// Gap between tiles (mm)
    #[serde(alias = "s")]
    pub spacing: f64,
    #[serde(alias = "ax")]
    pub area_width: u32,
    #[serde(alias = "ay")]
    pub area_height: u32,
    pub mode: LayerMode,
    #[serde(alias = "method")]
    pub process_method: ProcessMethod,
    pub laser_type: String,
    pub sort: SortPolicy,
    pub titles: TitleStyle,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        let p = MatrixParameters::default();
        Self {
            columns: p.columns,
            rows: p.rows,
            power_min: p.power_min,
            power_increment: p.power_increment,
            speed_min: p.speed_min,
            speed_increment: p.speed_increment,
            quality: p.quality,
            tile_width: p.tile_width,
            spacing: p.spacing,
            area_width: p.area_width,
            area_height: p.area_height,
            mode: p.mode,
            process_method: p.process_method,
            laser_type: p.laser_type,
            sort: p.sort_policy,
            titles: p.title_style,
        }
    }
}

/// Output file and label font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Project file to write
    pub path: PathBuf,
    /// Font family used for labels
    pub font_family: String,
    /// Explicit font file, takes precedence over `font_family` lookup
    pub font_file: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("matrix.lgl"),
            font_family: "Sans".to_string(),
            font_file: None,
        }
    }
}

/// Values supplied on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixOverrides {
    pub columns: Option<u32>,
    pub rows: Option<u32>,
    pub power_min: Option<u32>,
    pub power_increment: Option<u32>,
    pub speed_min: Option<f64>,
    pub speed_increment: Option<f64>,
    pub quality: Option<f64>,
    pub tile_width: Option<f64>,
    pub spacing: Option<f64>,
    pub area_width: Option<u32>,
    pub area_height: Option<u32>,
    pub mode: Option<LayerMode>,
    pub process_method: Option<ProcessMethod>,
    pub laser_type: Option<String>,
    pub sort: Option<SortPolicy>,
    pub titles: Option<TitleStyle>,
    pub output: Option<PathBuf>,
    pub font_family: Option<String>,
    pub font_file: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub matrix: MatrixSettings,
    pub output: OutputSettings,
}

impl Config {
    /// `<config dir>/lglmatrix/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve the file to read: an explicit path must exist, the default
    /// location is used only when present.
    pub fn load(explicit: Option<&Path>) -> SettingsResult<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save configuration as TOML.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line values on top of this configuration.
    pub fn with_overrides(mut self, overrides: MatrixOverrides) -> Self {
        let m = &mut self.matrix;
        if let Some(value) = overrides.columns {
            m.columns = value;
        }
        if let Some(value) = overrides.rows {
            m.rows = value;
        }
        if let Some(value) = overrides.power_min {
            m.power_min = value;
        }
        if let Some(value) = overrides.power_increment {
            m.power_increment = value;
        }
        if let Some(value) = overrides.speed_min {
            m.speed_min = value;
        }
        if let Some(value) = overrides.speed_increment {
            m.speed_increment = value;
        }
        if let Some(value) = overrides.quality {
            m.quality = value;
        }
        if let Some(value) = overrides.tile_width {
            m.tile_width = value;
        }
        if let Some(value) = overrides.spacing {
            m.spacing = value;
        }
        if let Some(value) = overrides.area_width {
            m.area_width = value;
        }
        if let Some(value) = overrides.area_height {
            m.area_height = value;
        }
        if let Some(value) = overrides.mode {
            m.mode = value;
        }
        if let Some(value) = overrides.process_method {
            m.process_method = value;
        }
        if let Some(value) = overrides.laser_type {
            m.laser_type = value;
        }
        if let Some(value) = overrides.sort {
            m.sort = value;
        }
        if let Some(value) = overrides.titles {
            m.titles = value;
        }
        if let Some(path) = overrides.output {
            self.output.path = path;
        }
        if let Some(family) = overrides.font_family {
            self.output.font_family = family;
        }
        if overrides.font_file.is_some() {
            self.output.font_file = overrides.font_file;
        }
        self
    }

    /// Check the settings that the generator itself does not validate.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.output.path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.output.font_file.is_none() && self.output.font_family.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.font_family".to_string(),
                reason: "must not be empty when no font file is given".to_string(),
            });
        }
        Ok(())
    }

    /// Immutable generator parameters.
    pub fn to_parameters(&self) -> MatrixParameters {
        let m = &self.matrix;
        MatrixParameters {
            columns: m.columns,
            rows: m.rows,
            power_min: m.power_min,
            power_increment: m.power_increment,
            speed_min: m.speed_min,
            speed_increment: m.speed_increment,
            quality: m.quality,
            tile_width: m.tile_width,
            spacing: m.spacing,
            area_width: m.area_width,
            area_height: m.area_height,
            mode: m.mode,
            process_method: m.process_method,
            laser_type: m.laser_type.clone(),
            sort_policy: m.sort,
            title_style: m.titles,
        }
    }
}
