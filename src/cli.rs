//! Command-line interface.
//!
//! Every generator flag is optional so that values from a configuration file
//! survive unless explicitly overridden.

use clap::Parser;
use lglmatrix_camtools::{SortPolicy, TitleStyle};
use lglmatrix_core::{LayerMode, ProcessMethod};
use lglmatrix_settings::MatrixOverrides;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Generate a laser power/speed calibration matrix as an LGL project file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lglmatrix", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Number of power steps (columns)
    #[arg(short = 'x', long = "columns", value_parser = clap::value_parser!(u32).range(1..))]
    pub x: Option<u32>,

    /// Number of speed steps (rows)
    #[arg(short = 'y', long = "rows", value_parser = clap::value_parser!(u32).range(1..))]
    pub y: Option<u32>,

    /// Power increment per column (%)
    #[arg(long = "pi", alias = "power-increment")]
    pub pi: Option<u32>,

    /// Minimum power (%)
    #[arg(long = "pm", alias = "power-min")]
    pub pm: Option<u32>,

    /// Speed increment per row (mm/s)
    #[arg(long = "si", alias = "speed-increment")]
    pub si: Option<f64>,

    /// Minimum speed (mm/s)
    #[arg(long = "sm", alias = "speed-min")]
    pub sm: Option<f64>,

    /// Engrave quality
    #[arg(short = 'q', long = "quality")]
    pub q: Option<f64>,

    /// Tile width (mm)
    #[arg(short = 'w', long = "width")]
    pub w: Option<f64>,

    /// Space between tiles (mm)
    #[arg(short = 's', long = "space")]
    pub s: Option<f64>,

    /// Laser work area width (mm)
    #[arg(long = "ax", alias = "area-width")]
    pub ax: Option<u32>,

    /// Laser work area height (mm)
    #[arg(long = "ay", alias = "area-height")]
    pub ay: Option<u32>,

    /// Layer mode: Fill or Line
    #[arg(long)]
    pub mode: Option<LayerMode>,

    /// Process method: Engrave or Cut
    #[arg(long)]
    pub method: Option<ProcessMethod>,

    /// Laser source identifier, e.g. Diode or CO2
    #[arg(long = "laser-type", alias = "laserType")]
    pub laser_type: Option<String>,

    /// Output project file
    #[arg(short = 'o', long = "output")]
    pub o: Option<PathBuf>,

    /// Tile sort order: constant or sequential
    #[arg(long)]
    pub sort: Option<SortPolicy>,

    /// Axis title wording: short or units
    #[arg(long)]
    pub titles: Option<TitleStyle>,

    /// Font family for labels
    #[arg(long)]
    pub font: Option<String>,

    /// Font file for labels, overrides --font lookup
    #[arg(long = "font-file")]
    pub font_file: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the resolved configuration to this file and exit
    #[arg(long = "save-config")]
    pub save_config: Option<PathBuf>,

    /// List installed font families and exit
    #[arg(long = "list-fonts")]
    pub list_fonts: bool,

    /// Debug logging
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long)]
    pub quiet: bool,

    /// Emit logs as JSON
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl Cli {
    /// Flags that take precedence over the configuration file.
    pub fn overrides(&self) -> MatrixOverrides {
        MatrixOverrides {
            columns: self.x,
            rows: self.y,
            power_min: self.pm,
            power_increment: self.pi,
            speed_min: self.sm,
            speed_increment: self.si,
            quality: self.q,
            tile_width: self.w,
            spacing: self.s,
            area_width: self.ax,
            area_height: self.ay,
            mode: self.mode,
            process_method: self.method,
            laser_type: self.laser_type.clone(),
            sort: self.sort,
            titles: self.titles,
            output: self.o.clone(),
            font_family: self.font.clone(),
            font_file: self.font_file.clone(),
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
