//! LGL Matrix Settings Crate
//!
//! Layered configuration: built-in defaults, an optional TOML file, then
//! command-line overrides. The result is turned once into immutable
//! generator parameters.

pub mod config;
pub mod error;

pub use config::{Config, MatrixOverrides, MatrixSettings, OutputSettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
