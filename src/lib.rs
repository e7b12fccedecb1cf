//! # LGL Matrix
//!
//! Generates laser calibration test patterns: a grid of tiles sweeping power
//! along X and speed along Y, with axis labels, written as an LGL project
//! file for laser-control software.
//!
//! ## Architecture
//!
//! LGL Matrix is organized as a workspace with multiple crates:
//!
//! 1. **lglmatrix-core** - Project-file data model (layers, elements, documents)
//! 2. **lglmatrix-designer** - Font lookup, text outlines, element placement
//! 3. **lglmatrix-camtools** - The power/speed matrix generator
//! 4. **lglmatrix-settings** - TOML configuration and command-line overrides
//! 5. **lglmatrix** - Main binary that integrates all crates

pub mod cli;

pub use cli::Cli;

pub use lglmatrix_camtools::{MatrixOutput, MatrixParameters, MatrixWarning, PowerSpeedMatrix};
pub use lglmatrix_core::{Document, Element, LaserArea, Layer};
pub use lglmatrix_designer::{FontOutliner, TextOutliner};
pub use lglmatrix_settings::Config;

use anyhow::Context;
use lglmatrix_designer::font_manager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - stderr output, so stdout stays usable for `--list-fonts`
/// - RUST_LOG environment variable support
/// - optional JSON formatting
pub fn init_logging(level: tracing::Level, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}

/// Defaults, then the configuration file, then command-line flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = Config::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;
    let config = config.with_overrides(cli.overrides());
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Load the label font named by the configuration.
pub fn load_outliner(config: &Config) -> anyhow::Result<FontOutliner> {
    let output = &config.output;
    match &output.font_file {
        Some(path) => FontOutliner::from_file(path, &output.font_family)
            .with_context(|| format!("Failed to load font file {}", path.display())),
        None => FontOutliner::from_system(&output.font_family)
            .with_context(|| format!("Failed to load font '{}'", output.font_family)),
    }
}

/// Generate the matrix and write it to the configured output path.
///
/// The file is only created once the whole document has been built.
pub fn generate_to_file<T: TextOutliner + ?Sized>(
    config: &Config,
    outliner: &T,
) -> anyhow::Result<MatrixOutput> {
    let generator = PowerSpeedMatrix::new(config.to_parameters())
        .context("Invalid matrix parameters")?;
    let output = generator
        .generate(outliner)
        .context("Failed to generate matrix")?;

    let path = &config.output.path;
    output
        .document
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Saved project file");
    Ok(output)
}

/// Entry point used by the binary.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_fonts {
        for family in font_manager::list_font_families() {
            println!("{}", family);
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;

    if let Some(path) = &cli.save_config {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved configuration");
        return Ok(());
    }

    let outliner = load_outliner(&config)?;
    let output = generate_to_file(&config, &outliner)?;
    if !output.warnings.is_empty() {
        tracing::info!(count = output.warnings.len(), "Finished with warnings");
    }
    Ok(())
}
