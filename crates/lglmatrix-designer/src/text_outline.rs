//! Text to outline conversion.
//!
//! Glyphs are laid out with `rusttype` and their outlines written as SVG path
//! data. Outlines are returned in point units with Y pointing up and the
//! baseline on the origin, so callers flip Y when placing them in the
//! Y-down document space.

use rusttype::{point as rt_point, Font, OutlineBuilder, Scale};
use std::fmt::Write;
use std::path::Path;

use crate::error::{OutlineError, Result};
use crate::font_manager;

/// Outline of a rendered text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPath {
    /// SVG path data
    pub data: String,
    /// Horizontal advance of the whole run, in points
    pub advance: f64,
    /// Font ascent above the baseline, in points
    pub ascent: f64,
}

/// Renders text into vector outlines.
pub trait TextOutliner {
    /// Family name recorded on text elements.
    fn font_family(&self) -> &str;

    /// Render `text` at `point_size` into a single outline.
    fn render_text_to_path(&self, text: &str, point_size: f64) -> Result<TextPath>;
}

/// [`TextOutliner`] backed by a real font.
pub struct FontOutliner {
    font: Font<'static>,
    family: String,
}

impl FontOutliner {
    pub fn new(font: Font<'static>, family: impl Into<String>) -> Self {
        Self {
            font,
            family: family.into(),
        }
    }

    /// Use the installed font that best matches `family`.
    pub fn from_system(family: &str) -> Result<Self> {
        let font = font_manager::load_system_font(family)?;
        Ok(Self::new(font, family))
    }

    /// Use the font stored in `path`; `family` is only recorded on elements.
    pub fn from_file(path: &Path, family: &str) -> Result<Self> {
        let font = font_manager::load_font_file(path)?;
        Ok(Self::new(font, family))
    }
}

impl TextOutliner for FontOutliner {
    fn font_family(&self) -> &str {
        &self.family
    }

    fn render_text_to_path(&self, text: &str, point_size: f64) -> Result<TextPath> {
        if text.trim().is_empty() {
            return Err(OutlineError::EmptyText);
        }

        let scale = Scale::uniform(point_size as f32);
        let v_metrics = self.font.v_metrics(scale);

        let mut builder = SvgOutline::default();
        let mut advance = 0.0f32;
        for glyph in self.font.layout(text, scale, rt_point(0.0, 0.0)) {
            let origin = glyph.position();
            advance = origin.x + glyph.unpositioned().h_metrics().advance_width;
            // Scaled outlines are relative to the glyph origin, Y down.
            builder.origin_x = origin.x;
            glyph.unpositioned().build_outline(&mut builder);
        }

        Ok(TextPath {
            data: builder.finish(),
            advance: advance as f64,
            ascent: v_metrics.ascent as f64,
        })
    }
}

/// Collects Y-down glyph outline segments as SVG path commands, shifted by
/// the pen position and flipped so Y points up.
#[derive(Default)]
pub(crate) struct SvgOutline {
    path: String,
    origin_x: f32,
}

impl SvgOutline {
    fn push(&mut self, command: char, coords: &[f32]) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(command);
        for pair in coords.chunks(2) {
            let (x, y) = (pair[0] + self.origin_x, -pair[1]);
            let _ = write!(self.path, " {} {}", format_coord(x), format_coord(y));
        }
    }

    pub(crate) fn finish(self) -> String {
        self.path
    }
}

impl OutlineBuilder for SvgOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push('M', &[x, y]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push('L', &[x, y]);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.push('Q', &[x1, y1, x, y]);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.push('C', &[x1, y1, x2, y2, x, y]);
    }

    fn close(&mut self) {
        self.push('Z', &[]);
    }
}

/// Three decimals, trailing zeros trimmed.
fn format_coord(value: f32) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
