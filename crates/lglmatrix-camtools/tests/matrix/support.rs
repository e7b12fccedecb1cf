use std::path::Path;

use lglmatrix_core::Element;
use lglmatrix_designer::{FontOutliner, OutlineError, Result, TextOutliner, TextPath};

/// Deterministic stand-in for a real font: every character is a box half a
/// point size wide.
pub struct BoxOutliner;

impl TextOutliner for BoxOutliner {
    fn font_family(&self) -> &str {
        "Box"
    }

    fn render_text_to_path(&self, text: &str, point_size: f64) -> Result<TextPath> {
        if text.is_empty() {
            return Err(OutlineError::EmptyText);
        }
        let width = point_size * 0.5;
        let mut data = String::new();
        for (i, _) in text.chars().enumerate() {
            let x = i as f64 * width;
            data.push_str(&format!(
                "M {} 0 L {} 0 L {} {} L {} {} Z ",
                x,
                x + width,
                x + width,
                point_size,
                x,
                point_size
            ));
        }
        Ok(TextPath {
            data: data.trim_end().to_string(),
            advance: text.chars().count() as f64 * width,
            ascent: point_size * 0.75,
        })
    }
}

/// Fails the way a missing system font does.
pub struct NoFontOutliner;

impl TextOutliner for NoFontOutliner {
    fn font_family(&self) -> &str {
        "Nope"
    }

    fn render_text_to_path(&self, _text: &str, _point_size: f64) -> Result<TextPath> {
        Err(OutlineError::FontNotFound("Nope".to_string()))
    }
}

/// Public-domain font shipped with the designer crate's tests.
pub fn tuffy() -> FontOutliner {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../lglmatrix-designer/tests/fonts/Tuffy.ttf");
    FontOutliner::from_file(&path, "Tuffy").expect("bundled test font loads")
}

/// Document-space bounding box `(min_x, min_y, max_x, max_y)` of a text
/// element's outline after its transform.
pub fn ink_bounds(element: &Element) -> (f64, f64, f64, f64) {
    let data = &element.text.as_ref().expect("text element").path;
    let values: Vec<f64> = data
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect();
    let [a, b, c, d, tx, ty] = element.transform_matrix;
    values
        .chunks(2)
        .map(|p| (a * p[0] + c * p[1] + tx, b * p[0] + d * p[1] + ty))
        .fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |(x0, y0, x1, y1), (x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        )
}
