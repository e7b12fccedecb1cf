use lglmatrix_camtools::{MatrixParameters, PowerSpeedMatrix};
use lglmatrix_core::{Document, ElementType};

use crate::support::{ink_bounds, tuffy};

fn three_by_three() -> MatrixParameters {
    MatrixParameters {
        columns: 3,
        rows: 3,
        ..Default::default()
    }
}

fn generate(params: MatrixParameters) -> Document {
    PowerSpeedMatrix::new(params)
        .unwrap()
        .generate(&tuffy())
        .unwrap()
        .document
}

fn labels(doc: &Document) -> Vec<&lglmatrix_core::Element> {
    doc.elements
        .iter()
        .filter(|e| e.element_type == ElementType::Text)
        .collect()
}

#[test]
fn test_column_labels_sit_above_grid() {
    let params = three_by_three();
    let doc = generate(params.clone());
    let labels = labels(&doc);

    for (column, label) in labels[2..5].iter().enumerate() {
        let (min_x, min_y, max_x, max_y) = ink_bounds(label);
        assert!(max_y < params.spacing, "column label reaches y={max_y}");
        assert!(min_y < max_y);
        let center = (min_x + max_x) / 2.0;
        assert!((center - params.tile_center(column as u32)).abs() < 1.0);
    }
}

#[test]
fn test_row_labels_sit_left_of_grid() {
    let params = three_by_three();
    let doc = generate(params.clone());
    let labels = labels(&doc);

    for (row, label) in labels[5..].iter().enumerate() {
        let (min_x, min_y, max_x, max_y) = ink_bounds(label);
        assert!(max_x < params.spacing, "row label reaches x={max_x}");
        assert!(min_x < max_x);
        let center = (min_y + max_y) / 2.0;
        assert!((center - params.tile_center(row as u32)).abs() < 1.5);
    }
}

#[test]
fn test_titles_clear_labels_and_center_on_grid() {
    let params = three_by_three();
    let doc = generate(params.clone());
    let labels = labels(&doc);
    let (grid_width, grid_height) = params.footprint();

    let column_top = labels[2..5]
        .iter()
        .map(|l| ink_bounds(l).1)
        .fold(f64::MAX, f64::min);
    let (px0, _, px1, py1) = ink_bounds(labels[0]);
    assert!(py1 < column_top, "power title overlaps column labels");
    assert!(((px0 + px1) / 2.0 - grid_width / 2.0).abs() < 1.5);

    let row_left = labels[5..]
        .iter()
        .map(|l| ink_bounds(l).0)
        .fold(f64::MAX, f64::min);
    let (_, sy0, sx1, sy1) = ink_bounds(labels[1]);
    assert!(sx1 < row_left, "speed title overlaps row labels");
    assert!(((sy0 + sy1) / 2.0 - grid_height / 2.0).abs() < 1.5);
    // reads bottom to top: taller than wide
    let (sx0, _, _, _) = ink_bounds(labels[1]);
    assert!(sy1 - sy0 > sx1 - sx0);
}

#[test]
fn test_label_glyphs_are_not_stacked() {
    let doc = generate(three_by_three());
    let labels = labels(&doc);
    // "SPEED (mm/s)" at 14pt is several centimeters long, not one glyph wide
    let (_, sy0, _, sy1) = ink_bounds(labels[1]);
    assert!(sy1 - sy0 > 15.0);
    let (px0, _, px1, _) = ink_bounds(labels[0]);
    assert!(px1 - px0 > 10.0);
}
