use lglmatrix_camtools::{
    CamToolError, GridBuilder, LabelAnnotator, MatrixParameters, PowerSpeedMatrix, SortPolicy,
};
use lglmatrix_core::{Document, ElementType, LayerMode, ProcessMethod};

use crate::support::{BoxOutliner, NoFontOutliner};

fn two_by_two() -> MatrixParameters {
    MatrixParameters {
        columns: 2,
        rows: 2,
        tile_width: 2.0,
        spacing: 0.5,
        power_min: 5,
        power_increment: 5,
        speed_min: 3000.0,
        speed_increment: 200.0,
        ..Default::default()
    }
}

#[test]
fn test_two_by_two_document() {
    let output = PowerSpeedMatrix::new(two_by_two())
        .unwrap()
        .generate(&BoxOutliner)
        .unwrap();
    let doc = output.document;

    let shapes: Vec<_> = doc
        .elements
        .iter()
        .filter(|e| e.element_type == ElementType::ShapeRect)
        .collect();
    assert_eq!(shapes.len(), 4);

    let mut powers = Vec::new();
    let mut speeds = Vec::new();
    for shape in &shapes {
        let layer = doc.layer(&shape.layer_id).expect("shape layer present");
        powers.push(layer.laser_power);
        speeds.push(layer.laser_speed / 60.0);
    }
    assert_eq!(powers, vec![5, 5, 10, 10]);
    assert_eq!(speeds, vec![3200.0, 3000.0, 3200.0, 3000.0]);

    let positions: Vec<(f64, f64)> = shapes.iter().map(|s| s.position()).collect();
    assert_eq!(
        positions,
        vec![(1.5, 1.5), (1.5, 4.0), (4.0, 1.5), (4.0, 4.0)]
    );
}

#[test]
fn test_one_annotation_layer_shared_by_text_only() {
    let doc = PowerSpeedMatrix::new(two_by_two())
        .unwrap()
        .generate(&BoxOutliner)
        .unwrap()
        .document;

    let text_layers: std::collections::HashSet<&str> = doc
        .elements
        .iter()
        .filter(|e| e.element_type == ElementType::Text)
        .map(|e| e.layer_id.as_str())
        .collect();
    assert_eq!(text_layers.len(), 1);

    let label_layer = *text_layers.iter().next().unwrap();
    assert!(doc
        .elements
        .iter()
        .filter(|e| e.element_type == ElementType::ShapeRect)
        .all(|e| e.layer_id != label_layer));

    // every shape has its own layer
    let shape_layers: std::collections::HashSet<&str> = doc
        .elements
        .iter()
        .filter(|e| e.element_type == ElementType::ShapeRect)
        .map(|e| e.layer_id.as_str())
        .collect();
    assert_eq!(shape_layers.len(), 4);
    assert_eq!(doc.layers.len(), 5);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.lgl");

    let doc = PowerSpeedMatrix::new(MatrixParameters {
        columns: 5,
        rows: 4,
        ..Default::default()
    })
    .unwrap()
    .generate(&BoxOutliner)
    .unwrap()
    .document;
    doc.save_to_file(&path).unwrap();

    let reloaded = Document::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded.layers.len(), doc.layers.len());
    assert_eq!(reloaded.elements.len(), doc.elements.len());
    for (a, b) in reloaded.layers.iter().zip(&doc.layers) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.laser_power, b.laser_power);
        assert!((a.laser_speed - b.laser_speed).abs() < 1e-9);
    }
    for (a, b) in reloaded.elements.iter().zip(&doc.elements) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.layer_id, b.layer_id);
        for (x, y) in a.transform_matrix.iter().zip(b.transform_matrix.iter()) {
            assert!((x - y).abs() < 1e-9);
        }
    }
}

#[test]
fn test_labels_are_idempotent() {
    let params = two_by_two();
    let (layers, _) = GridBuilder::new(&params).build().into_parts();
    let annotator = LabelAnnotator::new(&params, &BoxOutliner);

    let first = annotator.annotate(&layers).unwrap();
    let second = annotator.annotate(&layers).unwrap();

    assert_ne!(first.layer.id, second.layer.id);
    assert_eq!(first.elements.len(), second.elements.len());
    for (a, b) in first.elements.iter().zip(&second.elements) {
        assert_eq!(a.text, b.text);
        assert_eq!(a.transform_matrix, b.transform_matrix);
        assert_eq!((a.width, a.height), (b.width, b.height));
    }
}

#[test]
fn test_fill_cut_generates_line_layers() {
    let output = PowerSpeedMatrix::new(MatrixParameters {
        mode: LayerMode::Fill,
        process_method: ProcessMethod::Cut,
        ..two_by_two()
    })
    .unwrap()
    .generate(&BoxOutliner)
    .unwrap();

    assert_eq!(output.warnings.len(), 1);
    assert!(output.document.layers.iter().all(|l| l.mode == LayerMode::Line));
}

#[test]
fn test_unknown_laser_type_kept_verbatim() {
    let output = PowerSpeedMatrix::new(MatrixParameters {
        laser_type: "Plasma".to_string(),
        ..two_by_two()
    })
    .unwrap()
    .generate(&BoxOutliner)
    .unwrap();

    assert_eq!(output.warnings.len(), 1);
    assert!(output
        .document
        .layers
        .iter()
        .all(|l| l.laser_type == "Plasma"));
}

// Whether tiles should carry a running sort order or all zero is undecided;
// both behaviors are available and pinned here.
#[test]
fn test_sort_order_constant_policy_is_all_zero() {
    let doc = PowerSpeedMatrix::new(MatrixParameters {
        sort_policy: SortPolicy::Constant,
        ..two_by_two()
    })
    .unwrap()
    .generate(&BoxOutliner)
    .unwrap()
    .document;
    assert!(doc.layers.iter().all(|l| l.sort == 0));
}

#[test]
fn test_sort_order_sequential_policy_counts_up() {
    let doc = PowerSpeedMatrix::new(MatrixParameters {
        sort_policy: SortPolicy::Sequential,
        ..two_by_two()
    })
    .unwrap()
    .generate(&BoxOutliner)
    .unwrap()
    .document;
    let sorts: Vec<u32> = doc.layers[..4].iter().map(|l| l.sort).collect();
    assert_eq!(sorts, vec![0, 1, 2, 3]);
}

#[test]
fn test_missing_font_aborts_generation() {
    let err = PowerSpeedMatrix::new(two_by_two())
        .unwrap()
        .generate(&NoFontOutliner)
        .unwrap_err();
    assert!(matches!(err, CamToolError::Outline(_)));
}
