use lglmatrix_core::{Document, Element, LaserArea, Layer, TextContent};

fn build_document() -> Document {
    let tile = Layer::builder("P:5,S:3000").size(2.0, 2.0).power(5).speed(180_000.0).build();
    let labels = Layer::builder("Labels").color("#000000").build();
    let rect = Element::rect(&tile, 2.0, 2.0).at(1.5, 1.5).build();
    let text = Element::text(&labels, TextContent::new("5%", "M 0 0 L 1 1 Z", "Sans", 10.0))
        .transform([0.35, 0.0, 0.0, -0.35, 1.0, -1.0])
        .out_of_work_space(true)
        .build();
    Document::new(LaserArea::new(400, 400), vec![tile, labels], vec![rect, text])
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("matrix.lgl");

    let doc = build_document();
    doc.save_to_file(&path).expect("save failed");

    let content = std::fs::read_to_string(&path).expect("read failed");
    let loaded = Document::from_json(&content).expect("parse failed");

    assert_eq!(loaded, doc);
    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.elements_on(&doc.layers[1].id).count(), 1);
}

#[cfg(unix)]
#[test]
fn test_saved_file_is_owner_writable_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("perm.lgl");
    build_document().save_to_file(&path).expect("save failed");

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode & 0o200, 0o200);
    assert_eq!(mode & 0o022, 0);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("matrix.lgl");
    assert!(build_document().save_to_file(&path).is_err());
    assert!(!path.exists());
}
