use lglmatrix_camtools::{GridBuilder, MatrixParameters, PowerSpeedMatrix};
use lglmatrix_core::{ElementType, LayerMode, ProcessMethod};
use proptest::prelude::*;

use crate::support::BoxOutliner;

fn params_strategy() -> impl Strategy<Value = MatrixParameters> {
    (
        1u32..12,
        1u32..12,
        0u32..20,
        1u32..10,
        1.0f64..500.0,
        1.0f64..100.0,
        0.5f64..20.0,
        0.0f64..5.0,
    )
        .prop_map(
            |(columns, rows, power_min, power_increment, speed_min, speed_increment, w, s)| {
                MatrixParameters {
                    columns,
                    rows,
                    power_min,
                    power_increment,
                    speed_min,
                    speed_increment,
                    tile_width: w,
                    spacing: s,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn produces_one_layer_per_shape(params in params_strategy()) {
        let doc = PowerSpeedMatrix::new(params.clone())
            .unwrap()
            .generate(&BoxOutliner)
            .unwrap()
            .document;

        let shapes = doc
            .elements
            .iter()
            .filter(|e| e.element_type == ElementType::ShapeRect)
            .count();
        let expected = (params.columns * params.rows) as usize;
        prop_assert_eq!(shapes, expected);
        prop_assert_eq!(doc.layers.len(), expected + 1);
        prop_assert!(doc.validate().is_ok());
    }

    #[test]
    fn power_follows_columns_speed_follows_rows(params in params_strategy()) {
        let grid = GridBuilder::new(&params).build();
        for a in &grid.cells {
            for b in &grid.cells {
                if a.column == b.column {
                    prop_assert_eq!(a.power, b.power);
                }
                if a.column < b.column {
                    prop_assert!(a.power <= b.power);
                }
                if a.row == b.row {
                    prop_assert_eq!(a.speed, b.speed);
                }
                if a.row < b.row {
                    prop_assert!(a.speed >= b.speed);
                }
            }
        }
    }

    #[test]
    fn lattice_is_regular(params in params_strategy()) {
        let pitch = params.tile_width + params.spacing;
        for i in 1..params.columns.max(params.rows) {
            let step = params.tile_center(i) - params.tile_center(i - 1);
            prop_assert!((step - pitch).abs() < 1e-9);
        }
        let grid = GridBuilder::new(&params).build();
        for pair in grid.cells.windows(2) {
            if pair[0].column == pair[1].column {
                prop_assert!((pair[1].y - pair[0].y - pitch).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn fill_with_cut_always_becomes_line(params in params_strategy()) {
        let params = MatrixParameters {
            mode: LayerMode::Fill,
            process_method: ProcessMethod::Cut,
            ..params
        };
        let grid = GridBuilder::new(&params).build();
        prop_assert!(grid.layers().all(|l| l.mode == LayerMode::Line));
    }
}
