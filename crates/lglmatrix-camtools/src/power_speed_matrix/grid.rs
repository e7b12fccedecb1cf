//! Tile grid generation.

use lglmatrix_core::{per_minute, Element, Layer, LayerMode};
use lglmatrix_designer::Placement;

use super::types::{MatrixParameters, MatrixWarning, SortPolicy};

/// One power/speed combination.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
    /// Tile center (mm, Y down)
    pub x: f64,
    pub y: f64,
    pub power: u32,
    /// mm/s
    pub speed: f64,
    pub layer: Layer,
    pub element: Element,
}

/// Cells in output order plus anything worth telling the operator.
#[derive(Debug, Clone, Default)]
pub struct GridOutput {
    pub cells: Vec<GridCell>,
    pub warnings: Vec<MatrixWarning>,
}

impl GridOutput {
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.cells.iter().map(|cell| &cell.layer)
    }

    /// Split into parallel layer and element lists, order preserved.
    pub fn into_parts(self) -> (Vec<Layer>, Vec<Element>) {
        self.cells
            .into_iter()
            .map(|cell| (cell.layer, cell.element))
            .unzip()
    }
}

/// Enumerates the tile matrix.
///
/// Cells come out column by column (power outer, speed inner).
pub struct GridBuilder<'a> {
    params: &'a MatrixParameters,
}

impl<'a> GridBuilder<'a> {
    pub fn new(params: &'a MatrixParameters) -> Self {
        Self { params }
    }

    pub fn build(&self) -> GridOutput {
        let p = self.params;
        let mut output = GridOutput::default();

        let mode = p.effective_mode();
        if mode != p.mode {
            tracing::warn!(
                mode = %p.mode,
                process_method = %p.process_method,
                "{}",
                MatrixWarning::FillCoercedToLine
            );
            output.warnings.push(MatrixWarning::FillCoercedToLine);
        }

        output.cells.reserve((p.columns as usize) * (p.rows as usize));
        for column in 0..p.columns {
            for row in 0..p.rows {
                let order = match p.sort_policy {
                    SortPolicy::Constant => 0,
                    SortPolicy::Sequential => output.cells.len() as u32,
                };
                output.cells.push(self.cell(column, row, mode, order));
            }
        }

        tracing::debug!(tiles = output.cells.len(), %mode, "Grid built");
        output
    }

    fn cell(&self, column: u32, row: u32, mode: LayerMode, order: u32) -> GridCell {
        let p = self.params;
        let x = p.tile_center(column);
        let y = p.tile_center(row);
        let power = p.power_at(column);
        let speed = p.speed_at(row);

        tracing::debug!(column, row, x, y, power, speed, "Tile");

        let layer = Layer::builder(format!("P:{},S:{}", power, speed))
            .size(p.tile_width, p.tile_width)
            .power(power)
            .speed(per_minute(speed))
            .quality(p.quality)
            .mode(mode)
            .process_method(p.process_method)
            .laser_type(p.laser_type.trim())
            .sort(order)
            .build();

        let element = Element::rect(&layer, p.tile_width, p.tile_width)
            .transform(Placement::translation(x, y).to_matrix())
            .build();

        GridCell {
            column,
            row,
            x,
            y,
            power,
            speed,
            layer,
            element,
        }
    }
}
