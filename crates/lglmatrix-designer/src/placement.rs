//! Affine placement of elements in document space.
//!
//! Matrices are exported as `[a, b, c, d, tx, ty]`, mapping a local point
//! `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`. The document's Y axis
//! points down.

use lyon::geom::euclid::default::{Point2D, Transform2D, Vector2D};
use lyon::geom::euclid::Angle;

/// Typographic points to millimeters.
pub const POINT_TO_MM: f64 = 25.4 / 72.0;

const SNAP_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    transform: Transform2D<f64>,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            transform: Transform2D::identity(),
        }
    }
}

impl Placement {
    /// Pure translation, used for rectangles centered on `(x, y)`.
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            transform: Transform2D::translation(x, y),
        }
    }

    /// Uniform scale with Y flipped, for Y-up glyph outlines.
    pub fn glyph(scale: f64) -> Self {
        Self {
            transform: Transform2D::scale(scale, -scale),
        }
    }

    /// Rotate by `degrees` after the current transform.
    pub fn then_rotate(self, degrees: f64) -> Self {
        Self {
            transform: self
                .transform
                .then(&Transform2D::rotation(Angle::degrees(degrees))),
        }
    }

    /// Translate by `(x, y)` after the current transform.
    pub fn then_translate(self, x: f64, y: f64) -> Self {
        Self {
            transform: self.transform.then_translate(Vector2D::new(x, y)),
        }
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.transform.transform_point(Point2D::new(x, y));
        (p.x, p.y)
    }

    /// `[a, b, c, d, tx, ty]` with rounding noise from rotations snapped to zero.
    pub fn to_matrix(&self) -> [f64; 6] {
        self.transform
            .to_array()
            .map(|v| if v.abs() < SNAP_EPSILON { 0.0 } else { v })
    }
}
