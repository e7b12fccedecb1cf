//! # LGL Matrix Designer
//!
//! Turns label text into vector outlines and places them on the document.
//!
//! - **Font manager**: system font discovery through `fontdb`, or an explicit font file
//! - **Text outlines**: glyph layout and outline extraction through `rusttype`,
//!   emitted as SVG path data
//! - **Placement**: affine transforms in `[a, b, c, d, tx, ty]` form

pub mod error;
pub mod font_manager;
pub mod placement;
pub mod text_outline;

pub use error::{OutlineError, Result};
pub use placement::{Placement, POINT_TO_MM};
pub use text_outline::{FontOutliner, TextOutliner, TextPath};
