//! Geometry and color primitives shared by the Lark crates.

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
