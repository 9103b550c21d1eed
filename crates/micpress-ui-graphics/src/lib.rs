//! Pure math/data for drawing & units in Micpress
//!
//! Geometry primitives and color definitions shared by the input and
//! feedback layers. No behavior lives here.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;
