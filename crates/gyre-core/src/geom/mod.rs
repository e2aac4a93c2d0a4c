//! 2D geometry primitives and ring arc math.
//!
//! - [`Point`]: a coordinate pair with value semantics.
//! - [`Vector`]: a [`Point`] plus derived quantities (length, unit, dot, cross).
//! - [`arc`]: half-angle and polar helpers used by ring packing.

pub mod arc;
mod point;
mod vector;

pub use point::Point;
pub use vector::Vector;
