//! The drawing surface the overlay renders onto.

use gyre_core::Point;

use crate::style::GuideStyle;

/// A surface that can draw and remove circle outlines.
///
/// Implemented by the host's rendering layer. Coordinates share the
/// layout's frame: the layout origin is the center of every guide.
pub trait GuideCanvas {
    /// Handle to a drawn shape.
    type Shape;

    /// Draw a circle and return its handle.
    fn draw_circle(&mut self, center: Point, radius: f64, style: &GuideStyle) -> Self::Shape;

    /// Remove a shape previously returned by
    /// [`draw_circle`](Self::draw_circle).
    fn remove_shape(&mut self, shape: Self::Shape);
}
