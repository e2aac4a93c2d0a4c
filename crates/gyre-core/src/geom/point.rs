//! The [`Point`] value type.

use std::fmt;
use std::ops::{Add, Sub};

use super::Vector;

/// A position in 2D layout space.
///
/// Equality is by coordinates (`f64` semantics, so `NaN != NaN`).
/// Layout code only ever produces finite points.
///
/// # Examples
///
/// ```
/// use gyre_core::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.distance_to(Point::ORIGIN), 5.0);
/// assert_eq!(p + gyre_core::Vector::new(1.0, -1.0), Point::new(4.0, 3.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `distance` from the origin along `angle` (radians,
    /// counter-clockwise from the positive x axis).
    pub fn polar(distance: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(distance * cos, distance * sin)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        Vector::from_points(self, other).length()
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    /// `a - b` is the vector from `b` to `a`.
    fn sub(self, rhs: Point) -> Vector {
        Vector::from_points(rhs, self)
    }
}
