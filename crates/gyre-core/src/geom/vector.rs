//! The [`Vector`] type: a [`Point`] with derived vector operations.

use std::fmt;
use std::ops::{Add, Deref, Mul, Neg, Sub};

use super::Point;

/// A 2D displacement.
///
/// `Vector` wraps a [`Point`] and derefs to it, so `v.x` and `v.y` read
/// the components directly. It adds the derived quantities a bare point
/// does not have: length, unit direction, dot and cross products.
///
/// # Degenerate input
///
/// [`unit`](Vector::unit) of a zero-length vector is the zero vector,
/// never a `NaN` pair.
///
/// # Examples
///
/// ```
/// use gyre_core::{Point, Vector};
///
/// let v = Vector::from_points(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.unit(), Vector::new(0.6, 0.8));
/// assert_eq!(Vector::ZERO.unit(), Vector::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector(Point);

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector(Point::ORIGIN);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Point::new(x, y))
    }

    /// The vector from `from` to `to` (`to - from`).
    pub fn from_points(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Squared length. Cheaper than [`length`](Self::length) for comparisons.
    pub fn length_sq(self) -> f64 {
        self.0.x * self.0.x + self.0.y * self.0.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Unit vector with the same direction, or [`Vector::ZERO`] when this
    /// vector has zero length.
    pub fn unit(self) -> Vector {
        let length = self.length();
        if length == 0.0 {
            return Vector::ZERO;
        }
        Vector::new(self.0.x / length, self.0.y / length)
    }

    /// Dot product.
    pub fn dot(self, other: Vector) -> f64 {
        self.0.x * other.0.x + self.0.y * other.0.y
    }

    /// Scalar 2D cross product (`z` component of the 3D cross product).
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: Vector) -> f64 {
        self.0.x * other.0.y - self.0.y * other.0.x
    }

    /// Direction in radians, in `(-pi, pi]`. The zero vector has angle 0.
    pub fn angle(self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// The underlying point (the vector's tip when drawn from the origin).
    pub fn to_point(self) -> Point {
        self.0
    }
}

impl Deref for Vector {
    type Target = Point;

    fn deref(&self) -> &Point {
        &self.0
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self(point)
    }
}

impl From<Vector> for Point {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.0.x, self.0.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.0.x + rhs.0.x, self.0.y + rhs.0.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.0.x - rhs.0.x, self.0.y - rhs.0.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.0.x, -self.0.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.0.x * rhs, self.0.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_points_is_to_minus_from() {
        let v = Vector::from_points(Point::new(2.0, -1.0), Point::new(-1.0, 3.0));
        assert_eq!(v, Vector::new(-3.0, 4.0));
        assert_eq!(v.length_sq(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn unit_of_zero_is_zero() {
        let u = Vector::ZERO.unit();
        assert_eq!(u, Vector::ZERO);
        assert!(u.is_finite());
    }

    #[test]
    fn dot_and_cross_of_axes() {
        let x = Vector::new(1.0, 0.0);
        let y = Vector::new(0.0, 1.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.dot(x), 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
    }

    #[test]
    fn deref_exposes_components() {
        let v = Vector::new(1.5, 2.5);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.y, 2.5);
        assert!(v.is_finite());
    }

    #[test]
    fn operators() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -1.0);
        assert_eq!(a + b, Vector::new(4.0, 1.0));
        assert_eq!(a - b, Vector::new(-2.0, 3.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
    }

    #[test]
    fn angle_of_axes() {
        assert_eq!(Vector::new(1.0, 0.0).angle(), 0.0);
        assert_eq!(Vector::new(0.0, 1.0).angle(), std::f64::consts::FRAC_PI_2);
        assert_eq!(Vector::ZERO.angle(), 0.0);
    }

    proptest! {
        #[test]
        fn unit_has_length_one_or_zero(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let v = Vector::new(x, y);
            let len = v.unit().length();
            if v.length() == 0.0 {
                prop_assert_eq!(len, 0.0);
            } else {
                prop_assert!((len - 1.0).abs() < 1e-12, "|unit| = {}", len);
            }
        }

        #[test]
        fn cross_is_antisymmetric(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
        ) {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            prop_assert_eq!(a.cross(b), -b.cross(a));
            prop_assert_eq!(a.dot(b), b.dot(a));
        }
    }
}
