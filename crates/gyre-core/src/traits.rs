//! The placeable-object contract.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geom::Point;

/// Anything a layout can place: a circle with a radius, a position the
/// layout assigns, and an invalidation hook.
///
/// The layout only reads [`radius`](Self::radius), writes the position
/// through [`move_to`](Self::move_to), and forwards
/// [`invalidate`](Self::invalidate). It never inspects anything else.
///
/// Positions are relative to the owning layout's center.
///
/// # Shared objects
///
/// `Rc<RefCell<T>>` implements `Placeable` whenever `T` does, so a scene
/// graph can keep its own handle to a node while the layout holds
/// another.
pub trait Placeable {
    /// Radius of the object's bounding circle. Must be finite and `>= 0`.
    fn radius(&self) -> f64;

    /// Current position of the object's center.
    fn position(&self) -> Point;

    /// Overwrite the position immediately.
    fn set_position(&mut self, position: Point);

    /// Move the object to `position`.
    ///
    /// `animated` asks a rendering collaborator for a visual transition.
    /// The transition is fire-and-forget: after this call returns,
    /// [`position`](Self::position) must already report the target value.
    /// The default ignores `animated`.
    fn move_to(&mut self, position: Point, animated: bool) {
        let _ = animated;
        self.set_position(position);
    }

    /// Mark the object as no longer interactive.
    fn invalidate(&mut self);
}

impl<T: Placeable + ?Sized> Placeable for Box<T> {
    fn radius(&self) -> f64 {
        (**self).radius()
    }

    fn position(&self) -> Point {
        (**self).position()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position);
    }

    fn move_to(&mut self, position: Point, animated: bool) {
        (**self).move_to(position, animated);
    }

    fn invalidate(&mut self) {
        (**self).invalidate();
    }
}

impl<T: Placeable + ?Sized> Placeable for Rc<RefCell<T>> {
    fn radius(&self) -> f64 {
        self.borrow().radius()
    }

    fn position(&self) -> Point {
        self.borrow().position()
    }

    fn set_position(&mut self, position: Point) {
        self.borrow_mut().set_position(position);
    }

    fn move_to(&mut self, position: Point, animated: bool) {
        self.borrow_mut().move_to(position, animated);
    }

    fn invalidate(&mut self) {
        self.borrow_mut().invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot {
        radius: f64,
        position: Point,
        animated_moves: usize,
        invalidated: bool,
    }

    impl Dot {
        fn new(radius: f64) -> Self {
            Self {
                radius,
                position: Point::ORIGIN,
                animated_moves: 0,
                invalidated: false,
            }
        }
    }

    impl Placeable for Dot {
        fn radius(&self) -> f64 {
            self.radius
        }

        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
        }

        fn move_to(&mut self, position: Point, animated: bool) {
            if animated {
                self.animated_moves += 1;
            }
            self.position = position;
        }

        fn invalidate(&mut self) {
            self.invalidated = true;
        }
    }

    #[test]
    fn shared_handle_forwards_to_inner() {
        let node = Rc::new(RefCell::new(Dot::new(4.0)));
        let mut handle = Rc::clone(&node);

        assert_eq!(handle.radius(), 4.0);
        handle.move_to(Point::new(1.0, 2.0), true);
        handle.invalidate();

        let inner = node.borrow();
        assert_eq!(inner.position, Point::new(1.0, 2.0));
        assert_eq!(inner.animated_moves, 1);
        assert!(inner.invalidated);
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let mut boxed: Box<dyn Placeable> = Box::new(Dot::new(2.0));
        boxed.set_position(Point::new(-1.0, 0.5));
        assert_eq!(boxed.radius(), 2.0);
        assert_eq!(boxed.position(), Point::new(-1.0, 0.5));
    }

    #[test]
    fn default_move_to_sets_position() {
        struct Plain(Point);
        impl Placeable for Plain {
            fn radius(&self) -> f64 {
                1.0
            }
            fn position(&self) -> Point {
                self.0
            }
            fn set_position(&mut self, position: Point) {
                self.0 = position;
            }
            fn invalidate(&mut self) {}
        }

        let mut p = Plain(Point::ORIGIN);
        p.move_to(Point::new(3.0, 3.0), true);
        assert_eq!(p.position(), Point::new(3.0, 3.0));
    }
}
