//! Test utilities and mock types for Gyre development.
//!
//! Provides [`MockNode`], a recording implementation of
//! [`Placeable`], and seeded fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use gyre_core::{Placeable, Point};

/// Shared handle to a [`MockNode`], so a test can inspect a node while a
/// layout owns it.
pub type SharedNode = Rc<RefCell<MockNode>>;

/// Mock implementation of [`Placeable`].
///
/// Records every move and invalidation so tests can assert what the
/// layout did without a scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct MockNode {
    pub radius: f64,
    pub position: Point,
    pub invalidated: bool,
    /// Total calls to `move_to`.
    pub moves: usize,
    /// Calls to `move_to` with `animated = true`.
    pub animated_moves: usize,
}

impl MockNode {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            position: Point::ORIGIN,
            invalidated: false,
            moves: 0,
            animated_moves: 0,
        }
    }

    pub fn shared(radius: f64) -> SharedNode {
        Rc::new(RefCell::new(Self::new(radius)))
    }
}

impl Placeable for MockNode {
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
        self.moves += 1;
        if animated {
            self.animated_moves += 1;
        }
        self.position = position;
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }
}
