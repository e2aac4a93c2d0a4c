//! Benchmark profiles for the Gyre orbit layout.
//!
//! - [`BenchNode`]: the cheapest possible [`Placeable`].
//! - [`populated_system`]: a system filled from a seeded radius sequence.
//! - [`saturated_system`]: the nine-orbit saturating sequence.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gyre_core::{Placeable, Point};
use gyre_layout::{OrbitSystem, Positioning};
use gyre_test_utils::fixtures::{saturating_radius, seeded_radii};

/// Radius range for [`populated_system`].
pub const PROFILE_RADII: std::ops::Range<f64> = 1.0..24.0;

/// A bare circle with no bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct BenchNode {
    /// Circle radius.
    pub radius: f64,
    /// Last assigned position.
    pub position: Point,
}

impl BenchNode {
    /// A node at the origin.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            position: Point::ORIGIN,
        }
    }
}

impl Placeable for BenchNode {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn invalidate(&mut self) {}
}

/// `count` nodes with radii from [`PROFILE_RADII`], inserted with the
/// given positioning.
pub fn populated_system(
    seed: u64,
    count: usize,
    padding: f64,
    positioning: Positioning,
) -> OrbitSystem<BenchNode> {
    let mut system = OrbitSystem::new(padding).unwrap();
    for r in seeded_radii(seed, count, PROFILE_RADII) {
        system.add_object(BenchNode::new(r), positioning).unwrap();
    }
    system
}

/// 65 nodes: a 64-unit core followed by radii proportional to the
/// current system radius. Ends with nine orbits.
pub fn saturated_system(padding: f64) -> OrbitSystem<BenchNode> {
    let mut system = OrbitSystem::new(padding).unwrap();
    system
        .add_object(BenchNode::new(64.0), Positioning::Immediate)
        .unwrap();
    for _ in 1..65 {
        let r = saturating_radius(system.radius());
        system
            .add_object(BenchNode::new(r), Positioning::Immediate)
            .unwrap();
    }
    system
}
