//! Layout invariant test helpers.
//!
//! These functions verify that an [`OrbitSystem`] satisfies the
//! invariants its operations promise. Reused by the orbit and system
//! test modules after every kind of mutation.

use gyre_core::{Placeable, Point};
use indexmap::IndexSet;

use crate::orbit::OrbitKind;
use crate::system::OrbitSystem;

/// Slack for comparing derived floating-point distances.
const EPS: f64 = 1e-6;

/// Assert the orbit chain: core at index 0 with inner radius 0, every
/// later orbit starting at the previous radius plus padding.
pub fn assert_orbit_chain<P: Placeable>(system: &OrbitSystem<P>) {
    let orbits = system.orbits();
    assert!(!orbits.is_empty(), "system has no orbits");
    assert_eq!(orbits[0].kind(), OrbitKind::Core, "orbit 0 is not the core");
    assert_eq!(orbits[0].inner_radius(), 0.0, "core inner radius is not 0");
    for (i, pair) in orbits.windows(2).enumerate() {
        let expected = pair[0].radius() + system.orbit_padding();
        assert_eq!(
            pair[1].inner_radius(),
            expected,
            "orbit {} inner radius {} != orbit {i} radius {} + padding {}",
            i + 1,
            pair[1].inner_radius(),
            pair[0].radius(),
            system.orbit_padding()
        );
        assert_eq!(pair[1].kind(), OrbitKind::Ring, "orbit {} is not a ring", i + 1);
    }
}

/// Assert that the system radius is the outermost orbit's radius.
pub fn assert_radius_is_outermost<P: Placeable>(system: &OrbitSystem<P>) {
    let last = system.orbits().last().map_or(0.0, |o| o.radius());
    assert_eq!(system.radius(), last, "system radius != outermost orbit radius");
}

/// Assert every object appears exactly once and the counts agree.
pub fn assert_membership_consistent<P: Placeable>(system: &OrbitSystem<P>) {
    let mut seen = IndexSet::new();
    system.for_each(|id, _| {
        assert!(seen.insert(id), "object {id} visited twice");
    });
    assert_eq!(seen.len(), system.object_count(), "for_each count != object_count");

    let per_orbit: usize = system.orbits().iter().map(|o| o.object_count()).sum();
    assert_eq!(per_orbit, system.object_count(), "orbit counts != object_count");

    for id in &seen {
        assert!(system.contains_object(*id), "visited {id} not contained");
        let owners = system
            .orbits()
            .iter()
            .filter(|o| o.contains_object(*id))
            .count();
        assert_eq!(owners, 1, "object {id} owned by {owners} orbits");
    }
}

/// Assert that no two placed circles overlap and every object sits
/// within its orbit's bounds.
///
/// Only meaningful after positions have been computed.
pub fn assert_no_overlap<P: Placeable>(system: &OrbitSystem<P>) {
    let mut circles: Vec<(Point, f64)> = Vec::with_capacity(system.object_count());
    for orbit in system.orbits() {
        orbit.for_each(|id, object| {
            let distance = object.position().distance_to(Point::ORIGIN);
            let near = (distance - object.radius()).max(0.0);
            assert!(
                near >= orbit.inner_radius() - EPS,
                "object {id} crosses inner boundary of orbit {}",
                orbit.id()
            );
            assert!(
                distance + object.radius() <= orbit.radius() + EPS,
                "object {id} crosses outer boundary of orbit {}",
                orbit.id()
            );
            circles.push((object.position(), object.radius()));
        });
    }
    for (i, (pa, ra)) in circles.iter().enumerate() {
        for (pb, rb) in &circles[i + 1..] {
            let d = pa.distance_to(*pb);
            assert!(
                d + EPS >= ra + rb,
                "circles at {pa} (r={ra}) and {pb} (r={rb}) overlap, distance {d}"
            );
        }
    }
}

/// Run every structural check.
pub fn run_structural_compliance<P: Placeable>(system: &OrbitSystem<P>) {
    assert_orbit_chain(system);
    assert_radius_is_outermost(system);
    assert_membership_consistent(system);
}

/// Run every check, including placement.
pub fn run_full_compliance<P: Placeable>(system: &OrbitSystem<P>) {
    run_structural_compliance(system);
    assert_no_overlap(system);
}
