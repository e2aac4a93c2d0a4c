//! Layout change notifications.
//!
//! A scene graph keeps one grouping node per orbit by reacting to
//! [`LayoutEvent::OrbitAttached`] and [`LayoutEvent::OrbitDetached`];
//! presentational observers (guide circles) redraw from
//! [`LayoutEvent::GeometryChanged`].

use gyre_core::OrbitId;

use crate::orbit::OrbitKind;

/// Radii of one orbit, as exposed to presentational collaborators.
///
/// Carries no invariants back into the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitGeometry {
    /// The orbit's handle.
    pub id: OrbitId,
    /// Position in the orbit sequence (0 = core).
    pub index: usize,
    /// Core or ring.
    pub kind: OrbitKind,
    /// Boundary inherited from the previous orbit plus padding.
    pub inner_radius: f64,
    /// Radius at which object centers are placed.
    pub center_radius: f64,
    /// Outer boundary the next orbit must clear.
    pub radius: f64,
    /// Number of objects placed on the orbit.
    pub object_count: usize,
}

/// A structural or geometric change to a layout.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutEvent {
    /// A new orbit was opened (overflow or reset).
    OrbitAttached {
        /// Geometry of the new orbit when it was opened.
        orbit: OrbitGeometry,
    },
    /// An orbit was discarded (reset).
    OrbitDetached {
        /// Handle of the discarded orbit.
        id: OrbitId,
    },
    /// Orbit radii or membership may have changed. Sent once after every
    /// insertion, removal, reset, padding change or explicit reposition.
    GeometryChanged {
        /// Geometry of every orbit, innermost first.
        orbits: Vec<OrbitGeometry>,
    },
}
