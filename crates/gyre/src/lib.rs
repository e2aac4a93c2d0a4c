//! Gyre: orbit-packing layout for circular objects.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gyre sub-crates. For most users, adding `gyre` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gyre::prelude::*;
//!
//! struct Bubble {
//!     radius: f64,
//!     at: Point,
//! }
//!
//! impl Placeable for Bubble {
//!     fn radius(&self) -> f64 { self.radius }
//!     fn position(&self) -> Point { self.at }
//!     fn set_position(&mut self, p: Point) { self.at = p; }
//!     fn invalidate(&mut self) {}
//! }
//!
//! let mut system = OrbitSystem::new(4.0).unwrap();
//! let core = system
//!     .add_object(Bubble { radius: 20.0, at: Point::ORIGIN }, Positioning::Immediate)
//!     .unwrap();
//! for _ in 0..10 {
//!     system
//!         .add_object(Bubble { radius: 6.0, at: Point::ORIGIN }, Positioning::Immediate)
//!         .unwrap();
//! }
//! assert_eq!(system.get(core).unwrap().position(), Point::ORIGIN);
//! assert_eq!(system.orbits()[1].inner_radius(), 24.0);
//!
//! // Padding changes are exactly reversible.
//! let before: Vec<Point> = system.iter().map(|(_, b)| b.position()).collect();
//! system.set_orbit_padding(10.0).unwrap();
//! system.set_orbit_padding(4.0).unwrap();
//! let after: Vec<Point> = system.iter().map(|(_, b)| b.position()).collect();
//! assert_eq!(before, after);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gyre-core` | Geometry, IDs, the `Placeable` trait |
//! | [`layout`] | `gyre-layout` | `OrbitSystem`, `Orbit`, config, events |
//! | [`observe`] | `gyre-observe` | Observer registry and `Observable` values |
//! | [`overlay`] | `gyre-overlay` | Debug guide circles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry, IDs and the placeable-object contract (`gyre-core`).
pub use gyre_core as types;

/// Orbit packing and overflow orchestration (`gyre-layout`).
///
/// [`layout::OrbitSystem`] is the entry point; [`layout::LayoutEvent`]s
/// report structural changes to scene graphs and overlays.
pub use gyre_layout as layout;

/// Observer registry and observable values (`gyre-observe`).
pub use gyre_observe as observe;

/// Debug guide circles (`gyre-overlay`).
pub use gyre_overlay as overlay;

/// Common imports for typical Gyre usage.
///
/// ```rust
/// use gyre::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gyre_core::{ObjectId, OrbitId, Placeable, Point, Vector};

    // Layout
    pub use gyre_layout::{
        LayoutConfig, LayoutError, LayoutEvent, LayoutSystem, Orbit, OrbitGeometry, OrbitKind,
        OrbitSystem, Positioning,
    };

    // Observation
    pub use gyre_observe::{Observable, ObserverId};

    // Overlay
    pub use gyre_overlay::{GuideCanvas, GuideLayer, GuideStyle, OrbitOverlay};
}
