//! Orbit-packing layout for Gyre.
//!
//! This crate defines the [`LayoutSystem`] trait and its orbit-packing
//! implementation, [`OrbitSystem`]: circular objects are packed into
//! concentric, non-overlapping rings ([`Orbit`]s) around a shared
//! origin, and new rings are opened on demand when the outermost one is
//! full.
//!
//! # Placement model
//!
//! - The innermost orbit is the *core*: it holds one object, at the
//!   origin.
//! - Every other orbit is a *ring* whose inner radius is the previous
//!   orbit's outer radius plus the configured padding. Objects are
//!   centered on the ring and each occupies the angle its circle
//!   subtends at the origin.
//! - Positions are a pure function of the orbit radii and the ordered
//!   membership, so changing the padding and changing it back restores
//!   every position bit for bit.
//!
//! Layout changes are published as [`LayoutEvent`]s so a scene graph or
//! debug overlay can keep one node per orbit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod orbit;
pub mod system;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use event::{LayoutEvent, OrbitGeometry};
pub use layout::{LayoutSystem, Positioning};
pub use orbit::{Orbit, OrbitKind};
pub use system::OrbitSystem;
