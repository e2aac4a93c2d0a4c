//! Core types and traits for the Gyre layout framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Gyre workspace:
//! 2D geometry primitives, handle types, and the [`Placeable`] contract
//! every layout participant satisfies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geom;
pub mod id;
pub mod traits;

pub use geom::{Point, Vector};
pub use id::{ObjectId, OrbitId};
pub use traits::Placeable;
