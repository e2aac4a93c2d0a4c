//! Error types for layout construction and placement.

use thiserror::Error;

/// Precondition failures rejected at the layout boundary.
///
/// Valid input never fails: placement always succeeds by opening new
/// orbits, and removal or lookup of unknown objects reports absence
/// rather than an error.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// An object reported a negative or non-finite radius.
    #[error("object radius must be finite and non-negative, got {radius}")]
    InvalidRadius {
        /// The offending radius.
        radius: f64,
    },
    /// Orbit padding is negative or non-finite.
    #[error("orbit padding must be finite and non-negative, got {padding}")]
    InvalidPadding {
        /// The offending padding.
        padding: f64,
    },
    /// Angle tolerance is negative or non-finite.
    #[error("angle tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance {
        /// The offending tolerance, in radians.
        tolerance: f64,
    },
}
