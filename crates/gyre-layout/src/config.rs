//! Layout configuration parameters.

use crate::error::LayoutError;

/// Configuration for an [`OrbitSystem`](crate::OrbitSystem).
///
/// Validated when the system is built. Padding can be changed later
/// through [`OrbitSystem::set_orbit_padding`](crate::OrbitSystem::set_orbit_padding);
/// the other values are fixed for the life of the system.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Radial gap between one orbit's outer radius and the next orbit's
    /// inner radius.
    ///
    /// Default: 0. Must be finite and `>= 0`.
    pub orbit_padding: f64,

    /// Slack, in radians, allowed when deciding whether a ring's arcs fit
    /// in one revolution.
    ///
    /// Absorbs rounding in configurations that fit exactly (six equal
    /// circles around a seventh). Default: `1e-9`. Must be finite and
    /// `>= 0`.
    pub angle_tolerance: f64,

    /// Whether repositioning caused by the layout itself (insertion,
    /// removal, padding changes) asks objects for an animated move.
    ///
    /// Explicit [`position_objects`](crate::OrbitSystem::position_objects)
    /// calls choose per call. Default: `false`.
    pub animate_transitions: bool,
}

impl LayoutConfig {
    /// Default orbit padding.
    pub const DEFAULT_ORBIT_PADDING: f64 = 0.0;

    /// Default angle tolerance in radians.
    pub const DEFAULT_ANGLE_TOLERANCE: f64 = 1e-9;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            orbit_padding: Self::DEFAULT_ORBIT_PADDING,
            angle_tolerance: Self::DEFAULT_ANGLE_TOLERANCE,
            animate_transitions: false,
        }
    }

    /// Set the orbit padding.
    pub fn with_orbit_padding(mut self, padding: f64) -> Self {
        self.orbit_padding = padding;
        self
    }

    /// Set the angle tolerance.
    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Enable or disable animated layout transitions.
    pub fn with_animate_transitions(mut self, animate: bool) -> Self {
        self.animate_transitions = animate;
        self
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_padding(self.orbit_padding)?;
        if !self.angle_tolerance.is_finite() || self.angle_tolerance < 0.0 {
            return Err(LayoutError::InvalidTolerance {
                tolerance: self.angle_tolerance,
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Padding must be finite and non-negative.
pub(crate) fn validate_padding(padding: f64) -> Result<(), LayoutError> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(LayoutError::InvalidPadding { padding });
    }
    Ok(())
}
