//! # Vessel Geometry
//!
//! The fixed geometry of the vertical vessel for one run: how high the shell
//! base sits above the foundation, the shell radius, and the straight-shell
//! length. Heads are described per attachment, not here.
//!
//! ## Coordinate System
//!
//! ```text
//!            +Y (up, vessel axis)
//!             |
//!             |      0° orientation points along -Z
//!             o----- +X
//!            /
//!          +Z
//! ```
//!
//! The origin is the foundation reference point on the vessel axis. All
//! moments are reported about this point.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Upper bound for `support_height_m` (m)
pub const MAX_SUPPORT_HEIGHT_M: f64 = 100.0;

/// Upper bound for `radius_m` (m)
pub const MAX_RADIUS_M: f64 = 10.0;

/// Upper bound for `cylinder_length_m` (m)
pub const MAX_CYLINDER_LENGTH_M: f64 = 100.0;

/// Vessel geometry, set once per run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "support_height_m": 1.0,
///   "radius_m": 1.0,
///   "cylinder_length_m": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselGeometry {
    /// Elevation of the shell base (bottom tangent line) above the foundation
    pub support_height_m: f64,

    /// Shell radius R
    pub radius_m: f64,

    /// Straight-shell length L (tangent to tangent)
    pub cylinder_length_m: f64,
}

impl VesselGeometry {
    pub fn new(support_height_m: f64, radius_m: f64, cylinder_length_m: f64) -> Self {
        VesselGeometry {
            support_height_m,
            radius_m,
            cylinder_length_m,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(0.0..=MAX_SUPPORT_HEIGHT_M).contains(&self.support_height_m) {
            return Err(CalcError::invalid_input(
                "support_height_m",
                self.support_height_m.to_string(),
                format!("Support height must be between 0 and {} m", MAX_SUPPORT_HEIGHT_M),
            ));
        }
        if !(self.radius_m > 0.0 && self.radius_m <= MAX_RADIUS_M) {
            return Err(CalcError::invalid_input(
                "radius_m",
                self.radius_m.to_string(),
                format!("Radius must be positive and at most {} m", MAX_RADIUS_M),
            ));
        }
        if !(0.0..=MAX_CYLINDER_LENGTH_M).contains(&self.cylinder_length_m) {
            return Err(CalcError::invalid_input(
                "cylinder_length_m",
                self.cylinder_length_m.to_string(),
                format!("Cylinder length must be between 0 and {} m", MAX_CYLINDER_LENGTH_M),
            ));
        }
        Ok(())
    }

    /// Elevation of the top tangent line (base of the top head)
    pub fn top_tangent_m(&self) -> f64 {
        self.support_height_m + self.cylinder_length_m
    }

    /// Elevation of the bottom tangent line (base of the bottom head)
    pub fn bottom_tangent_m(&self) -> f64 {
        self.support_height_m
    }
}

impl Default for VesselGeometry {
    fn default() -> Self {
        VesselGeometry::new(1.0, 1.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(VesselGeometry::default().validate().is_ok());
    }

    #[test]
    fn test_tangent_lines() {
        let vessel = VesselGeometry::new(2.0, 1.5, 8.0);
        assert_eq!(vessel.bottom_tangent_m(), 2.0);
        assert_eq!(vessel.top_tangent_m(), 10.0);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let vessel = VesselGeometry::new(0.0, 0.0, 10.0);
        let err = vessel.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_support_height_rejected() {
        assert!(VesselGeometry::new(-0.1, 1.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(VesselGeometry::new(0.0, f64::NAN, 10.0).validate().is_err());
        assert!(VesselGeometry::new(0.0, 1.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_upper_bounds() {
        assert!(VesselGeometry::new(100.0, 10.0, 100.0).validate().is_ok());
        assert!(VesselGeometry::new(0.0, 10.5, 10.0).validate().is_err());
        assert!(VesselGeometry::new(0.0, 1.0, 100.5).validate().is_err());
    }
}
