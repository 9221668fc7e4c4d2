//! # Unit Types
//!
//! Lightweight newtype wrappers for the quantities that are easy to mix up.
//!
//! ## SI Units (Only)
//!
//! vessel_core works in a single fixed unit system:
//! - Length: meters (m)
//! - Force: newtons (N)
//! - Moment: newton-meters (N·m)
//! - Orientation: degrees at the boundary, radians inside the formulas
//!
//! Lengths, forces and moments stay plain `f64` fields with a unit suffix
//! (`offset_m`, `p_n`). Angles get wrappers because the degree/radian mix-up
//! is the one that silently produces plausible-looking wrong answers.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::units::{Degrees, Radians};
//!
//! let theta = Degrees(-90.0).normalized();
//! assert_eq!(theta.0, 270.0);
//!
//! let rad: Radians = Degrees(180.0).into();
//! assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Map onto the unsigned range [0, 360).
    ///
    /// Orientation angles are accepted in either signed or unsigned form at
    /// the boundary; inside the engine they are always unsigned.
    pub fn normalized(self) -> Self {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            Degrees(0.0)
        } else {
            Degrees(wrapped)
        }
    }
}

impl Radians {
    /// (sin, cos) of the angle
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}
