//! # Attachments
//!
//! Nozzles and pipe supports welded to the vessel, each with its placement
//! and its loads in the attachment's own local frame.
//!
//! An [`Attachment`] is built once from user input and then only read. The
//! local load set is kind-specific, so the kind is carried by [`LocalLoads`]
//! and cannot drift out of sync with the loads.
//!
//! ## Local Load Sign Conventions
//!
//! | Location    | Component | Positive direction                              |
//! |-------------|-----------|-------------------------------------------------|
//! | Shell       | P         | outward from the shell                          |
//! | Shell       | VL        | vertically upward                               |
//! | Shell       | Vc        | tangential, right-hand thumb, turns clockwise   |
//! | Top head    | P         | upward                                          |
//! | Top head    | V1        | horizontally outward                            |
//! | Bottom head | P         | downward                                        |
//! | Bottom head | V1        | horizontally inward                             |
//! | Heads       | V2        | tangential, right-hand thumb, turns clockwise   |
//! | Pipe support| Fv        | vertically upward                               |
//! | Pipe support| Fh1 / Fh2 | radial outward / tangential as Vc               |
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::attachments::{Attachment, AttachmentKind, HeadShape, Location};
//!
//! let n1 = Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0);
//! let n2 = Attachment::head_nozzle(
//!     "N-2",
//!     Location::TopHead { shape: HeadShape::Ellipsoidal },
//!     0.2,
//!     90.0,
//!     50.0,
//!     0.0,
//!     0.0,
//! )
//! .with_aspect_ratio(2.0);
//! let ps = Attachment::pipe_support("PS-1", 3.0, 1.5, 180.0, -2000.0, 0.0, 0.0);
//!
//! assert_eq!(n1.kind(), AttachmentKind::Nozzle);
//! assert_eq!(n2.kind(), AttachmentKind::Nozzle);
//! assert_eq!(ps.kind(), AttachmentKind::PipeSupport);
//! ```

pub mod location;

pub use location::{HeadEnd, HeadShape, Location};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Degrees;
use crate::vessel::VesselGeometry;

/// Default major:minor axis ratio of an ellipsoidal head
pub const DEFAULT_ASPECT_RATIO: f64 = 2.0;

/// Smallest accepted ellipsoidal aspect ratio
pub const MIN_ASPECT_RATIO: f64 = 1.5;

/// Largest accepted ellipsoidal aspect ratio
pub const MAX_ASPECT_RATIO: f64 = 4.0;

/// How far beyond the shell radius a shell attachment may stand off (m)
pub const MAX_STANDOFF_M: f64 = 2.0;

fn default_aspect_ratio() -> f64 {
    DEFAULT_ASPECT_RATIO
}

/// Nozzle or pipe support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    Nozzle,
    PipeSupport,
}

impl AttachmentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            AttachmentKind::Nozzle => "Nozzle",
            AttachmentKind::PipeSupport => "Pipe Support",
        }
    }

    /// Prefix for generated tags ("N-1", "PS-1")
    pub fn tag_prefix(&self) -> &'static str {
        match self {
            AttachmentKind::Nozzle => "N",
            AttachmentKind::PipeSupport => "PS",
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Local load components (N), by attachment kind and location.
///
/// ## JSON Format
///
/// ```json
/// { "type": "ShellNozzle", "p_n": 100.0, "vc_n": 0.0, "vl_n": 0.0 }
/// { "type": "HeadNozzle", "p_n": 50.0, "v1_n": 0.0, "v2_n": 0.0 }
/// { "type": "PipeSupport", "fv_n": -2000.0, "fh1_n": 0.0, "fh2_n": 0.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LocalLoads {
    /// Nozzle on the shell
    ShellNozzle {
        /// Axial (radial to the shell)
        #[serde(default)]
        p_n: f64,
        /// Circumferential
        #[serde(default)]
        vc_n: f64,
        /// Longitudinal (vertical)
        #[serde(default)]
        vl_n: f64,
    },
    /// Nozzle on a head
    HeadNozzle {
        /// Axial (vertical)
        #[serde(default)]
        p_n: f64,
        /// Radial
        #[serde(default)]
        v1_n: f64,
        /// Circumferential
        #[serde(default)]
        v2_n: f64,
    },
    /// Pipe support on the shell
    PipeSupport {
        /// Vertical
        #[serde(default)]
        fv_n: f64,
        /// Radial
        #[serde(default)]
        fh1_n: f64,
        /// Circumferential
        #[serde(default)]
        fh2_n: f64,
    },
}

impl LocalLoads {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            LocalLoads::ShellNozzle { .. } | LocalLoads::HeadNozzle { .. } => AttachmentKind::Nozzle,
            LocalLoads::PipeSupport { .. } => AttachmentKind::PipeSupport,
        }
    }

    /// Component names and values, for validation messages
    fn components(&self) -> [(&'static str, f64); 3] {
        match *self {
            LocalLoads::ShellNozzle { p_n, vc_n, vl_n } => [("p_n", p_n), ("vc_n", vc_n), ("vl_n", vl_n)],
            LocalLoads::HeadNozzle { p_n, v1_n, v2_n } => [("p_n", p_n), ("v1_n", v1_n), ("v2_n", v2_n)],
            LocalLoads::PipeSupport { fv_n, fh1_n, fh2_n } => {
                [("fv_n", fv_n), ("fh1_n", fh1_n), ("fh2_n", fh2_n)]
            }
        }
    }
}

/// One nozzle or pipe support.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tag": "N-2",
///   "location": { "type": "TopHead", "shape": "Ellipsoidal" },
///   "offset_m": 0.3,
///   "theta": 90.0,
///   "aspect_ratio": 2.0,
///   "loads": { "type": "HeadNozzle", "p_n": 500.0, "v1_n": 120.0, "v2_n": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display identifier (e.g., "N-1", "PS-3")
    #[serde(default)]
    pub tag: String,

    /// Shell, top head or bottom head
    #[serde(default)]
    pub location: Location,

    /// Radial distance from the vessel centerline (m)
    #[serde(default)]
    pub offset_m: f64,

    /// Height above the shell base (m); shell attachments only
    #[serde(default)]
    pub elevation_m: f64,

    /// Orientation, 0° along global -Z, clockwise seen from above
    #[serde(default)]
    pub theta: Degrees,

    /// Ellipsoidal head major:minor ratio; ignored elsewhere
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,

    /// Local load components
    pub loads: LocalLoads,
}

impl Attachment {
    /// Nozzle on the shell at `elevation_m` above the shell base
    pub fn shell_nozzle(tag: impl Into<String>, elevation_m: f64, theta_deg: f64, p_n: f64, vc_n: f64, vl_n: f64) -> Self {
        Attachment {
            tag: tag.into(),
            location: Location::Shell,
            offset_m: 0.0,
            elevation_m,
            theta: Degrees(theta_deg),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            loads: LocalLoads::ShellNozzle { p_n, vc_n, vl_n },
        }
    }

    /// Nozzle on a head at `offset_m` from the centerline
    pub fn head_nozzle(
        tag: impl Into<String>,
        location: Location,
        offset_m: f64,
        theta_deg: f64,
        p_n: f64,
        v1_n: f64,
        v2_n: f64,
    ) -> Self {
        Attachment {
            tag: tag.into(),
            location,
            offset_m,
            elevation_m: 0.0,
            theta: Degrees(theta_deg),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            loads: LocalLoads::HeadNozzle { p_n, v1_n, v2_n },
        }
    }

    /// Pipe support on the shell
    pub fn pipe_support(
        tag: impl Into<String>,
        elevation_m: f64,
        offset_m: f64,
        theta_deg: f64,
        fv_n: f64,
        fh1_n: f64,
        fh2_n: f64,
    ) -> Self {
        Attachment {
            tag: tag.into(),
            location: Location::Shell,
            offset_m,
            elevation_m,
            theta: Degrees(theta_deg),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            loads: LocalLoads::PipeSupport { fv_n, fh1_n, fh2_n },
        }
    }

    /// Set the ellipsoidal aspect ratio (builder pattern)
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn kind(&self) -> AttachmentKind {
        self.loads.kind()
    }

    /// Check the kind/location pairing and the input ranges.
    ///
    /// Whether a head offset actually lands on the head is a geometry
    /// question and is answered by the position resolver.
    pub fn validate(&self, vessel: &VesselGeometry) -> CalcResult<()> {
        self.validate_combination()?;

        if !self.theta.0.is_finite() {
            return Err(CalcError::invalid_input(
                "theta",
                self.theta.0.to_string(),
                "Orientation must be a finite angle",
            ));
        }
        if !(self.offset_m >= 0.0 && self.offset_m.is_finite()) {
            return Err(CalcError::invalid_input(
                "offset_m",
                self.offset_m.to_string(),
                "Offset cannot be negative",
            ));
        }

        match self.location.head() {
            None => {
                let max_elevation = vessel.cylinder_length_m;
                if !(0.0..=max_elevation).contains(&self.elevation_m) {
                    return Err(CalcError::invalid_input(
                        "elevation_m",
                        self.elevation_m.to_string(),
                        format!("Elevation must be between 0 and the cylinder length ({} m)", max_elevation),
                    ));
                }
                let max_offset = vessel.radius_m + MAX_STANDOFF_M;
                if self.offset_m > max_offset {
                    return Err(CalcError::invalid_input(
                        "offset_m",
                        self.offset_m.to_string(),
                        format!("Shell offset cannot exceed R + {} m ({} m)", MAX_STANDOFF_M, max_offset),
                    ));
                }
            }
            Some((_, HeadShape::Ellipsoidal)) => {
                if !(MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&self.aspect_ratio) {
                    return Err(CalcError::invalid_input(
                        "aspect_ratio",
                        self.aspect_ratio.to_string(),
                        format!("Aspect ratio must be between {} and {}", MIN_ASPECT_RATIO, MAX_ASPECT_RATIO),
                    ));
                }
            }
            Some((_, HeadShape::Hemispherical)) => {}
        }

        for (field, value) in self.loads.components() {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Load must be a finite number"));
            }
        }

        Ok(())
    }

    fn validate_combination(&self) -> CalcResult<()> {
        match (&self.loads, self.location.is_shell()) {
            (LocalLoads::ShellNozzle { .. }, true)
            | (LocalLoads::HeadNozzle { .. }, false)
            | (LocalLoads::PipeSupport { .. }, true) => Ok(()),
            (LocalLoads::ShellNozzle { .. }, false) => Err(CalcError::invalid_combination(
                &self.tag,
                format!("Shell nozzle loads (P, Vc, VL) given for a nozzle on the {}", self.location),
            )),
            (LocalLoads::HeadNozzle { .. }, true) => Err(CalcError::invalid_combination(
                &self.tag,
                "Head nozzle loads (P, V1, V2) given for a nozzle on the Shell",
            )),
            (LocalLoads::PipeSupport { .. }, false) => Err(CalcError::invalid_combination(
                &self.tag,
                format!("Pipe supports attach to the shell only, not the {}", self.location),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel() -> VesselGeometry {
        VesselGeometry::new(0.0, 1.0, 10.0)
    }

    #[test]
    fn test_valid_attachments() {
        let v = vessel();
        assert!(Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0).validate(&v).is_ok());
        assert!(Attachment::pipe_support("PS-1", 3.0, 2.5, 90.0, 1.0, 2.0, 3.0).validate(&v).is_ok());
        let head = Attachment::head_nozzle(
            "N-2",
            Location::BottomHead { shape: HeadShape::Ellipsoidal },
            0.2,
            45.0,
            10.0,
            0.0,
            0.0,
        )
        .with_aspect_ratio(3.0);
        assert!(head.validate(&v).is_ok());
    }

    #[test]
    fn test_pipe_support_on_head_rejected() {
        let mut ps = Attachment::pipe_support("PS-1", 0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ps.location = Location::TopHead { shape: HeadShape::Hemispherical };
        let err = ps.validate(&vessel()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_COMBINATION");
        assert!(err.to_string().contains("PS-1"));
    }

    #[test]
    fn test_load_set_must_match_location() {
        let mut n = Attachment::shell_nozzle("N-1", 1.0, 0.0, 1.0, 0.0, 0.0);
        n.location = Location::BottomHead { shape: HeadShape::Ellipsoidal };
        assert_eq!(n.validate(&vessel()).unwrap_err().error_code(), "INVALID_COMBINATION");

        let h = Attachment::head_nozzle("N-2", Location::Shell, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(h.validate(&vessel()).unwrap_err().error_code(), "INVALID_COMBINATION");
    }

    #[test]
    fn test_elevation_bounded_by_cylinder_length() {
        let n = Attachment::shell_nozzle("N-1", 10.5, 0.0, 0.0, 0.0, 0.0);
        assert!(n.validate(&vessel()).is_err());
        let n = Attachment::shell_nozzle("N-1", -0.5, 0.0, 0.0, 0.0, 0.0);
        assert!(n.validate(&vessel()).is_err());
    }

    #[test]
    fn test_aspect_ratio_range() {
        let loc = Location::TopHead { shape: HeadShape::Ellipsoidal };
        let n = Attachment::head_nozzle("N-1", loc, 0.0, 0.0, 0.0, 0.0, 0.0).with_aspect_ratio(1.2);
        assert!(n.validate(&vessel()).is_err());
        let n = Attachment::head_nozzle("N-1", loc, 0.0, 0.0, 0.0, 0.0, 0.0).with_aspect_ratio(4.5);
        assert!(n.validate(&vessel()).is_err());

        // Aspect ratio is not checked for hemispherical heads
        let hemi = Location::TopHead { shape: HeadShape::Hemispherical };
        let n = Attachment::head_nozzle("N-1", hemi, 0.0, 0.0, 0.0, 0.0, 0.0).with_aspect_ratio(0.0);
        assert!(n.validate(&vessel()).is_ok());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let n = Attachment::pipe_support("PS-1", 1.0, -0.1, 0.0, 0.0, 0.0, 0.0);
        assert!(n.validate(&vessel()).is_err());
    }

    #[test]
    fn test_shell_standoff_limit() {
        let n = Attachment::pipe_support("PS-1", 1.0, 3.1, 0.0, 0.0, 0.0, 0.0);
        assert!(n.validate(&vessel()).is_err());
    }

    #[test]
    fn test_non_finite_load_rejected() {
        let n = Attachment::shell_nozzle("N-1", 1.0, 0.0, f64::INFINITY, 0.0, 0.0);
        let err = n.validate(&vessel()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "p_n"));
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "tag": "N-7",
            "location": { "type": "TopHead", "shape": "Ellipsoidal" },
            "loads": { "type": "HeadNozzle", "p_n": 25.0 }
        }"#;
        let n: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(n.aspect_ratio, DEFAULT_ASPECT_RATIO);
        assert_eq!(n.offset_m, 0.0);
        assert_eq!(n.theta, Degrees(0.0));
        assert_eq!(n.loads, LocalLoads::HeadNozzle { p_n: 25.0, v1_n: 0.0, v2_n: 0.0 });
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AttachmentKind::PipeSupport.to_string(), "Pipe Support");
        assert_eq!(AttachmentKind::Nozzle.tag_prefix(), "N");
    }
}
