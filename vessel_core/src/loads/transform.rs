//! Local-to-global load transformation.
//!
//! Each attachment kind has its own local axes; the horizontal pair is
//! rotated by the orientation angle into the global X-Z plane and the axial
//! or vertical component maps onto global Y.

use crate::attachments::{Attachment, HeadEnd, LocalLoads};
use crate::errors::CalcResult;
use crate::geometry::{resolve_position, Position};
use crate::units::Radians;
use crate::vessel::VesselGeometry;

use super::GlobalLoad;

/// Global force `[Fx, Fy, Fz]` for an attachment's local loads.
///
/// | Case              | Fx                    | Fy   | Fz                     |
/// |-------------------|-----------------------|------|------------------------|
/// | Shell nozzle      | P sinθ + Vc cosθ      | VL   | -P cosθ + Vc sinθ      |
/// | Top head nozzle   | V1 sinθ + V2 cosθ     | P    | -V1 cosθ + V2 sinθ     |
/// | Bottom head nozzle| -V1 sinθ + V2 cosθ    | -P   | V1 cosθ + V2 sinθ      |
/// | Pipe support      | Fh1 sinθ + Fh2 cosθ   | Fv   | -Fh1 cosθ + Fh2 sinθ   |
///
/// On the bottom head the axial and radial directions are reversed because
/// the outward normal points down and the radial sense is inward.
///
/// The attachment is assumed to have passed [`Attachment::validate`]; a head
/// load set on the shell is treated as a top-head nozzle.
pub fn global_force(attachment: &Attachment) -> [f64; 3] {
    let theta: Radians = attachment.theta.normalized().into();
    let (sin, cos) = theta.sin_cos();

    match attachment.loads {
        LocalLoads::ShellNozzle { p_n, vc_n, vl_n } => rotate(p_n, vc_n, vl_n, sin, cos),
        LocalLoads::PipeSupport { fv_n, fh1_n, fh2_n } => rotate(fh1_n, fh2_n, fv_n, sin, cos),
        LocalLoads::HeadNozzle { p_n, v1_n, v2_n } => {
            let flip = match attachment.location.head() {
                Some((HeadEnd::Bottom, _)) => -1.0,
                _ => 1.0,
            };
            rotate(flip * v1_n, v2_n, flip * p_n, sin, cos)
        }
    }
}

/// Rotate a (radial, tangential) pair about the vertical axis and attach
/// the vertical component.
fn rotate(radial: f64, tangential: f64, vertical: f64, sin: f64, cos: f64) -> [f64; 3] {
    [
        radial * sin + tangential * cos,
        vertical,
        -radial * cos + tangential * sin,
    ]
}

/// Global load vector for an attachment at an already-resolved position.
pub fn transform(attachment: &Attachment, position: &Position) -> GlobalLoad {
    GlobalLoad::from_force_at(global_force(attachment), position)
}

/// Resolve the attachment's position, then transform its loads.
///
/// # Example
///
/// ```rust
/// use vessel_core::attachments::Attachment;
/// use vessel_core::loads::transform_attachment;
/// use vessel_core::vessel::VesselGeometry;
///
/// let vessel = VesselGeometry::new(0.0, 1.0, 10.0);
/// let nozzle = Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0);
///
/// let (pos, load) = transform_attachment(&nozzle, &vessel).unwrap();
/// assert_eq!(pos.y_m, 5.0);
/// assert!((load.fz_n + 100.0).abs() < 1e-9);
/// assert!((load.mx_nm + 500.0).abs() < 1e-9);
/// ```
pub fn transform_attachment(attachment: &Attachment, vessel: &VesselGeometry) -> CalcResult<(Position, GlobalLoad)> {
    let position = resolve_position(attachment, vessel)?;
    Ok((position, transform(attachment, &position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::{HeadShape, Location};

    const TOL: f64 = 1e-9;

    fn assert_force(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn test_shell_nozzle_axial_at_zero_degrees() {
        let n = Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0);
        assert_force(global_force(&n), [0.0, 0.0, -100.0]);
    }

    #[test]
    fn test_shell_nozzle_components_at_ninety_degrees() {
        let n = Attachment::shell_nozzle("N-1", 5.0, 90.0, 100.0, 20.0, 30.0);
        assert_force(global_force(&n), [100.0, 30.0, 20.0]);
    }

    #[test]
    fn test_top_head_nozzle() {
        let loc = Location::TopHead { shape: HeadShape::Hemispherical };
        let n = Attachment::head_nozzle("N-1", loc, 0.0, 0.0, 50.0, 10.0, 5.0);
        assert_force(global_force(&n), [5.0, 50.0, -10.0]);
    }

    #[test]
    fn test_bottom_head_nozzle_flips_axial_and_radial() {
        let loc = Location::BottomHead { shape: HeadShape::Ellipsoidal };
        let n = Attachment::head_nozzle("N-1", loc, 0.0, 0.0, 50.0, 10.0, 5.0);
        assert_force(global_force(&n), [5.0, -50.0, 10.0]);

        let n = Attachment::head_nozzle("N-1", loc, 0.0, 90.0, 50.0, 10.0, 5.0);
        assert_force(global_force(&n), [-10.0, -50.0, 5.0]);
    }

    #[test]
    fn test_pipe_support() {
        let ps = Attachment::pipe_support("PS-1", 2.0, 1.5, 180.0, -1000.0, 200.0, 0.0);
        // Radial outward at 180 deg points along +Z
        assert_force(global_force(&ps), [0.0, -1000.0, 200.0]);
    }

    #[test]
    fn test_transform_moments() {
        let ps = Attachment::pipe_support("PS-1", 2.0, 1.5, 0.0, -1000.0, 0.0, 0.0);
        let pos = Position::new(0.0, 2.0, -1.5);
        let load = transform(&ps, &pos);
        // Mx = Y*Fz - Z*Fy = 0 - (-1.5)(-1000) = -1500
        assert!((load.mx_nm + 1500.0).abs() < TOL);
        assert!(load.my_nm.abs() < TOL);
        assert!(load.mz_nm.abs() < TOL);
    }

    #[test]
    fn test_transform_attachment_propagates_geometry_error() {
        let vessel = VesselGeometry::new(0.0, 1.0, 10.0);
        let loc = Location::TopHead { shape: HeadShape::Ellipsoidal };
        let n = Attachment::head_nozzle("N-4", loc, 0.8, 0.0, 1.0, 0.0, 0.0);
        let err = transform_attachment(&n, &vessel).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_ERROR");
    }

    #[test]
    fn test_signed_and_unsigned_theta_agree() {
        let a = Attachment::shell_nozzle("N-1", 1.0, -90.0, 100.0, 20.0, 0.0);
        let b = Attachment::shell_nozzle("N-1", 1.0, 270.0, 100.0, 20.0, 0.0);
        assert_force(global_force(&a), global_force(&b));
    }
}
