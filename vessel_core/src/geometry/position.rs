//! Global position of an attachment point.
//!
//! Horizontal placement comes from the offset and orientation; elevation
//! from the shell elevation or, on a head, from the head surface at that
//! offset.

use serde::{Deserialize, Serialize};

use super::head::head_depth;
use crate::attachments::{Attachment, HeadEnd, HeadShape};
use crate::errors::{CalcError, CalcResult};
use crate::units::Radians;
use crate::vessel::VesselGeometry;

/// Point in the global frame (m), relative to the foundation reference
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
}

impl Position {
    pub fn new(x_m: f64, y_m: f64, z_m: f64) -> Self {
        Position { x_m, y_m, z_m }
    }
}

/// Resolve the global (X, Y, Z) of an attachment.
///
/// ```text
/// X =  offset * sin(theta)
/// Z = -offset * cos(theta)
///
/// Shell:  Y = support_height + elevation
/// Head:   Y = base +/- d                          offset == 0 (apex)
///         Y = base +/- sqrt(d^2 - offset^2)       hemispherical
///         Y = base +/- d * sqrt(1 - offset^2/R^2) ellipsoidal
/// ```
///
/// `base` is the top tangent line (top head) or the shell base (bottom
/// head), `d` the head depth, and the sign is `+` for the top head.
///
/// # Errors
///
/// A non-finite offset, orientation or elevation, or a head attachment
/// whose offset is not strictly inside the head (`offset >= d`, or
/// `offset >= R` on an ellipsoidal head), returns [`CalcError::Geometry`].
/// The resolver never returns a non-finite coordinate.
///
/// # Example
///
/// ```rust
/// use vessel_core::attachments::{Attachment, HeadShape, Location};
/// use vessel_core::geometry::resolve_position;
/// use vessel_core::vessel::VesselGeometry;
///
/// let vessel = VesselGeometry::new(0.0, 1.0, 10.0);
/// let apex = Attachment::head_nozzle(
///     "N-1",
///     Location::TopHead { shape: HeadShape::Hemispherical },
///     0.0, 0.0, 50.0, 0.0, 0.0,
/// );
///
/// let pos = resolve_position(&apex, &vessel).unwrap();
/// assert_eq!(pos.y_m, 11.0);
/// ```
pub fn resolve_position(attachment: &Attachment, vessel: &VesselGeometry) -> CalcResult<Position> {
    for (field, value) in [
        ("offset_m", attachment.offset_m),
        ("theta", attachment.theta.0),
        ("elevation_m", attachment.elevation_m),
    ] {
        if !value.is_finite() {
            return Err(CalcError::geometry(&attachment.tag, field, value.to_string(), "Value must be a finite number"));
        }
    }

    let theta: Radians = attachment.theta.normalized().into();
    let (sin, cos) = theta.sin_cos();
    let offset = attachment.offset_m;

    let x_m = offset * sin;
    let z_m = -offset * cos;

    let y_m = match attachment.location.head() {
        None => vessel.support_height_m + attachment.elevation_m,
        Some((end, shape)) => {
            let depth = head_depth(shape, vessel.radius_m, attachment.aspect_ratio);
            let base = match end {
                HeadEnd::Top => vessel.top_tangent_m(),
                HeadEnd::Bottom => vessel.bottom_tangent_m(),
            };
            base + end.sign() * surface_rise(attachment, shape, depth, vessel.radius_m)?
        }
    };

    Ok(Position { x_m, y_m, z_m })
}

/// Height of the head surface above its tangent line at the attachment offset.
fn surface_rise(attachment: &Attachment, shape: HeadShape, depth_m: f64, radius_m: f64) -> CalcResult<f64> {
    let offset = attachment.offset_m;
    if !(depth_m.is_finite() && depth_m > 0.0) {
        return Err(CalcError::geometry(
            &attachment.tag,
            "aspect_ratio",
            attachment.aspect_ratio.to_string(),
            format!("Head depth must be positive and finite, got {depth_m}"),
        ));
    }
    if offset < 0.0 {
        return Err(CalcError::geometry(
            &attachment.tag,
            "offset_m",
            offset.to_string(),
            "Offset from the vessel axis cannot be negative",
        ));
    }
    if offset == 0.0 {
        return Ok(depth_m);
    }

    // the ellipse equation is only defined inside the shell radius
    let limit_m = match shape {
        HeadShape::Hemispherical => depth_m,
        HeadShape::Ellipsoidal => depth_m.min(radius_m),
    };
    if offset >= limit_m {
        return Err(CalcError::geometry(
            &attachment.tag,
            "offset_m",
            offset.to_string(),
            format!(
                "Offset exceeds head geometry: must be less than {:.4} m on the {} head",
                limit_m,
                shape.display_name().to_lowercase()
            ),
        ));
    }

    let rise = match shape {
        HeadShape::Hemispherical => (depth_m * depth_m - offset * offset).sqrt(),
        HeadShape::Ellipsoidal => depth_m * (1.0 - (offset * offset) / (radius_m * radius_m)).sqrt(),
    };
    if !rise.is_finite() {
        return Err(CalcError::geometry(
            &attachment.tag,
            "offset_m",
            offset.to_string(),
            "Head surface height is undefined at this offset",
        ));
    }
    Ok(rise)
}
