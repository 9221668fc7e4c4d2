//! Head depth (tangent line to apex) for the supported head shapes.

use crate::attachments::HeadShape;

/// Depth of a head measured from its tangent line to its apex.
///
/// - Hemispherical: `R`
/// - Ellipsoidal: `R / aspect_ratio` (`R / 2` for a standard 2:1 head)
///
/// `aspect_ratio` is ignored for hemispherical heads.
///
/// # Example
///
/// ```rust
/// use vessel_core::attachments::HeadShape;
/// use vessel_core::geometry::head_depth;
///
/// assert_eq!(head_depth(HeadShape::Hemispherical, 1.2, 2.0), 1.2);
/// assert_eq!(head_depth(HeadShape::Ellipsoidal, 1.2, 2.0), 0.6);
/// ```
pub fn head_depth(shape: HeadShape, radius_m: f64, aspect_ratio: f64) -> f64 {
    match shape {
        HeadShape::Hemispherical => radius_m,
        HeadShape::Ellipsoidal => radius_m / aspect_ratio,
    }
}
