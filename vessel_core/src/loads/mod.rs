//! Foundation loads from attachment loads
//!
//! This module turns the local loads of each nozzle or pipe support into a
//! global force/moment vector at the foundation reference point.
//!
//! # Overview
//!
//! - [`GlobalLoad`] - Six-component force/moment vector (N, N·m)
//! - [`global_force`] - Local load components to global Fx, Fy, Fz
//! - [`transform`] - Global load at a resolved position (M = r × F)
//! - [`transform_attachment`] - Position resolution and transform in one call
//!
//! # Example
//!
//! ```
//! use vessel_core::attachments::{Attachment, HeadShape, Location};
//! use vessel_core::loads::{transform_attachment, GlobalLoad};
//! use vessel_core::vessel::VesselGeometry;
//!
//! let vessel = VesselGeometry::new(0.0, 1.0, 10.0);
//! let nozzles = [
//!     Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0),
//!     Attachment::head_nozzle("N-2", Location::TopHead { shape: HeadShape::Hemispherical }, 0.0, 0.0, 50.0, 0.0, 0.0),
//! ];
//!
//! let total: GlobalLoad = nozzles
//!     .iter()
//!     .map(|n| transform_attachment(n, &vessel).map(|(_, load)| load))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap()
//!     .iter()
//!     .sum();
//!
//! assert!((total.fy_n - 50.0).abs() < 1e-9);
//! ```

pub mod global;
pub mod transform;

pub use global::GlobalLoad;
pub use transform::{global_force, transform, transform_attachment};
