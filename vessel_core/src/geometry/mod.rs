//! # Vessel Geometry Calculations
//!
//! - [`head`] - head depth by shape
//! - [`position`] - global position of an attachment point

pub mod head;
pub mod position;

pub use head::head_depth;
pub use position::{resolve_position, Position};
