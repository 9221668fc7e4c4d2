//! # vessel_core - Vertical Vessel Foundation Load Engine
//!
//! `vessel_core` converts the local loads of nozzles and pipe supports on a
//! vertical vessel into global forces and moments, and sums them at the
//! foundation reference point. All inputs and outputs are JSON-serializable
//! so a form, a CLI or another program can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the attachment and field
//! - **Independent rows**: One bad attachment never hides the others
//!
//! ## Quick Start
//!
//! ```rust
//! use vessel_core::attachments::Attachment;
//! use vessel_core::study::LoadStudy;
//! use vessel_core::vessel::VesselGeometry;
//!
//! let mut study = LoadStudy::new("V-101", VesselGeometry::new(0.0, 1.0, 10.0));
//! study.nozzles.push(Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0));
//!
//! let result = study.calculate().unwrap();
//! let table = vessel_core::report::render_table(&result, 2, study.settings.error_policy);
//! assert!(table.contains("TOTAL"));
//! ```
//!
//! ## Modules
//!
//! - [`vessel`] - Vessel geometry and input ranges
//! - [`attachments`] - Nozzles, pipe supports, locations and local loads
//! - [`geometry`] - Head depth and global attachment positions
//! - [`loads`] - Local-to-global load transformation
//! - [`calculations`] - Aggregation into the foundation table
//! - [`study`] - One run's inputs and settings
//! - [`report`] - Text table formatting
//! - [`units`] - Angle wrappers
//! - [`errors`] - Structured error types

pub mod attachments;
pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod report;
pub mod study;
pub mod units;
pub mod vessel;

// Re-export commonly used types at crate root for convenience
pub use attachments::{Attachment, AttachmentKind, HeadShape, LocalLoads, Location};
pub use calculations::{FoundationResult, ResultRecord};
pub use errors::{CalcError, CalcResult};
pub use loads::GlobalLoad;
pub use study::{LoadStudy, StudySettings};
pub use vessel::VesselGeometry;
