//! # Load Transfer Calculations
//!
//! Each calculation follows the pattern:
//!
//! - inputs are plain JSON-serializable structs
//! - `calculate(...) -> Result<*Result, CalcError>` is a pure function
//! - results are JSON-serializable structs
//!
//! ## Available Calculations
//!
//! - [`foundation`] - Nozzle and pipe support loads summed at the foundation

pub mod foundation;

pub use foundation::{
    aggregate, calculate, AttachmentFailure, ErrorPolicy, FoundationResult, ResultRecord, TOTAL_TAG,
};
