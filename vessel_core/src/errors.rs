//! # Error Types
//!
//! Structured error types for vessel_core. Every error names the field that
//! caused it, and attachment errors also carry the attachment tag, so a
//! caller can annotate the offending row and let the user correct it.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius_m: f64) -> CalcResult<()> {
//!     if radius_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "radius_m",
//!             radius_m.to_string(),
//!             "Radius must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vessel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for load transfer operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its documented range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An attachment point does not lie on the head it is assigned to
    #[error("Geometry error on '{tag}' field '{field}': {value} - {reason}")]
    Geometry {
        tag: String,
        field: String,
        value: String,
        reason: String,
    },

    /// A kind/location/head-shape combination outside the supported set
    #[error("Invalid combination on '{tag}': {reason}")]
    InvalidCombination { tag: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// The total was withheld because at least one attachment failed
    #[error("Total withheld: {failed} attachment(s) failed")]
    TotalWithheld { failed: usize },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Geometry error
    pub fn geometry(
        tag: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::Geometry {
            tag: tag.into(),
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidCombination error
    pub fn invalid_combination(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidCombination {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the field of an InvalidInput error with an attachment tag.
    ///
    /// Validation of a single attachment reports bare field names; the
    /// aggregator uses this to say which row the field belongs to.
    pub fn in_attachment(self, tag: &str) -> Self {
        match self {
            CalcError::InvalidInput { field, value, reason } => CalcError::InvalidInput {
                field: format!("{}.{}", tag, field),
                value,
                reason,
            },
            other => other,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Geometry { .. } => "GEOMETRY_ERROR",
            CalcError::InvalidCombination { .. } => "INVALID_COMBINATION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::TotalWithheld { .. } => "TOTAL_WITHHELD",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
