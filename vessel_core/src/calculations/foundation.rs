//! # Foundation Load Aggregation
//!
//! Runs every attachment through position resolution and load
//! transformation, keeps the results in input order, and sums them into the
//! TOTAL record at the foundation reference point.
//!
//! ## Error Handling
//!
//! Attachments are independent. One that fails validation or geometry is
//! reported in [`FoundationResult::failures`] and the rest are still
//! processed. The TOTAL is the sum of the successful rows; whether a partial
//! total may be shown is the caller's decision (see
//! [`FoundationResult::checked_total`]).
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::attachments::{Attachment, HeadShape, Location};
//! use vessel_core::calculations::foundation::calculate;
//! use vessel_core::vessel::VesselGeometry;
//!
//! let vessel = VesselGeometry::new(0.0, 1.0, 10.0);
//! let attachments = vec![
//!     Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0),
//!     Attachment::head_nozzle("N-2", Location::TopHead { shape: HeadShape::Hemispherical }, 0.0, 0.0, 50.0, 0.0, 0.0),
//! ];
//!
//! let result = calculate(&vessel, &attachments).unwrap();
//! assert_eq!(result.records.len(), 2);
//! assert!((result.total.load.mx_nm + 500.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::attachments::{Attachment, AttachmentKind};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::Position;
use crate::loads::{transform_attachment, GlobalLoad};
use crate::vessel::VesselGeometry;

/// Tag of the synthesized total row
pub const TOTAL_TAG: &str = "TOTAL";

/// Whether a total may be reported while some attachments failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Report the total of the rows that succeeded, with per-row errors
    #[default]
    PartialResults,
    /// Withhold the total until every attachment is valid
    BlockTotal,
}

/// One row of the foundation table.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tag": "N-1",
///   "kind": "Nozzle",
///   "position": { "x_m": 0.0, "y_m": 5.0, "z_m": 0.0 },
///   "load": { "fx_n": 0.0, "fy_n": 0.0, "fz_n": -100.0, "mx_nm": -500.0, "my_nm": 0.0, "mz_nm": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub tag: String,

    /// `None` for the TOTAL row
    pub kind: Option<AttachmentKind>,

    /// Global attachment point; `None` for the TOTAL row
    pub position: Option<Position>,

    pub load: GlobalLoad,
}

impl ResultRecord {
    pub fn is_total(&self) -> bool {
        self.kind.is_none()
    }
}

/// An attachment that could not be transformed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentFailure {
    /// Position in the input sequence
    pub index: usize,
    pub tag: String,
    pub kind: AttachmentKind,
    pub error: CalcError,
}

/// Per-attachment rows in input order, the failures, and the TOTAL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationResult {
    /// Successful rows, in input order
    pub records: Vec<ResultRecord>,

    /// Rejected attachments, in input order
    pub failures: Vec<AttachmentFailure>,

    /// Component-wise sum of `records`; all zero when there are none
    pub total: ResultRecord,
}

impl FoundationResult {
    /// True when every attachment was transformed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The TOTAL row, unless the policy forbids a partial total.
    pub fn checked_total(&self, policy: ErrorPolicy) -> CalcResult<&ResultRecord> {
        match policy {
            ErrorPolicy::BlockTotal if !self.is_complete() => Err(CalcError::TotalWithheld {
                failed: self.failures.len(),
            }),
            _ => Ok(&self.total),
        }
    }

    /// Per-attachment rows followed by the TOTAL row
    pub fn rows(&self) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter().chain(std::iter::once(&self.total))
    }
}

/// Transform every attachment and sum the results.
///
/// The vessel geometry is assumed to be valid; use [`calculate`] to check
/// it first.
pub fn aggregate(attachments: &[Attachment], vessel: &VesselGeometry) -> FoundationResult {
    let mut records = Vec::with_capacity(attachments.len());
    let mut failures = Vec::new();

    for (index, attachment) in attachments.iter().enumerate() {
        let outcome = attachment
            .validate(vessel)
            .map_err(|e| e.in_attachment(&attachment.tag))
            .and_then(|_| transform_attachment(attachment, vessel));

        match outcome {
            Ok((position, load)) => {
                debug!(
                    tag = %attachment.tag,
                    location = %attachment.location,
                    x = position.x_m,
                    y = position.y_m,
                    z = position.z_m,
                    "Transformed attachment loads"
                );
                records.push(ResultRecord {
                    tag: attachment.tag.clone(),
                    kind: Some(attachment.kind()),
                    position: Some(position),
                    load,
                });
            }
            Err(error) => {
                warn!(tag = %attachment.tag, code = error.error_code(), "Attachment rejected: {}", error);
                failures.push(AttachmentFailure {
                    index,
                    tag: attachment.tag.clone(),
                    kind: attachment.kind(),
                    error,
                });
            }
        }
    }

    let total = ResultRecord {
        tag: TOTAL_TAG.to_string(),
        kind: None,
        position: None,
        load: records.iter().map(|r| r.load).sum(),
    };

    info!(
        attachments = attachments.len(),
        succeeded = records.len(),
        failed = failures.len(),
        "Foundation loads aggregated"
    );

    FoundationResult {
        records,
        failures,
        total,
    }
}

/// Validate the vessel geometry, then aggregate.
///
/// # Returns
///
/// * `Ok(FoundationResult)` - rows, per-attachment failures and the TOTAL
/// * `Err(CalcError)` - if the vessel geometry is out of range
pub fn calculate(vessel: &VesselGeometry, attachments: &[Attachment]) -> CalcResult<FoundationResult> {
    vessel.validate()?;
    Ok(aggregate(attachments, vessel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::{HeadShape, Location};

    fn vessel() -> VesselGeometry {
        VesselGeometry::new(0.0, 1.0, 10.0)
    }

    fn mixed_attachments() -> Vec<Attachment> {
        vec![
            Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0),
            Attachment::head_nozzle(
                "N-2",
                Location::TopHead { shape: HeadShape::Hemispherical },
                0.0,
                0.0,
                50.0,
                0.0,
                0.0,
            ),
            Attachment::pipe_support("PS-1", 3.0, 1.5, 90.0, -1000.0, 0.0, 200.0),
        ]
    }

    #[test]
    fn test_records_keep_input_order() {
        let result = aggregate(&mixed_attachments(), &vessel());
        let tags: Vec<&str> = result.records.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["N-1", "N-2", "PS-1"]);
        assert_eq!(result.records[2].kind, Some(AttachmentKind::PipeSupport));
        assert!(result.is_complete());
    }

    #[test]
    fn test_total_is_component_sum() {
        let result = aggregate(&mixed_attachments(), &vessel());
        let manual = result
            .records
            .iter()
            .fold(GlobalLoad::zero(), |acc, r| acc + r.load);
        assert_eq!(result.total.load, manual);
        assert_eq!(result.total.tag, TOTAL_TAG);
        assert!(result.total.is_total());
    }

    #[test]
    fn test_empty_input_has_zero_total() {
        let result = aggregate(&[], &vessel());
        assert!(result.records.is_empty());
        assert_eq!(result.total.load, GlobalLoad::zero());
        assert_eq!(result.rows().count(), 1);
    }

    #[test]
    fn test_failure_does_not_stop_other_attachments() {
        let mut attachments = mixed_attachments();
        attachments.insert(
            1,
            Attachment::head_nozzle(
                "N-BAD",
                Location::BottomHead { shape: HeadShape::Hemispherical },
                1.0,
                0.0,
                10.0,
                0.0,
                0.0,
            ),
        );

        let result = aggregate(&attachments, &vessel());
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].index, 1);
        assert_eq!(result.failures[0].tag, "N-BAD");
        assert_eq!(result.failures[0].error.error_code(), "GEOMETRY_ERROR");

        let clean = aggregate(&mixed_attachments(), &vessel());
        assert_eq!(result.total.load, clean.total.load);
    }

    #[test]
    fn test_validation_errors_name_the_attachment() {
        let attachments = vec![Attachment::shell_nozzle("N-7", 12.0, 0.0, 1.0, 0.0, 0.0)];
        let result = aggregate(&attachments, &vessel());
        match &result.failures[0].error {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "N-7.elevation_m"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_checked_total_policy() {
        let attachments = vec![
            Attachment::shell_nozzle("N-1", 5.0, 0.0, 100.0, 0.0, 0.0),
            Attachment::shell_nozzle("N-2", 50.0, 0.0, 100.0, 0.0, 0.0),
        ];
        let result = aggregate(&attachments, &vessel());

        assert!(result.checked_total(ErrorPolicy::PartialResults).is_ok());
        let err = result.checked_total(ErrorPolicy::BlockTotal).unwrap_err();
        assert_eq!(err, CalcError::TotalWithheld { failed: 1 });

        let clean = aggregate(&attachments[..1], &vessel());
        assert!(clean.checked_total(ErrorPolicy::BlockTotal).is_ok());
    }

    #[test]
    fn test_calculate_rejects_bad_vessel() {
        let bad = VesselGeometry::new(0.0, -1.0, 10.0);
        assert!(calculate(&bad, &mixed_attachments()).is_err());
    }

    #[test]
    fn test_serialization() {
        let result = calculate(&vessel(), &mixed_attachments()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: FoundationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.records.len(), 3);
        assert_eq!(roundtrip.total.kind, None);
    }
}
