//! # Load Study
//!
//! A `LoadStudy` groups one run's inputs: the vessel, its nozzles and its
//! pipe supports, plus the settings that govern how results are reported.
//! Studies are plain JSON so the caller can hand them over as a document.
//!
//! ## Structure
//!
//! ```text
//! LoadStudy
//! ├── title: String
//! ├── settings: StudySettings (error policy, sizing limit, decimals)
//! ├── vessel: VesselGeometry
//! ├── nozzles: Vec<Attachment>
//! └── pipe_supports: Vec<Attachment>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::attachments::Attachment;
//! use vessel_core::study::LoadStudy;
//! use vessel_core::vessel::VesselGeometry;
//!
//! let mut study = LoadStudy::new("V-101 foundation", VesselGeometry::new(0.0, 1.0, 10.0));
//! study.nozzles.push(Attachment::shell_nozzle("", 5.0, 0.0, 100.0, 0.0, 0.0));
//!
//! let result = study.calculate().unwrap();
//! assert_eq!(result.records[0].tag, "N-1");
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::attachments::{Attachment, AttachmentKind};
use crate::calculations::foundation::{self, ErrorPolicy, FoundationResult};
use crate::errors::{CalcError, CalcResult};
use crate::vessel::VesselGeometry;

/// Default number of attachments per category offered by the input form
pub const DEFAULT_MAX_PER_CATEGORY: usize = 20;

/// Default decimal places in the report table
pub const DEFAULT_DECIMALS: usize = 2;

/// Settings that apply to the whole study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    /// Whether a total is reported while some attachments failed
    #[serde(default)]
    pub error_policy: ErrorPolicy,

    /// Sizing limit per category (nozzles, pipe supports); a warning only
    #[serde(default = "default_max_per_category")]
    pub max_per_category: usize,

    /// Decimal places in the report table
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_max_per_category() -> usize {
    DEFAULT_MAX_PER_CATEGORY
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Default for StudySettings {
    fn default() -> Self {
        StudySettings {
            error_policy: ErrorPolicy::default(),
            max_per_category: DEFAULT_MAX_PER_CATEGORY,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// All inputs for one foundation load run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStudy {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub settings: StudySettings,

    pub vessel: VesselGeometry,

    #[serde(default)]
    pub nozzles: Vec<Attachment>,

    #[serde(default)]
    pub pipe_supports: Vec<Attachment>,
}

impl LoadStudy {
    pub fn new(title: impl Into<String>, vessel: VesselGeometry) -> Self {
        LoadStudy {
            title: title.into(),
            settings: StudySettings::default(),
            vessel,
            nozzles: Vec::new(),
            pipe_supports: Vec::new(),
        }
    }

    /// Parse a study from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Nozzles followed by pipe supports, with blank tags filled in as
    /// `N-<i>` / `PS-<i>` (1-based within the category).
    ///
    /// An attachment listed under the wrong category keeps its own kind;
    /// the category only decides order and default tags.
    pub fn attachments(&self) -> Vec<Attachment> {
        let categories = [
            (AttachmentKind::Nozzle, &self.nozzles),
            (AttachmentKind::PipeSupport, &self.pipe_supports),
        ];

        categories
            .into_iter()
            .flat_map(|(kind, list)| {
                list.iter().enumerate().map(move |(i, attachment)| {
                    let mut attachment = attachment.clone();
                    if attachment.tag.trim().is_empty() {
                        attachment.tag = format!("{}-{}", kind.tag_prefix(), i + 1);
                    }
                    attachment
                })
            })
            .collect()
    }

    /// Validate the vessel, then transform and sum every attachment.
    ///
    /// Attachments over the per-category limit are still calculated; the
    /// limit is a sizing hint for input forms and is only logged.
    pub fn calculate(&self) -> CalcResult<FoundationResult> {
        for (name, count) in [("nozzles", self.nozzles.len()), ("pipe_supports", self.pipe_supports.len())] {
            if count > self.settings.max_per_category {
                warn!(category = name, count, limit = self.settings.max_per_category, "Category exceeds sizing limit");
            }
        }

        foundation::calculate(&self.vessel, &self.attachments())
    }

    /// Calculate and apply the study's error policy to the total.
    ///
    /// Returns the full result when the total may be shown, otherwise
    /// [`CalcError::TotalWithheld`].
    pub fn calculate_checked(&self) -> CalcResult<FoundationResult> {
        let result = self.calculate()?;
        result.checked_total(self.settings.error_policy)?;
        Ok(result)
    }

    /// Check that every attachment is listed in its own category
    pub fn validate_categories(&self) -> CalcResult<()> {
        let misplaced = self
            .nozzles
            .iter()
            .filter(|a| a.kind() != AttachmentKind::Nozzle)
            .chain(self.pipe_supports.iter().filter(|a| a.kind() != AttachmentKind::PipeSupport))
            .next();

        match misplaced {
            Some(a) => Err(CalcError::invalid_combination(
                &a.tag,
                format!("{} listed in the wrong category", a.kind()),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::{HeadShape, Location};

    fn study() -> LoadStudy {
        let mut study = LoadStudy::new("Test", VesselGeometry::new(1.0, 1.0, 10.0));
        study.nozzles.push(Attachment::shell_nozzle("", 5.0, 0.0, 100.0, 0.0, 0.0));
        study.nozzles.push(Attachment::head_nozzle(
            "N-TOP",
            Location::TopHead { shape: HeadShape::Ellipsoidal },
            0.2,
            45.0,
            10.0,
            5.0,
            0.0,
        ));
        study.pipe_supports.push(Attachment::pipe_support("  ", 3.0, 1.4, 270.0, -500.0, 0.0, 0.0));
        study
    }

    #[test]
    fn test_default_tags() {
        let tags: Vec<String> = study().attachments().into_iter().map(|a| a.tag).collect();
        assert_eq!(tags, vec!["N-1", "N-TOP", "PS-1"]);
    }

    #[test]
    fn test_nozzles_before_supports() {
        let result = study().calculate().unwrap();
        let kinds: Vec<_> = result.records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(AttachmentKind::Nozzle),
                Some(AttachmentKind::Nozzle),
                Some(AttachmentKind::PipeSupport)
            ]
        );
    }

    #[test]
    fn test_block_total_policy() {
        let mut s = study();
        s.settings.error_policy = ErrorPolicy::BlockTotal;
        assert!(s.calculate_checked().is_ok());

        s.nozzles.push(Attachment::shell_nozzle("N-BAD", 20.0, 0.0, 1.0, 0.0, 0.0));
        let err = s.calculate_checked().unwrap_err();
        assert_eq!(err.error_code(), "TOTAL_WITHHELD");

        s.settings.error_policy = ErrorPolicy::PartialResults;
        let result = s.calculate_checked().unwrap();
        assert_eq!(result.failures.len(), 1);
    }

    #[test]
    fn test_validate_categories() {
        let mut s = study();
        assert!(s.validate_categories().is_ok());
        s.nozzles.push(Attachment::pipe_support("PS-X", 1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(s.validate_categories().unwrap_err().error_code(), "INVALID_COMBINATION");
    }

    #[test]
    fn test_json_with_defaults() {
        let json = r#"{
            "vessel": { "support_height_m": 0.0, "radius_m": 1.0, "cylinder_length_m": 10.0 },
            "nozzles": [
                { "elevation_m": 5.0, "loads": { "type": "ShellNozzle", "p_n": 100.0 } }
            ]
        }"#;
        let s = LoadStudy::from_json(json).unwrap();
        assert_eq!(s.settings, StudySettings::default());
        assert!(s.pipe_supports.is_empty());

        let result = s.calculate().unwrap();
        assert!((result.total.load.mx_nm + 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_study_file() {
        let s = LoadStudy::from_json(include_str!("../../demos/sample_study.json")).unwrap();
        assert!(s.validate_categories().is_ok());

        let result = s.calculate_checked().unwrap();
        assert!(result.is_complete());
        assert_eq!(result.records.len(), 4);
        assert_eq!(result.records[3].tag, "PS-1");
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = LoadStudy::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_roundtrip() {
        let s = study();
        let json = serde_json::to_string_pretty(&s).unwrap();
        let parsed = LoadStudy::from_json(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
