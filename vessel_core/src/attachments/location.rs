//! Attachment location on the vessel: the cylindrical shell or one of the
//! two heads, with the head shape.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Closure shape of a vessel head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadShape {
    /// Hemispherical head, depth = R
    Hemispherical,
    /// Ellipsoidal head, depth = R / aspect ratio (2:1 is the common case)
    Ellipsoidal,
}

impl HeadShape {
    pub const ALL: [HeadShape; 2] = [HeadShape::Hemispherical, HeadShape::Ellipsoidal];

    pub fn display_name(&self) -> &'static str {
        match self {
            HeadShape::Hemispherical => "Hemispherical",
            HeadShape::Ellipsoidal => "Ellipsoidal",
        }
    }
}

/// Which end of the vessel a head closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadEnd {
    Top,
    Bottom,
}

impl HeadEnd {
    /// +1 for the top head (points rise above the tangent line),
    /// -1 for the bottom head (points hang below it)
    pub fn sign(&self) -> f64 {
        match self {
            HeadEnd::Top => 1.0,
            HeadEnd::Bottom => -1.0,
        }
    }
}

/// Where an attachment sits on the vessel.
///
/// ## JSON Format
///
/// ```json
/// { "type": "Shell" }
/// { "type": "TopHead", "shape": "Ellipsoidal" }
/// { "type": "BottomHead", "shape": "Hemispherical" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Location {
    /// Cylindrical shell
    #[default]
    Shell,
    /// Top head
    TopHead { shape: HeadShape },
    /// Bottom head
    BottomHead { shape: HeadShape },
}

impl Location {
    /// The five locations offered to the user, in menu order
    pub const ALL: [Location; 5] = [
        Location::Shell,
        Location::TopHead { shape: HeadShape::Hemispherical },
        Location::BottomHead { shape: HeadShape::Hemispherical },
        Location::TopHead { shape: HeadShape::Ellipsoidal },
        Location::BottomHead { shape: HeadShape::Ellipsoidal },
    ];

    /// Head end and shape, or `None` for the shell
    pub fn head(&self) -> Option<(HeadEnd, HeadShape)> {
        match *self {
            Location::Shell => None,
            Location::TopHead { shape } => Some((HeadEnd::Top, shape)),
            Location::BottomHead { shape } => Some((HeadEnd::Bottom, shape)),
        }
    }

    pub fn is_shell(&self) -> bool {
        matches!(self, Location::Shell)
    }

    /// Human-readable name, e.g. "Ellipsoidal Top Head"
    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Shell => "Shell",
            Location::TopHead { shape: HeadShape::Hemispherical } => "Hemispherical Top Head",
            Location::BottomHead { shape: HeadShape::Hemispherical } => "Hemispherical Bottom Head",
            Location::TopHead { shape: HeadShape::Ellipsoidal } => "Ellipsoidal Top Head",
            Location::BottomHead { shape: HeadShape::Ellipsoidal } => "Ellipsoidal Bottom Head",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Location {
    type Err = CalcError;

    /// Parse a display name (case-insensitive). Unknown names are rejected
    /// rather than mapped to a zero-depth head.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Location::ALL
            .iter()
            .copied()
            .find(|loc| loc.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CalcError::invalid_combination(
                    wanted,
                    format!(
                        "Unknown location; expected one of: {}",
                        Location::ALL
                            .iter()
                            .map(|l| l.display_name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for loc in Location::ALL {
            let parsed: Location = loc.display_name().parse().unwrap();
            assert_eq!(parsed, loc);
        }
        let lower: Location = "ellipsoidal bottom head".parse().unwrap();
        assert_eq!(lower, Location::BottomHead { shape: HeadShape::Ellipsoidal });
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let err = "Torispherical Top Head".parse::<Location>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_COMBINATION");
    }

    #[test]
    fn test_head_accessor() {
        assert_eq!(Location::Shell.head(), None);
        assert_eq!(
            Location::BottomHead { shape: HeadShape::Hemispherical }.head(),
            Some((HeadEnd::Bottom, HeadShape::Hemispherical))
        );
    }

    #[test]
    fn test_sign() {
        assert_eq!(HeadEnd::Top.sign(), 1.0);
        assert_eq!(HeadEnd::Bottom.sign(), -1.0);
    }

    #[test]
    fn test_serialization() {
        let loc = Location::TopHead { shape: HeadShape::Ellipsoidal };
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"type":"TopHead","shape":"Ellipsoidal"}"#);

        let shell: Location = serde_json::from_str(r#"{"type":"Shell"}"#).unwrap();
        assert_eq!(shell, Location::Shell);
    }

    #[test]
    fn test_unknown_shape_in_json_rejected() {
        let parsed = serde_json::from_str::<Location>(r#"{"type":"TopHead","shape":"Flat"}"#);
        assert!(parsed.is_err());
    }
}
