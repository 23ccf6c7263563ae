//! The closed set of evidence types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One discrete observable clue. Every ghost leaves exactly three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Evidence {
    #[serde(rename = "EMF 5")]
    Emf5,
    #[serde(rename = "Spirit Box")]
    SpiritBox,
    #[serde(rename = "Ghost Orbs")]
    GhostOrbs,
    #[serde(rename = "Ghost Writing")]
    GhostWriting,
    #[serde(rename = "Fingerprints")]
    Fingerprints,
    #[serde(rename = "Freezing Temperatures")]
    FreezingTemperatures,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown evidence type: {0:?}")]
pub struct UnknownEvidence(pub String);

impl Evidence {
    pub const COUNT: usize = 6;

    /// Every evidence type in declaration order.
    pub const ALL: [Evidence; Self::COUNT] = [
        Evidence::Emf5,
        Evidence::SpiritBox,
        Evidence::GhostOrbs,
        Evidence::GhostWriting,
        Evidence::Fingerprints,
        Evidence::FreezingTemperatures,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Evidence::Emf5 => "EMF 5",
            Evidence::SpiritBox => "Spirit Box",
            Evidence::GhostOrbs => "Ghost Orbs",
            Evidence::GhostWriting => "Ghost Writing",
            Evidence::Fingerprints => "Fingerprints",
            Evidence::FreezingTemperatures => "Freezing Temperatures",
        }
    }

    /// Dense index for array-backed maps keyed by evidence.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a display name or a short alias, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .to_ascii_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "emf 5" | "emf5" | "emf" => Some(Evidence::Emf5),
            "spirit box" | "spiritbox" | "box" => Some(Evidence::SpiritBox),
            "ghost orbs" | "ghost orb" | "orbs" | "orb" => Some(Evidence::GhostOrbs),
            "ghost writing" | "writing" | "book" => Some(Evidence::GhostWriting),
            "fingerprints" | "prints" | "uv" => Some(Evidence::Fingerprints),
            "freezing temperatures" | "freezing" | "temps" | "cold" => {
                Some(Evidence::FreezingTemperatures)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Evidence {
    type Err = UnknownEvidence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownEvidence(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, evidence) in Evidence::ALL.iter().enumerate() {
            assert_eq!(evidence.index(), i);
        }
    }

    #[test]
    fn parse_display_names_round_trip() {
        for evidence in Evidence::ALL {
            assert_eq!(Evidence::parse(evidence.as_str()), Some(evidence));
        }
    }

    #[test]
    fn parse_is_case_and_space_insensitive() {
        assert_eq!(Evidence::parse("  spirit   BOX "), Some(Evidence::SpiritBox));
        assert_eq!(Evidence::parse("EMF5"), Some(Evidence::Emf5));
        assert_eq!(Evidence::parse("freezing"), Some(Evidence::FreezingTemperatures));
    }

    #[test]
    fn from_str_reports_unknown_name() {
        let err = "ectoplasm".parse::<Evidence>().unwrap_err();
        assert_eq!(err, UnknownEvidence("ectoplasm".to_string()));
        assert_eq!(err.to_string(), "unknown evidence type: \"ectoplasm\"");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Evidence::GhostWriting).unwrap();
        assert_eq!(json, "\"Ghost Writing\"");
        let back: Evidence = serde_json::from_str("\"EMF 5\"").unwrap();
        assert_eq!(back, Evidence::Emf5);
    }
}
