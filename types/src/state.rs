//! Tri-state observation markers.
//!
//! Both halves of the observation store are three-valued. Modeling them as
//! enums keeps "no observation" distinct from "observed absent".

use serde::{Deserialize, Serialize};

/// What is known about one evidence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    #[default]
    Unset,
    /// Confirmed present.
    Present,
    /// Confirmed absent.
    Absent,
}

impl Observation {
    #[must_use]
    pub const fn from_outcome(outcome: bool) -> Self {
        if outcome { Self::Present } else { Self::Absent }
    }

    /// `Some(true)` for present, `Some(false)` for absent.
    #[must_use]
    pub const fn outcome(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Present => Some(true),
            Self::Absent => Some(false),
        }
    }

    #[must_use]
    pub const fn is_logged(self) -> bool {
        !matches!(self, Self::Unset)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// A manual ruling on one ghost, independent of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Override {
    #[default]
    Unset,
    RuledIn,
    RuledOut,
}

impl Override {
    /// Unset and ruled-out become ruled-in; ruled-in goes back to unset.
    #[must_use]
    pub const fn toggle_in(self) -> Self {
        match self {
            Self::RuledIn => Self::Unset,
            Self::Unset | Self::RuledOut => Self::RuledIn,
        }
    }

    /// Mirror of [`Override::toggle_in`] for ruled-out.
    #[must_use]
    pub const fn toggle_out(self) -> Self {
        match self {
            Self::RuledOut => Self::Unset,
            Self::Unset | Self::RuledIn => Self::RuledOut,
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Sort key: ruled-in first, then neutral, then ruled-out.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::RuledIn => 0,
            Self::Unset => 1,
            Self::RuledOut => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::RuledIn => "ruled_in",
            Self::RuledOut => "ruled_out",
        }
    }
}
