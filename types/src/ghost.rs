//! The closed set of ghost identities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The hidden identity an investigation is trying to pin down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ghost {
    Spirit,
    Wraith,
    Phantom,
    Poltergeist,
    Banshee,
    Jinn,
    Mare,
    Revenant,
    Shade,
    Demon,
    Yurei,
    Oni,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ghost: {0:?}")]
pub struct UnknownGhost(pub String);

impl Ghost {
    pub const COUNT: usize = 12;

    pub const ALL: [Ghost; Self::COUNT] = [
        Ghost::Spirit,
        Ghost::Wraith,
        Ghost::Phantom,
        Ghost::Poltergeist,
        Ghost::Banshee,
        Ghost::Jinn,
        Ghost::Mare,
        Ghost::Revenant,
        Ghost::Shade,
        Ghost::Demon,
        Ghost::Yurei,
        Ghost::Oni,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ghost::Spirit => "Spirit",
            Ghost::Wraith => "Wraith",
            Ghost::Phantom => "Phantom",
            Ghost::Poltergeist => "Poltergeist",
            Ghost::Banshee => "Banshee",
            Ghost::Jinn => "Jinn",
            Ghost::Mare => "Mare",
            Ghost::Revenant => "Revenant",
            Ghost::Shade => "Shade",
            Ghost::Demon => "Demon",
            Ghost::Yurei => "Yurei",
            Ghost::Oni => "Oni",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|ghost| ghost.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Ghost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ghost {
    type Err = UnknownGhost;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownGhost(s.trim().to_string()))
    }
}
