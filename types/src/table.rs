//! Static reference data: which evidence each ghost leaves.
//!
//! A [`ReferenceTable`] is validated once at construction and is immutable
//! afterwards. Invariants:
//!
//! - every ghost in the closed universe appears exactly once
//! - every ghost requires exactly three distinct evidence types
//! - the evidence order is a permutation of all evidence types
//! - `ghosts_requiring(e)` contains `g` iff `requirements(g)` contains `e`

use std::fmt;
use std::mem;

use serde::Serialize;
use thiserror::Error;

use crate::{Evidence, Ghost};

/// Number of evidence types every ghost requires.
pub const REQUIREMENTS_PER_GHOST: usize = 3;

/// Error when a reference table violates its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{ghost} must require exactly {REQUIREMENTS_PER_GHOST} evidence types (got {count})")]
    RequirementCount { ghost: Ghost, count: usize },
    #[error("{ghost} lists {evidence} more than once")]
    RepeatedRequirement { ghost: Ghost, evidence: Evidence },
    #[error("{0} appears more than once in the table")]
    DuplicateGhost(Ghost),
    #[error("{0} is missing from the table")]
    MissingGhost(Ghost),
    #[error("{0} appears more than once in the evidence order")]
    DuplicateEvidence(Evidence),
    #[error("{0} is missing from the evidence order")]
    MissingEvidence(Evidence),
}

/// The three evidence types one ghost leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementSet([Evidence; REQUIREMENTS_PER_GHOST]);

impl RequirementSet {
    pub fn new(ghost: Ghost, evidence: &[Evidence]) -> Result<Self, TableError> {
        let set: [Evidence; REQUIREMENTS_PER_GHOST] =
            evidence
                .try_into()
                .map_err(|_err| TableError::RequirementCount {
                    ghost,
                    count: evidence.len(),
                })?;

        for (i, e) in set.iter().enumerate() {
            if set[..i].contains(e) {
                return Err(TableError::RepeatedRequirement {
                    ghost,
                    evidence: *e,
                });
            }
        }

        Ok(Self(set))
    }

    #[must_use]
    pub fn contains(&self, evidence: Evidence) -> bool {
        self.0.contains(&evidence)
    }

    pub fn iter(&self) -> impl Iterator<Item = Evidence> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[Evidence] {
        &self.0
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}, {b}, {c}")
    }
}

/// Ghost-to-evidence mapping plus its inverted index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    /// Natural enumeration order; every ordered output starts from this.
    ghosts: Vec<Ghost>,
    /// Indexed by [`Ghost::index`].
    requirements: Vec<RequirementSet>,
    evidence_order: Vec<Evidence>,
    /// Indexed by [`Evidence::index`]; each list follows `ghosts` order.
    inverted: Vec<Vec<Ghost>>,
}

const STANDARD_ENTRIES: [(Ghost, [Evidence; REQUIREMENTS_PER_GHOST]); Ghost::COUNT] = [
    (
        Ghost::Spirit,
        [
            Evidence::Fingerprints,
            Evidence::GhostWriting,
            Evidence::SpiritBox,
        ],
    ),
    (
        Ghost::Wraith,
        [
            Evidence::FreezingTemperatures,
            Evidence::SpiritBox,
            Evidence::Fingerprints,
        ],
    ),
    (
        Ghost::Phantom,
        [
            Evidence::FreezingTemperatures,
            Evidence::Emf5,
            Evidence::GhostOrbs,
        ],
    ),
    (
        Ghost::Poltergeist,
        [
            Evidence::GhostOrbs,
            Evidence::SpiritBox,
            Evidence::Fingerprints,
        ],
    ),
    (
        Ghost::Banshee,
        [
            Evidence::FreezingTemperatures,
            Evidence::Emf5,
            Evidence::Fingerprints,
        ],
    ),
    (
        Ghost::Jinn,
        [Evidence::GhostOrbs, Evidence::Emf5, Evidence::SpiritBox],
    ),
    (
        Ghost::Mare,
        [
            Evidence::FreezingTemperatures,
            Evidence::SpiritBox,
            Evidence::GhostOrbs,
        ],
    ),
    (
        Ghost::Revenant,
        [
            Evidence::Emf5,
            Evidence::Fingerprints,
            Evidence::GhostWriting,
        ],
    ),
    (
        Ghost::Shade,
        [Evidence::Emf5, Evidence::GhostOrbs, Evidence::Fingerprints],
    ),
    (
        Ghost::Demon,
        [
            Evidence::SpiritBox,
            Evidence::GhostWriting,
            Evidence::FreezingTemperatures,
        ],
    ),
    (
        Ghost::Yurei,
        [
            Evidence::FreezingTemperatures,
            Evidence::GhostOrbs,
            Evidence::GhostWriting,
        ],
    ),
    (
        Ghost::Oni,
        [Evidence::Emf5, Evidence::SpiritBox, Evidence::GhostWriting],
    ),
];

const STANDARD_EVIDENCE_ORDER: [Evidence; Evidence::COUNT] = [
    Evidence::Emf5,
    Evidence::SpiritBox,
    Evidence::GhostOrbs,
    Evidence::GhostWriting,
    Evidence::Fingerprints,
    Evidence::FreezingTemperatures,
];

impl ReferenceTable {
    /// Validate a caller-supplied table.
    ///
    /// The order of `entries` becomes the natural ghost order and
    /// `evidence_order` becomes the display and ranking order.
    pub fn new<I, R, E>(entries: I, evidence_order: E) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (Ghost, R)>,
        R: AsRef<[Evidence]>,
        E: IntoIterator<Item = Evidence>,
    {
        let mut ghosts = Vec::with_capacity(Ghost::COUNT);
        let mut slots: [Option<RequirementSet>; Ghost::COUNT] = [None; Ghost::COUNT];

        for (ghost, evidence) in entries {
            if slots[ghost.index()].is_some() {
                return Err(TableError::DuplicateGhost(ghost));
            }
            slots[ghost.index()] = Some(RequirementSet::new(ghost, evidence.as_ref())?);
            ghosts.push(ghost);
        }

        let requirements = Ghost::ALL
            .iter()
            .map(|&ghost| slots[ghost.index()].ok_or(TableError::MissingGhost(ghost)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut evidence_seen = [false; Evidence::COUNT];
        let mut order = Vec::with_capacity(Evidence::COUNT);
        for evidence in evidence_order {
            if mem::replace(&mut evidence_seen[evidence.index()], true) {
                return Err(TableError::DuplicateEvidence(evidence));
            }
            order.push(evidence);
        }
        if let Some(missing) = Evidence::ALL
            .into_iter()
            .find(|e| !evidence_seen[e.index()])
        {
            return Err(TableError::MissingEvidence(missing));
        }

        let inverted = ghosts.iter().fold(
            vec![Vec::new(); Evidence::COUNT],
            |mut acc: Vec<Vec<Ghost>>, &ghost| {
                for evidence in requirements[ghost.index()].iter() {
                    acc[evidence.index()].push(ghost);
                }
                acc
            },
        );

        Ok(Self {
            ghosts,
            requirements,
            evidence_order: order,
            inverted,
        })
    }

    /// The built-in table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_ENTRIES, STANDARD_EVIDENCE_ORDER)
            .expect("built-in reference table must be valid")
    }

    /// Ghosts in natural enumeration order.
    #[must_use]
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// Evidence types in display order.
    #[must_use]
    pub fn evidence_order(&self) -> &[Evidence] {
        &self.evidence_order
    }

    #[must_use]
    pub fn requirements(&self, ghost: Ghost) -> &RequirementSet {
        &self.requirements[ghost.index()]
    }

    #[must_use]
    pub fn ghosts_requiring(&self, evidence: Evidence) -> &[Ghost] {
        &self.inverted[evidence.index()]
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::standard()
    }
}
