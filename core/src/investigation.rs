//! The investigation facade: mutators, queries, and auto-retraction.
//!
//! Every query recomputes from the observation store, so a read always
//! reflects the latest write. The one feedback edge is auto-retraction:
//! whenever an evidence mutation shrinks the consistent set, overrides on the
//! ghosts that dropped out are cleared. Retraction only touches overrides,
//! never evidence, so it cannot trigger itself.

use serde::Serialize;

use ghostlog_types::{Evidence, Ghost, Observation, Override, ReferenceTable, RequirementSet};

use crate::filter::{consistent_ghosts, prioritize_overrides, refine, removed_ghosts};
use crate::probability::{Percentage, ScenarioCounts, rank_unlogged};
use crate::store::ObservationStore;

/// Where an investigation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resolution {
    /// More than one ghost remains.
    Open { remaining: usize },
    /// Exactly one ghost remains.
    Determined { ghost: Ghost },
    /// Observations rule out every ghost.
    Exhausted,
}

impl Resolution {
    fn of(refined: &[Ghost]) -> Self {
        match refined {
            [] => Self::Exhausted,
            [ghost] => Self::Determined { ghost: *ghost },
            rest => Self::Open {
                remaining: rest.len(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Investigation {
    table: ReferenceTable,
    store: ObservationStore,
}

impl Investigation {
    #[must_use]
    pub fn new(table: ReferenceTable) -> Self {
        Self {
            table,
            store: ObservationStore::new(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    #[must_use]
    pub fn store(&self) -> &ObservationStore {
        &self.store
    }

    #[must_use]
    pub fn observation(&self, evidence: Evidence) -> Observation {
        self.store.observation(evidence)
    }

    #[must_use]
    pub fn override_of(&self, ghost: Ghost) -> Override {
        self.store.override_of(ghost)
    }

    // ========================================================================
    // Mutators
    // ========================================================================
    //
    // Evidence mutators return the ghosts whose overrides were auto-retracted.

    pub fn log_evidence(&mut self, evidence: Evidence, outcome: bool) -> Vec<Ghost> {
        tracing::debug!(%evidence, outcome, "Logging evidence");
        self.mutate_evidence(|store| {
            store.set_observation(evidence, Observation::from_outcome(outcome));
        })
    }

    pub fn delog_evidence(&mut self, evidence: Evidence) -> Vec<Ghost> {
        tracing::debug!(%evidence, "Clearing evidence");
        self.mutate_evidence(|store| store.set_observation(evidence, Observation::Unset))
    }

    pub fn reset_evidence(&mut self) -> Vec<Ghost> {
        tracing::debug!("Resetting evidence");
        self.mutate_evidence(ObservationStore::clear_evidence)
    }

    /// Returns the new override.
    pub fn toggle_ghost_affirmed(&mut self, ghost: Ghost) -> Override {
        let next = self.store.override_of(ghost).toggle_in();
        self.set_override(ghost, next);
        next
    }

    /// Returns the new override.
    pub fn toggle_ghost_denied(&mut self, ghost: Ghost) -> Override {
        let next = self.store.override_of(ghost).toggle_out();
        self.set_override(ghost, next);
        next
    }

    pub fn uncheck_ghost(&mut self, ghost: Ghost) {
        self.set_override(ghost, Override::Unset);
    }

    pub fn reset_ghosts(&mut self) {
        tracing::debug!("Resetting ghost overrides");
        self.store.clear_overrides();
    }

    /// Start over: no evidence, no overrides.
    pub fn reset_all(&mut self) {
        tracing::debug!("Starting a new investigation");
        self.store.clear_evidence();
        self.store.clear_overrides();
    }

    fn set_override(&mut self, ghost: Ghost, value: Override) {
        tracing::debug!(%ghost, value = value.as_str(), "Setting override");
        self.store.set_override(ghost, value);
    }

    /// Apply an evidence change, then retract overrides on ghosts that left
    /// the consistent set.
    fn mutate_evidence(&mut self, apply: impl FnOnce(&mut ObservationStore)) -> Vec<Ghost> {
        let before = consistent_ghosts(&self.table, &self.store);
        apply(&mut self.store);
        let after = consistent_ghosts(&self.table, &self.store);

        if before == after {
            return Vec::new();
        }
        self.retract_stale_overrides(&before, &after)
    }

    fn retract_stale_overrides(&mut self, before: &[Ghost], after: &[Ghost]) -> Vec<Ghost> {
        let mut retracted = Vec::new();
        for ghost in removed_ghosts(before, after) {
            let previous = self.store.override_of(ghost);
            if previous.is_set() {
                tracing::debug!(
                    %ghost,
                    previous = previous.as_str(),
                    "Retracting override on ghost ruled out by evidence"
                );
                self.store.set_override(ghost, Override::Unset);
                retracted.push(ghost);
            }
        }
        retracted
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ghosts consistent with logged evidence: ruled-in first, then neutral,
    /// then ruled-out, each group in natural order.
    #[must_use]
    pub fn consistent_ghosts(&self) -> Vec<Ghost> {
        let mut ghosts = consistent_ghosts(&self.table, &self.store);
        prioritize_overrides(&mut ghosts, &self.store);
        ghosts
    }

    /// The consistent set narrowed by manual overrides.
    #[must_use]
    pub fn refined_ghosts(&self) -> Vec<Ghost> {
        refine(&self.consistent_ghosts(), &self.store)
    }

    /// Logged evidence: present before absent, each group in display order.
    #[must_use]
    pub fn logged_evidence(&self) -> Vec<Evidence> {
        let mut logged: Vec<Evidence> = self
            .table
            .evidence_order()
            .iter()
            .copied()
            .filter(|&e| self.store.observation(e).is_logged())
            .collect();
        logged.sort_by_key(|&e| self.store.observation(e) == Observation::Absent);
        logged
    }

    #[must_use]
    pub fn scenario_counts(&self) -> ScenarioCounts {
        ScenarioCounts::tally(&self.table, &self.refined_ghosts())
    }

    /// Unlogged evidence some remaining ghost requires, most scenarios first.
    #[must_use]
    pub fn ranked_unlogged_evidence(&self) -> Vec<Evidence> {
        rank_unlogged(
            self.table.evidence_order(),
            &self.store,
            &self.scenario_counts(),
        )
    }

    /// Share of remaining ghosts that would show this evidence.
    #[must_use]
    pub fn probability_of(&self, evidence: Evidence) -> Percentage {
        let refined = self.refined_ghosts();
        let counts = ScenarioCounts::tally(&self.table, &refined);
        Percentage::of(counts.get(evidence), refined.len())
    }

    #[must_use]
    pub fn is_ghost_determined(&self) -> bool {
        self.refined_ghosts().len() == 1
    }

    #[must_use]
    pub fn determined_ghost(&self) -> Option<Ghost> {
        match self.refined_ghosts().as_slice() {
            [ghost] => Some(*ghost),
            _ => None,
        }
    }

    /// True when anything beyond plain "present" evidence was recorded: an
    /// absent evidence or any ghost override.
    #[must_use]
    pub fn has_manual_overrides(&self) -> bool {
        self.store.any_observation(Observation::Absent)
            || self.store.any_override(Override::RuledIn)
            || self.store.any_override(Override::RuledOut)
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        Resolution::of(&self.refined_ghosts())
    }

    /// Every derived value at once, for rendering or serialization.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let consistent = self.consistent_ghosts();
        let refined = refine(&consistent, &self.store);
        let counts = ScenarioCounts::tally(&self.table, &refined);

        let logged = self
            .logged_evidence()
            .into_iter()
            .map(|evidence| LoggedEvidence {
                evidence,
                observation: self.store.observation(evidence),
            })
            .collect();

        let candidates = rank_unlogged(self.table.evidence_order(), &self.store, &counts)
            .into_iter()
            .map(|evidence| Candidate {
                evidence,
                scenarios: counts.get(evidence),
                probability: Percentage::of(counts.get(evidence), refined.len()),
            })
            .collect();

        let ghosts = consistent
            .iter()
            .map(|&ghost| GhostEntry {
                ghost,
                ruling: self.store.override_of(ghost),
                requirements: *self.table.requirements(ghost),
                remaining: refined.contains(&ghost),
            })
            .collect();

        Snapshot {
            logged,
            candidates,
            ghosts,
            resolution: Resolution::of(&refined),
            has_manual_overrides: self.has_manual_overrides(),
        }
    }
}

impl Default for Investigation {
    fn default() -> Self {
        Self::new(ReferenceTable::standard())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub logged: Vec<LoggedEvidence>,
    pub candidates: Vec<Candidate>,
    /// The consistent set, in display order.
    pub ghosts: Vec<GhostEntry>,
    pub resolution: Resolution,
    pub has_manual_overrides: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoggedEvidence {
    pub evidence: Evidence,
    pub observation: Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub evidence: Evidence,
    pub scenarios: usize,
    pub probability: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GhostEntry {
    pub ghost: Ghost,
    #[serde(rename = "override")]
    pub ruling: Override,
    pub requirements: RequirementSet,
    /// Whether the ghost survives manual overrides.
    pub remaining: bool,
}
