//! Scenario counting, display percentages, and candidate ranking.
//!
//! Every remaining ghost is treated as equally likely, so the probability of
//! an evidence type is just the share of remaining ghosts that require it.

use std::fmt;

use serde::{Serialize, Serializer};

use ghostlog_types::{Evidence, Ghost, ReferenceTable};

use crate::store::ObservationStore;

/// For each evidence type, how many of a ghost set require it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScenarioCounts([usize; Evidence::COUNT]);

impl ScenarioCounts {
    #[must_use]
    pub fn tally(table: &ReferenceTable, ghosts: &[Ghost]) -> Self {
        let mut member = [false; Ghost::COUNT];
        for ghost in ghosts {
            member[ghost.index()] = true;
        }

        let mut counts = [0; Evidence::COUNT];
        for evidence in Evidence::ALL {
            counts[evidence.index()] = table
                .ghosts_requiring(evidence)
                .iter()
                .filter(|ghost| member[ghost.index()])
                .count();
        }
        Self(counts)
    }

    #[must_use]
    pub fn get(&self, evidence: Evidence) -> usize {
        self.0[evidence.index()]
    }
}

/// A display percentage.
///
/// An empty ghost set divides by one instead of zero, so it reads `0.00%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    #[must_use]
    pub fn of(count: usize, total: usize) -> Self {
        Self(count as f64 / total.max(1) as f64 * 100.0)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Unlogged evidence types that some remaining ghost still requires, most
/// scenarios first.
///
/// Built by sorted insertion: each candidate goes after every earlier one
/// with an equal or higher count, so ties keep `order`.
#[must_use]
pub fn rank_unlogged(
    order: &[Evidence],
    store: &ObservationStore,
    counts: &ScenarioCounts,
) -> Vec<Evidence> {
    let mut ranked: Vec<Evidence> = Vec::with_capacity(order.len());
    for &evidence in order {
        let count = counts.get(evidence);
        if count == 0 || store.observation(evidence).is_logged() {
            continue;
        }
        let at = ranked.partition_point(|&placed| counts.get(placed) >= count);
        ranked.insert(at, evidence);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    use ghostlog_types::Observation;

    #[test]
    fn tally_full_table() {
        let table = ReferenceTable::standard();
        let counts = ScenarioCounts::tally(&table, table.ghosts());
        assert_eq!(counts.get(Evidence::SpiritBox), 7);
        assert_eq!(counts.get(Evidence::GhostWriting), 5);
        assert_eq!(counts.get(Evidence::Emf5), 6);
    }

    #[test]
    fn tally_subset() {
        let table = ReferenceTable::standard();
        let counts = ScenarioCounts::tally(&table, &[Ghost::Jinn, Ghost::Oni]);
        assert_eq!(counts.get(Evidence::Emf5), 2);
        assert_eq!(counts.get(Evidence::SpiritBox), 2);
        assert_eq!(counts.get(Evidence::GhostWriting), 1);
        assert_eq!(counts.get(Evidence::GhostOrbs), 1);
        assert_eq!(counts.get(Evidence::Fingerprints), 0);
        assert_eq!(counts.get(Evidence::FreezingTemperatures), 0);
    }

    #[test]
    fn tally_empty_set_is_zero() {
        let table = ReferenceTable::standard();
        assert_eq!(ScenarioCounts::tally(&table, &[]), ScenarioCounts::default());
    }

    #[test]
    fn percentage_formats_two_decimals() {
        assert_eq!(Percentage::of(1, 2).to_string(), "50.00%");
        assert_eq!(Percentage::of(1, 3).to_string(), "33.33%");
        assert_eq!(Percentage::of(2, 3).to_string(), "66.67%");
        assert_eq!(Percentage::of(7, 12).to_string(), "58.33%");
        assert_eq!(Percentage::of(3, 3).to_string(), "100.00%");
    }

    #[test]
    fn percentage_of_empty_set_is_zero() {
        assert_eq!(Percentage::of(0, 0).to_string(), "0.00%");
        assert!(Percentage::of(0, 0).value().is_finite());
    }

    #[test]
    fn percentage_serializes_as_display_string() {
        let json = serde_json::to_string(&Percentage::of(1, 2)).unwrap();
        assert_eq!(json, "\"50.00%\"");
    }

    #[test]
    fn rank_sorts_descending_with_stable_ties() {
        let table = ReferenceTable::standard();
        let store = ObservationStore::new();
        let counts = ScenarioCounts::tally(&table, table.ghosts());
        assert_eq!(
            rank_unlogged(table.evidence_order(), &store, &counts),
            vec![
                Evidence::SpiritBox,
                Evidence::Emf5,
                Evidence::GhostOrbs,
                Evidence::Fingerprints,
                Evidence::FreezingTemperatures,
                Evidence::GhostWriting,
            ]
        );
    }

    #[test]
    fn rank_ties_follow_given_order() {
        let table = ReferenceTable::standard();
        let store = ObservationStore::new();
        let counts = ScenarioCounts::tally(&table, &[Ghost::Jinn, Ghost::Oni]);
        let forward = rank_unlogged(
            &[
                Evidence::GhostWriting,
                Evidence::GhostOrbs,
                Evidence::Emf5,
                Evidence::SpiritBox,
            ],
            &store,
            &counts,
        );
        assert_eq!(
            forward,
            vec![
                Evidence::Emf5,
                Evidence::SpiritBox,
                Evidence::GhostWriting,
                Evidence::GhostOrbs,
            ]
        );
    }

    #[test]
    fn rank_skips_logged_and_zero_count() {
        let table = ReferenceTable::standard();
        let mut store = ObservationStore::new();
        store.set_observation(Evidence::Emf5, Observation::Present);
        store.set_observation(Evidence::SpiritBox, Observation::Present);
        let counts = ScenarioCounts::tally(&table, &[Ghost::Jinn, Ghost::Oni]);
        assert_eq!(
            rank_unlogged(table.evidence_order(), &store, &counts),
            vec![Evidence::GhostOrbs, Evidence::GhostWriting]
        );
    }
}
