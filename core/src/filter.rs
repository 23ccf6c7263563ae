//! Consistency filtering and manual-override refinement.
//!
//! Pure functions of the reference table and observation store. Nothing here
//! is cached; callers recompute on every read.

use ghostlog_types::{Evidence, Ghost, Observation, Override, ReferenceTable, RequirementSet};

use crate::store::ObservationStore;

/// A ghost is consistent when no logged evidence contradicts it: every
/// present evidence is among its requirements and no absent one is.
#[must_use]
pub fn is_consistent(requirements: &RequirementSet, store: &ObservationStore) -> bool {
    Evidence::ALL
        .into_iter()
        .all(|evidence| match store.observation(evidence) {
            Observation::Unset => true,
            Observation::Present => requirements.contains(evidence),
            Observation::Absent => !requirements.contains(evidence),
        })
}

/// Ghosts not contradicted by logged evidence, in the table's natural order.
#[must_use]
pub fn consistent_ghosts(table: &ReferenceTable, store: &ObservationStore) -> Vec<Ghost> {
    table
        .ghosts()
        .iter()
        .copied()
        .filter(|&ghost| is_consistent(table.requirements(ghost), store))
        .collect()
}

/// Stable sort: ruled-in, then neutral, then ruled-out.
pub fn prioritize_overrides(ghosts: &mut [Ghost], store: &ObservationStore) {
    ghosts.sort_by_key(|&ghost| store.override_of(ghost).rank());
}

/// Narrow a consistent set by manual overrides.
///
/// If any ghost is ruled in, only ruled-in ghosts that are still consistent
/// survive (possibly none). Otherwise ruled-out ghosts are dropped.
#[must_use]
pub fn refine(consistent: &[Ghost], store: &ObservationStore) -> Vec<Ghost> {
    let keep: fn(Override) -> bool = if store.any_override(Override::RuledIn) {
        |value| value == Override::RuledIn
    } else {
        |value| value != Override::RuledOut
    };

    consistent
        .iter()
        .copied()
        .filter(|&ghost| keep(store.override_of(ghost)))
        .collect()
}

/// Members of `before` that are missing from `after`, in `before` order.
#[must_use]
pub fn removed_ghosts(before: &[Ghost], after: &[Ghost]) -> Vec<Ghost> {
    let mut present = [false; Ghost::COUNT];
    for ghost in after {
        present[ghost.index()] = true;
    }
    before
        .iter()
        .copied()
        .filter(|ghost| !present[ghost.index()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(evidence: &[(Evidence, bool)]) -> ObservationStore {
        let mut store = ObservationStore::new();
        for &(e, outcome) in evidence {
            store.set_observation(e, Observation::from_outcome(outcome));
        }
        store
    }

    #[test]
    fn no_observations_keeps_everything() {
        let table = ReferenceTable::standard();
        let store = ObservationStore::new();
        assert_eq!(consistent_ghosts(&table, &store), table.ghosts());
    }

    #[test]
    fn present_evidence_requires_membership() {
        let table = ReferenceTable::standard();
        for evidence in Evidence::ALL {
            let store = store_with(&[(evidence, true)]);
            let consistent = consistent_ghosts(&table, &store);
            assert_eq!(consistent, table.ghosts_requiring(evidence), "{evidence}");
        }
    }

    #[test]
    fn absent_evidence_excludes_members() {
        let table = ReferenceTable::standard();
        let store = store_with(&[(Evidence::SpiritBox, false)]);
        let consistent = consistent_ghosts(&table, &store);
        assert_eq!(consistent.len(), Ghost::COUNT - 7);
        assert!(
            consistent
                .iter()
                .all(|&g| !table.requirements(g).contains(Evidence::SpiritBox))
        );
    }

    #[test]
    fn emf_and_spirit_box_leave_jinn_and_oni() {
        let table = ReferenceTable::standard();
        let store = store_with(&[(Evidence::Emf5, true), (Evidence::SpiritBox, true)]);
        assert_eq!(consistent_ghosts(&table, &store), vec![Ghost::Jinn, Ghost::Oni]);
    }

    #[test]
    fn four_present_evidence_leaves_nothing() {
        let table = ReferenceTable::standard();
        let store = store_with(&[
            (Evidence::Emf5, true),
            (Evidence::SpiritBox, true),
            (Evidence::GhostOrbs, true),
            (Evidence::GhostWriting, true),
        ]);
        assert!(consistent_ghosts(&table, &store).is_empty());
    }

    #[test]
    fn prioritize_is_stable() {
        let mut store = ObservationStore::new();
        store.set_override(Ghost::Oni, Override::RuledIn);
        store.set_override(Ghost::Spirit, Override::RuledOut);
        store.set_override(Ghost::Mare, Override::RuledIn);

        let mut ghosts = vec![
            Ghost::Spirit,
            Ghost::Wraith,
            Ghost::Mare,
            Ghost::Shade,
            Ghost::Oni,
        ];
        prioritize_overrides(&mut ghosts, &store);
        assert_eq!(
            ghosts,
            vec![
                Ghost::Mare,
                Ghost::Oni,
                Ghost::Wraith,
                Ghost::Shade,
                Ghost::Spirit,
            ]
        );
    }

    #[test]
    fn refine_without_overrides_is_identity() {
        let store = ObservationStore::new();
        let consistent = vec![Ghost::Jinn, Ghost::Oni];
        assert_eq!(refine(&consistent, &store), consistent);
    }

    #[test]
    fn refine_drops_ruled_out() {
        let mut store = ObservationStore::new();
        store.set_override(Ghost::Oni, Override::RuledOut);
        assert_eq!(refine(&[Ghost::Jinn, Ghost::Oni], &store), vec![Ghost::Jinn]);
    }

    #[test]
    fn ruled_in_takes_precedence() {
        let mut store = ObservationStore::new();
        store.set_override(Ghost::Oni, Override::RuledIn);
        store.set_override(Ghost::Jinn, Override::RuledOut);
        assert_eq!(
            refine(&[Ghost::Jinn, Ghost::Oni, Ghost::Mare], &store),
            vec![Ghost::Oni]
        );
    }

    #[test]
    fn ruled_in_outside_consistent_set_yields_empty() {
        let mut store = ObservationStore::new();
        store.set_override(Ghost::Demon, Override::RuledIn);
        assert!(refine(&[Ghost::Jinn, Ghost::Oni], &store).is_empty());
    }

    #[test]
    fn refine_keeps_consistent_order() {
        let mut store = ObservationStore::new();
        store.set_override(Ghost::Oni, Override::RuledIn);
        store.set_override(Ghost::Jinn, Override::RuledIn);
        assert_eq!(
            refine(&[Ghost::Jinn, Ghost::Mare, Ghost::Oni], &store),
            vec![Ghost::Jinn, Ghost::Oni]
        );
    }

    #[test]
    fn removed_ghosts_is_set_difference() {
        let before = [Ghost::Spirit, Ghost::Jinn, Ghost::Mare, Ghost::Oni];
        let after = [Ghost::Oni, Ghost::Jinn];
        assert_eq!(removed_ghosts(&before, &after), vec![Ghost::Spirit, Ghost::Mare]);
        assert!(removed_ghosts(&after, &before).is_empty());
    }
}
