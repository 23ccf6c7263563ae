//! The observation store: the only mutable state in an investigation.

use ghostlog_types::{Evidence, Ghost, Observation, Override};

/// Evidence observations and manual ghost overrides.
///
/// Both halves are dense arrays keyed by the enum index, so a lookup can
/// never miss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationStore {
    evidence: [Observation; Evidence::COUNT],
    overrides: [Override; Ghost::COUNT],
}

impl ObservationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn observation(&self, evidence: Evidence) -> Observation {
        self.evidence[evidence.index()]
    }

    pub(crate) fn set_observation(&mut self, evidence: Evidence, observation: Observation) {
        self.evidence[evidence.index()] = observation;
    }

    #[must_use]
    pub fn override_of(&self, ghost: Ghost) -> Override {
        self.overrides[ghost.index()]
    }

    pub(crate) fn set_override(&mut self, ghost: Ghost, value: Override) {
        self.overrides[ghost.index()] = value;
    }

    pub(crate) fn clear_evidence(&mut self) {
        self.evidence = [Observation::Unset; Evidence::COUNT];
    }

    pub(crate) fn clear_overrides(&mut self) {
        self.overrides = [Override::Unset; Ghost::COUNT];
    }

    /// Whether any ghost carries the given override.
    #[must_use]
    pub fn any_override(&self, value: Override) -> bool {
        self.overrides.contains(&value)
    }

    #[must_use]
    pub fn any_observation(&self, value: Observation) -> bool {
        self.evidence.contains(&value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.evidence.iter().any(|o| o.is_logged()) && !self.overrides.iter().any(|o| o.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ObservationStore::new();
        assert!(store.is_empty());
        for evidence in Evidence::ALL {
            assert_eq!(store.observation(evidence), Observation::Unset);
        }
        for ghost in Ghost::ALL {
            assert_eq!(store.override_of(ghost), Override::Unset);
        }
    }

    #[test]
    fn halves_clear_independently() {
        let mut store = ObservationStore::new();
        store.set_observation(Evidence::Emf5, Observation::Present);
        store.set_override(Ghost::Oni, Override::RuledIn);

        store.clear_evidence();
        assert_eq!(store.observation(Evidence::Emf5), Observation::Unset);
        assert_eq!(store.override_of(Ghost::Oni), Override::RuledIn);

        store.clear_overrides();
        assert!(store.is_empty());
    }

    #[test]
    fn any_override_and_observation() {
        let mut store = ObservationStore::new();
        assert!(!store.any_override(Override::RuledOut));
        store.set_override(Ghost::Mare, Override::RuledOut);
        assert!(store.any_override(Override::RuledOut));

        assert!(!store.any_observation(Observation::Absent));
        store.set_observation(Evidence::GhostOrbs, Observation::Absent);
        assert!(store.any_observation(Observation::Absent));
    }
}
