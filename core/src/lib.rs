//! Deductive elimination engine for ghostlog.
//!
//! Given a [`ReferenceTable`](ghostlog_types::ReferenceTable) and the
//! observations logged so far, an [`Investigation`] answers which ghosts are
//! still possible, how likely each untested evidence type is, and whether the
//! investigation has collapsed to one ghost or none.
//!
//! Data flows one way: observation store, consistency filter, override
//! refinement, probabilities. The only write-back is auto-retraction of
//! overrides on ghosts that evidence has just ruled out.

pub mod filter;
mod investigation;
pub mod probability;
mod store;

pub use investigation::{Candidate, GhostEntry, Investigation, LoggedEvidence, Resolution, Snapshot};
pub use probability::{Percentage, ScenarioCounts};
pub use store::ObservationStore;
