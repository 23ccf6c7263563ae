//! Core domain types for ghostlog.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the closed evidence and ghost enumerations, the tri-state observation
//! markers, and the validated reference table.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod evidence;
mod ghost;
mod state;
mod table;

pub use evidence::{Evidence, UnknownEvidence};
pub use ghost::{Ghost, UnknownGhost};
pub use state::{Observation, Override};
pub use table::{REQUIREMENTS_PER_GHOST, ReferenceTable, RequirementSet, TableError};
