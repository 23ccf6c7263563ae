//! Plain-text rendering of an investigation snapshot.

use std::fmt::Write;

use ghostlog_config::GhostlogConfig;
use ghostlog_core::{Resolution, Snapshot};
use ghostlog_types::{Observation, Override};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyphs {
    present: &'static str,
    absent: &'static str,
    ruled_in: &'static str,
    ruled_out: &'static str,
    neutral: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    present: "✓",
    absent: "✗",
    ruled_in: "●",
    ruled_out: "○",
    neutral: "·",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    present: "+",
    absent: "-",
    ruled_in: "*",
    ruled_out: "x",
    neutral: ".",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    glyphs: Glyphs,
    show_probabilities: bool,
}

impl RenderStyle {
    #[must_use]
    pub fn new(ascii_only: bool, show_probabilities: bool) -> Self {
        Self {
            glyphs: if ascii_only {
                ASCII_GLYPHS
            } else {
                UNICODE_GLYPHS
            },
            show_probabilities,
        }
    }

    #[must_use]
    pub fn from_config(config: &GhostlogConfig) -> Self {
        Self::new(config.ascii_only(), config.show_probabilities())
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new(false, true)
    }
}

#[must_use]
pub fn render_board(snapshot: &Snapshot, style: RenderStyle) -> String {
    let glyphs = style.glyphs;
    let mut out = String::new();

    if !snapshot.logged.is_empty() {
        out.push_str("Logged evidence\n");
        for logged in &snapshot.logged {
            let mark = match logged.observation {
                Observation::Absent => glyphs.absent,
                Observation::Present | Observation::Unset => glyphs.present,
            };
            let _ = writeln!(out, "  {mark} {}", logged.evidence);
        }
    }

    if !snapshot.candidates.is_empty() {
        out.push_str("Worth testing\n");
        let width = snapshot
            .candidates
            .iter()
            .map(|c| c.evidence.as_str().len())
            .max()
            .unwrap_or(0);
        for candidate in &snapshot.candidates {
            if style.show_probabilities {
                let _ = writeln!(
                    out,
                    "  {:<width$}  {:>7}",
                    candidate.evidence.as_str(),
                    candidate.probability.to_string()
                );
            } else {
                let _ = writeln!(out, "  {}", candidate.evidence);
            }
        }
    }

    let _ = writeln!(out, "Ghosts ({} consistent)", snapshot.ghosts.len());
    let width = snapshot
        .ghosts
        .iter()
        .map(|entry| entry.ghost.as_str().len())
        .max()
        .unwrap_or(0);
    for entry in &snapshot.ghosts {
        let mark = match entry.ruling {
            Override::RuledIn => glyphs.ruled_in,
            Override::RuledOut => glyphs.ruled_out,
            Override::Unset => glyphs.neutral,
        };
        let note = if entry.remaining { "" } else { "  (set aside)" };
        let _ = writeln!(
            out,
            "  {mark} {:<width$}  {}{note}",
            entry.ghost.as_str(),
            entry.requirements
        );
    }

    match snapshot.resolution {
        Resolution::Determined { ghost } => {
            let _ = writeln!(out, "It's a {ghost}.");
        }
        Resolution::Exhausted => out.push_str("No possible ghosts remain.\n"),
        Resolution::Open { remaining } => {
            let _ = writeln!(out, "{remaining} ghosts remain.");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use ghostlog_core::Investigation;
    use ghostlog_types::{Evidence, Ghost};

    #[test]
    fn fresh_board_lists_all_ghosts() {
        let board = render_board(&Investigation::default().snapshot(), RenderStyle::default());
        assert!(board.contains("Ghosts (12 consistent)"));
        assert!(board.contains("12 ghosts remain."));
        assert!(!board.contains("Logged evidence"));
        let spirit_box = board
            .lines()
            .find(|line| line.starts_with("  Spirit Box"))
            .unwrap();
        assert!(spirit_box.ends_with("58.33%"));
    }

    #[test]
    fn logged_evidence_uses_markers() {
        let mut inv = Investigation::default();
        inv.log_evidence(Evidence::Emf5, true);
        inv.log_evidence(Evidence::GhostOrbs, false);
        let board = render_board(&inv.snapshot(), RenderStyle::new(true, true));
        assert!(board.contains("  + EMF 5\n"));
        assert!(board.contains("  - Ghost Orbs\n"));
    }

    #[test]
    fn determined_and_set_aside_ghosts() {
        let mut inv = Investigation::default();
        inv.log_evidence(Evidence::Emf5, true);
        inv.log_evidence(Evidence::SpiritBox, true);
        inv.toggle_ghost_denied(Ghost::Oni);
        let board = render_board(&inv.snapshot(), RenderStyle::new(true, true));
        assert!(board.contains("It's a Jinn."));
        assert!(board.contains("x Oni"));
        assert!(board.contains("(set aside)"));
    }

    #[test]
    fn exhausted_board() {
        let mut inv = Investigation::default();
        inv.log_evidence(Evidence::Emf5, true);
        inv.log_evidence(Evidence::SpiritBox, true);
        inv.log_evidence(Evidence::Fingerprints, true);
        let board = render_board(&inv.snapshot(), RenderStyle::default());
        assert!(board.contains("No possible ghosts remain."));
        assert!(!board.contains("Worth testing"));
    }

    #[test]
    fn probabilities_can_be_hidden() {
        let board = render_board(
            &Investigation::default().snapshot(),
            RenderStyle::new(false, false),
        );
        assert!(!board.contains('%'));
        assert!(board.contains("  Spirit Box\n"));
    }
}
