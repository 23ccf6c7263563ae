//! The interactive loop: read a command, apply it, re-render.

use std::io::{BufRead, Write};

use anyhow::Result;

use ghostlog_core::Investigation;
use ghostlog_types::{Evidence, Ghost, Observation};

use crate::commands::{Command, ResetScope, command_help};
use crate::render::{RenderStyle, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    investigation: Investigation,
    style: RenderStyle,
}

impl Session {
    #[must_use]
    pub fn new(investigation: Investigation, style: RenderStyle) -> Self {
        Self {
            investigation,
            style,
        }
    }

    #[cfg(test)]
    fn investigation(&self) -> &Investigation {
        &self.investigation
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "ghostlog - type `help` for commands")?;
        out.write_all(self.board().as_bytes())?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            let (flow, message) = self.execute(&line);
            out.write_all(message.as_bytes())?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn board(&self) -> String {
        render_board(&self.investigation.snapshot(), self.style)
    }

    fn execute(&mut self, line: &str) -> (Flow, String) {
        let command = Command::parse(line);
        tracing::debug!(?command, "Executing command");

        let notice = match command {
            Command::Empty => return (Flow::Continue, String::new()),
            Command::Quit => return (Flow::Quit, String::new()),
            Command::Help => return (Flow::Continue, command_help()),
            Command::Json => {
                let message = match serde_json::to_string_pretty(&self.investigation.snapshot()) {
                    Ok(json) => json + "\n",
                    Err(err) => format!("error: {err}\n"),
                };
                return (Flow::Continue, message);
            }
            Command::Unknown(cmd) => {
                return (
                    Flow::Continue,
                    format!("Unknown command: {cmd} (try `help`)\n"),
                );
            }
            Command::Show => None,
            Command::Log { evidence, outcome } => match parse_evidence(evidence) {
                Ok(evidence) => {
                    let retracted = self.investigation.log_evidence(evidence, outcome);
                    retraction_notice(&retracted)
                }
                Err(message) => return (Flow::Continue, message),
            },
            Command::Delog(evidence) => match parse_evidence(evidence) {
                Ok(evidence) => {
                    let retracted = self.investigation.delog_evidence(evidence);
                    retraction_notice(&retracted)
                }
                Err(message) => return (Flow::Continue, message),
            },
            Command::RuleIn(ghost) => match parse_ghost(ghost) {
                Ok(ghost) => {
                    self.investigation.toggle_ghost_affirmed(ghost);
                    None
                }
                Err(message) => return (Flow::Continue, message),
            },
            Command::RuleOut(ghost) => match parse_ghost(ghost) {
                Ok(ghost) => {
                    self.investigation.toggle_ghost_denied(ghost);
                    None
                }
                Err(message) => return (Flow::Continue, message),
            },
            Command::Uncheck(ghost) => match parse_ghost(ghost) {
                Ok(ghost) => {
                    self.investigation.uncheck_ghost(ghost);
                    None
                }
                Err(message) => return (Flow::Continue, message),
            },
            Command::Reset(Ok(scope)) => Some(self.reset(scope)),
            Command::Reset(Err(scope)) => {
                return (
                    Flow::Continue,
                    format!("Unknown reset scope: {scope} (evidence, ghosts, all)\n"),
                );
            }
        };

        let mut message = notice.unwrap_or_default();
        message.push_str(&self.board());
        (Flow::Continue, message)
    }

    fn reset(&mut self, scope: ResetScope) -> String {
        match scope {
            ResetScope::Evidence => {
                let _ = self.investigation.reset_evidence();
                "Evidence cleared.\n".to_string()
            }
            ResetScope::Ghosts => {
                self.investigation.reset_ghosts();
                "Rulings cleared.\n".to_string()
            }
            ResetScope::All => {
                self.investigation.reset_all();
                "New investigation.\n".to_string()
            }
            ResetScope::Auto if self.investigation.has_manual_overrides() => {
                self.clear_rulings();
                "Rulings cleared; confirmed evidence kept.\n".to_string()
            }
            ResetScope::Auto => {
                self.investigation.reset_all();
                "New investigation.\n".to_string()
            }
        }
    }

    /// Drop ghost overrides and absent evidence, keeping present evidence.
    fn clear_rulings(&mut self) {
        self.investigation.reset_ghosts();
        let absent: Vec<Evidence> = self
            .investigation
            .logged_evidence()
            .into_iter()
            .filter(|&e| self.investigation.observation(e) == Observation::Absent)
            .collect();
        for evidence in absent {
            let _ = self.investigation.delog_evidence(evidence);
        }
    }
}

fn parse_evidence(raw: &str) -> Result<Evidence, String> {
    if raw.is_empty() {
        return Err("Missing evidence name.\n".to_string());
    }
    raw.parse().map_err(|err| format!("{err}\n"))
}

fn parse_ghost(raw: &str) -> Result<Ghost, String> {
    if raw.is_empty() {
        return Err("Missing ghost name.\n".to_string());
    }
    raw.parse().map_err(|err| format!("{err}\n"))
}

fn retraction_notice(retracted: &[Ghost]) -> Option<String> {
    if retracted.is_empty() {
        return None;
    }
    let names: Vec<&str> = retracted.iter().map(|g| g.as_str()).collect();
    Some(format!(
        "Cleared rulings on ghosts the evidence ruled out: {}\n",
        names.join(", ")
    ))
}
