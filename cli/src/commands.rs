//! Command parsing for the interactive prompt.

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub usage: &'static str,
    pub description: &'static str,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        usage: "y, yes <evidence>",
        description: "Log evidence as present",
    },
    CommandSpec {
        usage: "n, no <evidence>",
        description: "Log evidence as absent",
    },
    CommandSpec {
        usage: "c, clear <evidence>",
        description: "Forget a logged evidence",
    },
    CommandSpec {
        usage: "in <ghost>",
        description: "Toggle ruling a ghost in",
    },
    CommandSpec {
        usage: "out <ghost>",
        description: "Toggle ruling a ghost out",
    },
    CommandSpec {
        usage: "u, uncheck <ghost>",
        description: "Remove any ruling on a ghost",
    },
    CommandSpec {
        usage: "reset [evidence|ghosts|all]",
        description: "Reset; bare reset clears rulings first, then everything",
    },
    CommandSpec {
        usage: "s, show",
        description: "Show the board",
    },
    CommandSpec {
        usage: "json",
        description: "Print the board as JSON",
    },
    CommandSpec {
        usage: "q, quit",
        description: "Exit",
    },
];

#[must_use]
pub fn command_help() -> String {
    let width = COMMAND_SPECS
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);
    COMMAND_SPECS
        .iter()
        .map(|spec| format!("  {:<width$}  {}\n", spec.usage, spec.description))
        .collect()
}

/// Which half of the observation store a reset targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    /// Rulings if there are any, otherwise everything.
    Auto,
    Evidence,
    Ghosts,
    All,
}

/// Parsed command with its raw, not yet validated, argument.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Log { evidence: &'a str, outcome: bool },
    Delog(&'a str),
    RuleIn(&'a str),
    RuleOut(&'a str),
    Uncheck(&'a str),
    Reset(Result<ResetScope, &'a str>),
    Show,
    Json,
    Help,
    Quit,
    Unknown(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    /// Parse a raw input line into a typed Command.
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let (head, arg) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(head, rest)| (head, rest.trim()));

        match head {
            "" => Command::Empty,
            "y" | "yes" => Command::Log {
                evidence: arg,
                outcome: true,
            },
            "n" | "no" => Command::Log {
                evidence: arg,
                outcome: false,
            },
            "c" | "clear" => Command::Delog(arg),
            "in" => Command::RuleIn(arg),
            "out" => Command::RuleOut(arg),
            "u" | "uncheck" => Command::Uncheck(arg),
            "reset" | "new" => Command::Reset(match arg {
                "" => Ok(ResetScope::Auto),
                "evidence" => Ok(ResetScope::Evidence),
                "ghosts" | "rulings" => Ok(ResetScope::Ghosts),
                "all" => Ok(ResetScope::All),
                other => Err(other),
            }),
            "s" | "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_commands_keep_multiword_argument() {
        assert_eq!(
            Command::parse("yes  Spirit Box "),
            Command::Log {
                evidence: "Spirit Box",
                outcome: true
            }
        );
        assert_eq!(
            Command::parse("n freezing"),
            Command::Log {
                evidence: "freezing",
                outcome: false
            }
        );
    }

    #[test]
    fn parse_log_without_argument() {
        assert_eq!(
            Command::parse("yes"),
            Command::Log {
                evidence: "",
                outcome: true
            }
        );
    }

    #[test]
    fn parse_ghost_commands() {
        assert_eq!(Command::parse("in Jinn"), Command::RuleIn("Jinn"));
        assert_eq!(Command::parse("out oni"), Command::RuleOut("oni"));
        assert_eq!(Command::parse("u Mare"), Command::Uncheck("Mare"));
        assert_eq!(Command::parse("clear EMF 5"), Command::Delog("EMF 5"));
    }

    #[test]
    fn parse_reset_scopes() {
        assert_eq!(Command::parse("reset"), Command::Reset(Ok(ResetScope::Auto)));
        assert_eq!(Command::parse("new"), Command::Reset(Ok(ResetScope::Auto)));
        assert_eq!(
            Command::parse("reset evidence"),
            Command::Reset(Ok(ResetScope::Evidence))
        );
        assert_eq!(
            Command::parse("reset ghosts"),
            Command::Reset(Ok(ResetScope::Ghosts))
        );
        assert_eq!(Command::parse("reset all"), Command::Reset(Ok(ResetScope::All)));
        assert_eq!(Command::parse("reset later"), Command::Reset(Err("later")));
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("show"), Command::Show);
        assert_eq!(Command::parse("json"), Command::Json);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("summon Oni"), Command::Unknown("summon"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Command::parse("QUIT"), Command::Unknown("QUIT"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = command_help();
        assert_eq!(help.lines().count(), COMMAND_SPECS.len());
        assert!(help.contains("reset [evidence|ghosts|all]"));
    }
}
