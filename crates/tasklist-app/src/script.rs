//! Line-oriented command scripts driving a [`TaskService`].
//!
//! Each non-blank line that does not start with `#` is one command:
//!
//! ```text
//! add <text>
//! toggle <id>
//! remove <id>
//! list [filter] [sort]
//! filter <mode>
//! sort <mode>
//! stats
//! ```

use std::num::ParseIntError;

use tasklist_core::{FilterMode, SortMode, Task, TaskId, TaskStats, ValidationError};
use thiserror::Error;

use crate::service::TaskService;

/// Error raised for a script line that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The first word is not a known command.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// Command word as written, lowercased.
        name: String,
    },
    /// A required argument is absent.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command that needs the argument.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// The id argument is not a number.
    #[error("invalid task id '{value}': {source}")]
    InvalidId {
        /// Argument as written.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// `add <text>`
    Add {
        /// Raw text, validated when applied.
        text: String,
    },
    /// `toggle <id>`
    Toggle {
        /// Task to flip.
        id: TaskId,
    },
    /// `remove <id>`
    Remove {
        /// Task to delete.
        id: TaskId,
    },
    /// `list [filter] [sort]`
    List {
        /// Explicit filter; the service selection when `None`.
        filter: Option<FilterMode>,
        /// Explicit sort; the service selection when `None`.
        sort: Option<SortMode>,
    },
    /// `filter <mode>`
    SetFilter(FilterMode),
    /// `sort <mode>`
    SetSort(SortMode),
    /// `stats`
    Stats,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// The task was stored.
    Added(Task),
    /// Validation refused the text; nothing was stored.
    Rejected(ValidationError),
    /// Result of a remove.
    Removed {
        /// Requested id.
        id: TaskId,
        /// Whether a task was actually removed.
        found: bool,
    },
    /// Result of a toggle.
    Toggled {
        /// Requested id.
        id: TaskId,
        /// New completion flag, or `None` for an unknown id.
        completed: Option<bool>,
    },
    /// A rendered view.
    Listed {
        /// Filter the view was built with.
        filter: FilterMode,
        /// Sort the view was built with.
        sort: SortMode,
        /// Visible tasks in display order.
        tasks: Vec<Task>,
    },
    /// The service filter changed.
    FilterSet(FilterMode),
    /// The service sort changed.
    SortSet(SortMode),
    /// Aggregate counts.
    Stats(TaskStats),
}

/// Parse a single script line. Blank lines and `#` comments yield `None`.
///
/// Filter and sort tokens are lenient: unknown values select the defaults.
///
/// # Errors
/// Returns an error for unknown commands, missing arguments or bad ids.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));

    let command = match name.to_ascii_lowercase().as_str() {
        // The raw remainder goes to validation so empty/short errors surface there.
        "add" => ScriptCommand::Add { text: rest.to_owned() },
        "toggle" | "done" => ScriptCommand::Toggle {
            id: parse_id("toggle", rest)?,
        },
        "remove" | "rm" => ScriptCommand::Remove {
            id: parse_id("remove", rest)?,
        },
        "list" | "ls" => parse_list(rest),
        "filter" => ScriptCommand::SetFilter(FilterMode::from_token_or_default(require(
            "filter", "mode", rest,
        )?)),
        "sort" => ScriptCommand::SetSort(SortMode::from_token_or_default(require(
            "sort", "mode", rest,
        )?)),
        "stats" => ScriptCommand::Stats,
        other => {
            return Err(ScriptError::UnknownCommand {
                name: other.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

/// Tokens are matched by kind, so `list alphabetical` sets only the sort.
/// Unrecognized tokens fill the filter slot first, then the sort slot, with defaults.
fn parse_list(rest: &str) -> ScriptCommand {
    let mut filter = None;
    let mut sort = None;
    for token in rest.split_whitespace() {
        if filter.is_none()
            && let Ok(mode) = token.parse::<FilterMode>()
        {
            filter = Some(mode);
        } else if sort.is_none()
            && let Ok(mode) = token.parse::<SortMode>()
        {
            sort = Some(mode);
        } else if filter.is_none() {
            filter = Some(FilterMode::default());
        } else if sort.is_none() {
            sort = Some(SortMode::default());
        }
    }
    ScriptCommand::List { filter, sort }
}

fn require<'a>(
    command: &'static str,
    argument: &'static str,
    rest: &'a str,
) -> Result<&'a str, ScriptError> {
    if rest.is_empty() {
        Err(ScriptError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<TaskId, ScriptError> {
    let value = require(command, "id", rest)?;
    value.parse().map_err(|source| ScriptError::InvalidId {
        value: value.to_owned(),
        source,
    })
}

impl ScriptCommand {
    /// Run the command against `service`.
    pub fn apply(self, service: &mut TaskService) -> ScriptOutcome {
        match self {
            Self::Add { text } => match service.add(&text) {
                Ok(task) => ScriptOutcome::Added(task),
                Err(err) => ScriptOutcome::Rejected(err),
            },
            Self::Toggle { id } => ScriptOutcome::Toggled {
                id,
                completed: service.toggle(id),
            },
            Self::Remove { id } => ScriptOutcome::Removed {
                id,
                found: service.remove(id).is_some(),
            },
            Self::List { filter, sort } => {
                let filter = filter.unwrap_or_else(|| service.filter());
                let sort = sort.unwrap_or_else(|| service.sort());
                ScriptOutcome::Listed {
                    filter,
                    sort,
                    tasks: service.view(filter, sort),
                }
            }
            Self::SetFilter(filter) => {
                service.set_filter(filter);
                ScriptOutcome::FilterSet(filter)
            }
            Self::SetSort(sort) => {
                service.set_sort(sort);
                ScriptOutcome::SortSet(sort)
            }
            Self::Stats => ScriptOutcome::Stats(service.stats()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> ScriptCommand {
        match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => panic!("line should produce a command: {line}"),
            Err(err) => panic!("line should parse: {err}"),
        }
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# setup"), Ok(None));
    }

    #[test]
    fn add_keeps_inner_whitespace() {
        assert_eq!(
            parsed("add   Buy   milk  "),
            ScriptCommand::Add {
                text: "Buy   milk".into()
            }
        );
        assert_eq!(parsed("add"), ScriptCommand::Add { text: String::new() });
    }

    #[test]
    fn list_tokens_are_lenient() {
        assert_eq!(
            parsed("list pending alphabetical"),
            ScriptCommand::List {
                filter: Some(FilterMode::Pending),
                sort: Some(SortMode::Alphabetical),
            }
        );
        assert_eq!(
            parsed("ls whatever nonsense"),
            ScriptCommand::List {
                filter: Some(FilterMode::All),
                sort: Some(SortMode::Newest),
            }
        );
        assert_eq!(
            parsed("list"),
            ScriptCommand::List {
                filter: None,
                sort: None
            }
        );
    }

    #[test]
    fn list_accepts_a_lone_sort_token() {
        assert_eq!(
            parsed("list alphabetical"),
            ScriptCommand::List {
                filter: None,
                sort: Some(SortMode::Alphabetical),
            }
        );
        assert_eq!(
            parsed("list oldest completed"),
            ScriptCommand::List {
                filter: Some(FilterMode::Completed),
                sort: Some(SortMode::Oldest),
            }
        );
    }

    #[test]
    fn id_errors_are_reported() {
        assert_eq!(
            parse_line("toggle"),
            Err(ScriptError::MissingArgument {
                command: "toggle",
                argument: "id"
            })
        );
        assert!(matches!(
            parse_line("remove abc"),
            Err(ScriptError::InvalidId { value, .. }) if value == "abc"
        ));
        assert_eq!(parsed("rm #4"), ScriptCommand::Remove { id: TaskId(4) });
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert_eq!(
            parse_line("archive 3"),
            Err(ScriptError::UnknownCommand {
                name: "archive".into()
            })
        );
    }

    #[test]
    fn apply_runs_against_service() {
        let mut service = TaskService::new();
        let ScriptOutcome::Added(task) = parsed("add Buy milk").apply(&mut service) else {
            panic!("add should succeed");
        };
        assert_eq!(
            parsed("add buy MILK").apply(&mut service),
            ScriptOutcome::Rejected(ValidationError::DuplicateTask)
        );
        assert_eq!(
            parsed(&format!("toggle {}", task.id())).apply(&mut service),
            ScriptOutcome::Toggled {
                id: task.id(),
                completed: Some(true)
            }
        );
        let ScriptOutcome::Listed { tasks, .. } = parsed("list completed").apply(&mut service) else {
            panic!("list should produce a listing");
        };
        assert_eq!(tasks.len(), 1);
        assert_eq!(
            parsed("remove 99").apply(&mut service),
            ScriptOutcome::Removed {
                id: TaskId(99),
                found: false
            }
        );
    }

    #[test]
    fn list_without_tokens_uses_service_selection() {
        let mut service = TaskService::new();
        parsed("filter completed").apply(&mut service);
        parsed("sort alphabetical").apply(&mut service);
        let ScriptOutcome::Listed { filter, sort, .. } = parsed("list").apply(&mut service) else {
            panic!("list should produce a listing");
        };
        assert_eq!(filter, FilterMode::Completed);
        assert_eq!(sort, SortMode::Alphabetical);
    }
}
