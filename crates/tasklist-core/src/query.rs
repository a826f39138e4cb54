//! Filter-then-sort views over a task sequence.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::task::Task;

/// Which tasks a view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

/// Order of tasks within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Case-insensitive A-Z on the task text.
    Alphabetical,
}

/// Error raised when a mode token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} mode: {token}")]
pub struct ParseModeError {
    kind: &'static str,
    token: String,
}

impl ParseModeError {
    /// The rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_ascii_lowercase()
}

impl FilterMode {
    /// Every mode in selector order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Token used in configuration files and scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Human label shown in selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Parse a token, falling back to [`FilterMode::All`] for anything unknown.
    #[must_use]
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    /// The next mode in selector order, wrapping around.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Whether `task` belongs in a view with this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl SortMode {
    /// Every mode in selector order.
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Alphabetical];

    /// Token used in configuration files and scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Human label shown in selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Alphabetical => "A-Z",
        }
    }

    /// Parse a token, falling back to [`SortMode::Newest`] for anything unknown.
    #[must_use]
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    /// The next mode in selector order, wrapping around.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Alphabetical,
            Self::Alphabetical => Self::Newest,
        }
    }
}

impl FromStr for FilterMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseModeError {
                kind: "filter",
                token: s.to_owned(),
            }),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "alphabetical" => Ok(Self::Alphabetical),
            _ => Err(ParseModeError {
                kind: "sort",
                token: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive a filtered and sorted view of `tasks`.
///
/// The input is never mutated; a fresh vector is returned on each call.
/// All orderings are total:
/// - `Newest` sorts by creation time descending, equal timestamps in reverse
///   insertion order.
/// - `Oldest` sorts by creation time ascending, equal timestamps in insertion
///   order.
/// - `Alphabetical` compares lowercased text with accents folded to their base
///   letter, so `Äpfel` sorts beside `apfel`. Accented forms follow the plain
///   ones; remaining ties keep insertion order.
#[must_use]
pub fn query(tasks: &[Task], filter: FilterMode, sort: SortMode) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();

    match sort {
        SortMode::Newest => {
            view.reverse();
            view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortMode::Oldest => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Alphabetical => view.sort_by_cached_key(|task| collation_key(&task.text)),
    }

    view
}

/// Primary key: lowercase with combining marks stripped. Secondary: plain lowercase.
fn collation_key(text: &str) -> (String, String) {
    let lowered = text.to_lowercase();
    let folded = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (folded, lowered)
}
