use time::OffsetDateTime;

use crate::id::TaskId;

/// A single to-do item owned by a [`TaskStore`](crate::TaskStore).
///
/// Fields are read-only outside this crate; the store is the only place
/// that constructs or mutates tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) text: String,
    pub(crate) completed: bool,
    pub(crate) created_at: OffsetDateTime,
}

impl Task {
    /// Identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Trimmed task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been marked as done.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
