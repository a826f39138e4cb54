use time::OffsetDateTime;

use crate::id::{IdAllocator, TaskId};
use crate::task::Task;
use crate::validation::{ValidationError, trim_text, validate};

/// Ordered, in-memory collection of tasks.
///
/// Insertion order is preserved independently of any display ordering;
/// [`query`](crate::query::query) derives sorted views on demand.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Check a candidate against the current tasks without mutating.
    ///
    /// # Errors
    /// See [`validate`].
    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        validate(text, &self.tasks)
    }

    /// Validate and append a new task created now.
    ///
    /// # Errors
    /// Returns the first rule the text violates; the store is left unchanged.
    pub fn add(&mut self, text: &str) -> Result<Task, ValidationError> {
        self.add_at(text, OffsetDateTime::now_utc())
    }

    /// Validate and append a new task with an explicit creation time.
    ///
    /// Used for seeding fixed sample data.
    ///
    /// # Errors
    /// Returns the first rule the text violates; the store is left unchanged.
    pub fn add_at(&mut self, text: &str, created_at: OffsetDateTime) -> Result<Task, ValidationError> {
        self.validate(text)?;
        let task = Task {
            id: TaskId(self.ids.allocate()),
            text: trim_text(text).to_owned(),
            completed: false,
            created_at,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Delete the task with `id`. Returns the removed task, if any.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip the completion flag of `id`. Returns the new flag, if the task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn ok<T>(result: Result<T, ValidationError>) -> T {
        result.unwrap_or_else(|err| panic!("add must succeed: {err}"))
    }

    #[test]
    fn add_trims_and_defaults_to_pending() {
        let mut store = TaskStore::new();
        let task = ok(store.add("  Write report  "));
        assert_eq!(task.text(), "Write report");
        assert!(!task.completed());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(task.id()), Some(&task));
    }

    #[test]
    fn add_strips_byte_order_mark() {
        let mut store = TaskStore::new();
        let task = ok(store.add("\u{FEFF}Write report\u{FEFF}"));
        assert_eq!(task.text(), "Write report");
    }

    #[test]
    fn rejected_add_leaves_store_untouched() {
        let mut store = TaskStore::new();
        ok(store.add("Buy milk"));
        assert_eq!(store.add("buy MILK"), Err(ValidationError::DuplicateTask));
        assert_eq!(store.add(" "), Err(ValidationError::EmptyInput));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut store = TaskStore::new();
        let first = ok(store.add("first task"));
        let second = ok(store.add("second task"));
        store.remove(second.id());
        let third = ok(store.add("third task"));
        assert_ne!(third.id(), second.id());
        assert_ne!(third.id(), first.id());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = TaskStore::new();
        ok(store.add_at("late", datetime!(2024-03-01 0:00 UTC)));
        ok(store.add_at("early", datetime!(2024-01-01 0:00 UTC)));
        let texts: Vec<&str> = store.tasks().iter().map(Task::text).collect();
        assert_eq!(texts, vec!["late", "early"]);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = TaskStore::new();
        let task = ok(store.add("Walk dog"));
        assert_eq!(store.toggle(task.id()), Some(true));
        assert_eq!(store.toggle(task.id()), Some(false));
        assert_eq!(store.get(task.id()).map(Task::completed), Some(false));
    }

    #[test]
    fn remove_and_toggle_ignore_unknown_ids() {
        let mut store = TaskStore::new();
        let task = ok(store.add("Walk dog"));
        assert!(store.remove(task.id()).is_some());
        assert!(store.remove(task.id()).is_none());
        assert_eq!(store.toggle(task.id()), None);
        assert!(store.is_empty());
    }

    #[test]
    fn removed_text_can_be_added_again() {
        let mut store = TaskStore::new();
        let task = ok(store.add("Walk dog"));
        store.remove(task.id());
        assert!(store.add("walk dog").is_ok());
    }
}
