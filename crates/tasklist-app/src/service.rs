//! Shared task service used by the CLI script runner and the TUI.

use tasklist_core::{FilterMode, SortMode, Task, TaskId, TaskStats, TaskStore, ValidationError, query};

use crate::config::ProjectConfig;
use crate::seed::seed_sample_tasks;

/// Service façade owning the task store and the current view selection.
#[derive(Debug, Default)]
pub struct TaskService {
    store: TaskStore,
    filter: FilterMode,
    sort: SortMode,
}

impl TaskService {
    /// Empty service with default view settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service from configuration, seeding demo tasks when enabled.
    #[must_use]
    pub fn from_config(config: &ProjectConfig) -> Self {
        let mut service = Self {
            store: TaskStore::new(),
            filter: config.view.filter(),
            sort: config.view.sort(),
        };
        if config.seed.sample_tasks {
            if let Err(err) = seed_sample_tasks(&mut service.store) {
                tracing::warn!(%err, "failed to seed sample tasks");
            } else {
                tracing::debug!(count = service.store.len(), "seeded sample tasks");
            }
        }
        service
    }

    /// Underlying store, read-only.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current filter selection.
    #[must_use]
    pub const fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Current sort selection.
    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Change the filter selection.
    pub fn set_filter(&mut self, filter: FilterMode) {
        tracing::debug!(%filter, "filter changed");
        self.filter = filter;
    }

    /// Change the sort selection.
    pub fn set_sort(&mut self, sort: SortMode) {
        tracing::debug!(%sort, "sort changed");
        self.sort = sort;
    }

    /// Validate and add a task.
    ///
    /// # Errors
    /// Returns the validation failure; nothing is stored in that case.
    pub fn add(&mut self, text: &str) -> Result<Task, ValidationError> {
        match self.store.add(text) {
            Ok(task) => {
                tracing::info!(id = %task.id(), text = task.text(), "task added");
                Ok(task)
            }
            Err(err) => {
                tracing::info!(%err, "task rejected");
                Err(err)
            }
        }
    }

    /// Remove a task; unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.store.remove(id);
        if removed.is_some() {
            tracing::info!(%id, "task removed");
        } else {
            tracing::debug!(%id, "remove ignored, no such task");
        }
        removed
    }

    /// Toggle completion; unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let flag = self.store.toggle(id);
        match flag {
            Some(completed) => tracing::info!(%id, completed, "task toggled"),
            None => tracing::debug!(%id, "toggle ignored, no such task"),
        }
        flag
    }

    /// Tasks visible under the current filter and sort.
    #[must_use]
    pub fn visible(&self) -> Vec<Task> {
        query(self.store.tasks(), self.filter, self.sort)
    }

    /// Tasks visible under an explicit filter and sort.
    #[must_use]
    pub fn view(&self, filter: FilterMode, sort: SortMode) -> Vec<Task> {
        query(self.store.tasks(), filter, sort)
    }

    /// Aggregate counts over every task.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.store.tasks())
    }
}
