use tasklist_core::{Task, TaskId};

/// Tracks the rendered task view and the selection within it.
#[derive(Debug, Default)]
pub(super) struct TaskVisibility {
    visible: Vec<Task>,
    selected: usize,
}

#[allow(clippy::missing_const_for_fn)]
impl TaskVisibility {
    /// Replace the rendered view, keeping `preferred` selected when it is still visible.
    pub(super) fn rebuild(&mut self, view: Vec<Task>, preferred: Option<TaskId>) {
        self.visible = view;
        self.selected = self.resolve_selection(preferred);
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.visible.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(index) = self.visible.iter().position(|task| task.id() == id)
        {
            return index;
        }
        self.selected.min(self.visible.len() - 1)
    }

    pub(super) fn has_visible_tasks(&self) -> bool {
        !self.visible.is_empty()
    }

    pub(super) fn visible_tasks(&self) -> &[Task] {
        &self.visible
    }

    pub(super) fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.visible.get(self.selected)
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(Task::id)
    }

    pub(super) fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
