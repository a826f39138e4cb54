use crossterm::event::{KeyCode, KeyEvent};

use super::super::view::{InputMode, Ui};

impl Ui {
    pub(in crate::tui) fn handle_task_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i' | 'a') => {
                self.mode = InputMode::Editing;
                self.input_error = None;
            }
            KeyCode::Char('j') | KeyCode::Down => self.visibility.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.visibility.select_prev(),
            KeyCode::Char(' ' | 'x') => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('f') => {
                let filter = self.service.filter().cycle();
                self.service.set_filter(filter);
                self.refresh_view(None);
                self.info(format!("Filter: {}", filter.label()));
            }
            KeyCode::Char('s') => {
                let sort = self.service.sort().cycle();
                self.service.set_sort(sort);
                self.refresh_view(None);
                self.info(format!("Sort: {}", sort.label()));
            }
            _ => {}
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.visibility.selected_task_id() else {
            self.error("No task selected");
            return;
        };
        match self.service.toggle(id) {
            Some(true) => self.info(format!("Completed task {id}")),
            Some(false) => self.info(format!("Reopened task {id}")),
            None => self.error(format!("Task {id} no longer exists")),
        }
        self.refresh_view(Some(id));
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.visibility.selected_task_id() else {
            self.error("No task selected");
            return;
        };
        if let Some(task) = self.service.remove(id) {
            self.info(format!("Removed \"{}\"", task.text()));
        }
        // The removed id is gone, so the selection clamps to the same row.
        self.refresh_view(None);
    }
}
