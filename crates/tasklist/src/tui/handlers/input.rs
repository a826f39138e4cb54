use crossterm::event::{KeyCode, KeyEvent};

use super::super::view::{InputMode, Ui};

impl Ui {
    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
                self.input_error = None;
            }
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.input_error = None;
            }
            _ => {}
        }
    }

    /// Add the pending input as a task. On rejection the text is kept for correction.
    fn submit_input(&mut self) {
        match self.service.add(&self.input) {
            Ok(task) => {
                self.input.clear();
                self.input_error = None;
                self.refresh_view(Some(task.id()));
                self.info(format!("Added \"{}\"", task.text()));
            }
            Err(err) => self.input_error = Some(err),
        }
    }
}
