use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::view::{InputMode, Tab, Ui};

pub(super) mod board;
pub(super) mod calendar;
pub(super) mod input;
pub(super) mod navigation;

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.mode == InputMode::Editing {
            self.handle_input_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        match self.tab {
            Tab::Tasks => self.handle_task_list_key(key),
            Tab::Board => self.handle_board_key(key),
            Tab::Calendar => self.handle_calendar_key(key),
        }
    }

    /// Keys shared by every tab outside of text entry.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char('1') => self.tab = Tab::Tasks,
            KeyCode::Char('2') => self.tab = Tab::Board,
            KeyCode::Char('3') => self.tab = Tab::Calendar,
            _ => return false,
        }
        true
    }
}
