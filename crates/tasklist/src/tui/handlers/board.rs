use crossterm::event::{KeyCode, KeyEvent};
use tasklist_core::board::Column;

use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn handle_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                if let Some(column) = self.board_cursor.column.prev() {
                    self.focus_column(column);
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(column) = self.board_cursor.column.next() {
                    self.focus_column(column);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.board.count(self.board_cursor.column);
                if self.board_cursor.index + 1 < count {
                    self.board_cursor.index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.board_cursor.index = self.board_cursor.index.saturating_sub(1);
            }
            KeyCode::Char('>') => {
                if let Some(to) = self.board_cursor.column.next() {
                    self.move_focused_card(to);
                }
            }
            KeyCode::Char('<') => {
                if let Some(to) = self.board_cursor.column.prev() {
                    self.move_focused_card(to);
                }
            }
            _ => {}
        }
    }

    fn focus_column(&mut self, column: Column) {
        let count = self.board.count(column);
        self.board_cursor.column = column;
        self.board_cursor.index = self.board_cursor.index.min(count.saturating_sub(1));
    }

    fn move_focused_card(&mut self, to: Column) {
        let from = self.board_cursor.column;
        let Some(card) = self.board.cards(from).get(self.board_cursor.index) else {
            self.error("No card selected");
            return;
        };
        let (id, title) = (card.id, card.title.clone());
        if self.board.move_card(id, from, to) {
            self.board_cursor.column = to;
            self.board_cursor.index = self.board.count(to).saturating_sub(1);
            self.info(format!("Moved \"{title}\" to {}", to.title()));
        }
    }
}
