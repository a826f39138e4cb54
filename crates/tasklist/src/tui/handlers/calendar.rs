use crossterm::event::{KeyCode, KeyEvent};

use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.shift_month(1),
            KeyCode::Char('p') => self.shift_month(-1),
            KeyCode::Left => self.shift_day(-1),
            KeyCode::Right => self.shift_day(1),
            KeyCode::Up => self.shift_day(-7),
            KeyCode::Down => self.shift_day(7),
            KeyCode::Esc => self.calendar.selected_day = None,
            _ => {}
        }
    }

    fn shift_month(&mut self, delta: i32) {
        self.calendar.month = self.calendar.month.shift(delta);
        let days = self.calendar.month.days();
        if let Some(day) = self.calendar.selected_day.as_mut() {
            *day = (*day).min(days);
        }
    }

    /// Move the day selection, staying within the displayed month.
    fn shift_day(&mut self, delta: i16) {
        let days = i16::from(self.calendar.month.days());
        let current = self.calendar.selected_day.map_or(0, i16::from);
        let target = if current == 0 { 1 } else { (current + delta).clamp(1, days) };
        self.calendar.selected_day = u8::try_from(target).ok();
    }
}
