use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::super::view::{InputMode, Message, Tab, Ui};

impl Ui {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let status = Paragraph::new(self.status_text())
            .block(
                Block::default()
                    .title(self.instructions())
                    .borders(Borders::ALL),
            )
            .style(self.status_style());
        f.render_widget(status, area);
    }

    pub(in crate::tui) const fn instructions(&self) -> &'static str {
        match (self.mode, self.tab) {
            (InputMode::Editing, _) => "Enter: add | Esc: cancel",
            (InputMode::Normal, Tab::Tasks) => {
                "i: new | j/k: move | space: toggle | d: delete | f: filter | s: sort | Tab: switch | q: quit"
            }
            (InputMode::Normal, Tab::Board) => "h/l: column | j/k: card | </>: move card | Tab: switch | q: quit",
            (InputMode::Normal, Tab::Calendar) => "n/p: month | arrows: day | Esc: clear | Tab: switch | q: quit",
        }
    }

    fn status_text(&self) -> Cow<'_, str> {
        self.message
            .as_ref()
            .map_or(Cow::Borrowed(""), |msg| Cow::Borrowed(msg.text.as_str()))
    }

    fn status_style(&self) -> Style {
        self.message.as_ref().map_or_else(Style::default, Message::style)
    }
}
