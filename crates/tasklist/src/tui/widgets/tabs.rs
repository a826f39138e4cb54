use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

use super::super::view::{Tab, Ui};

impl Ui {
    pub(in crate::tui) fn draw_tabs(&self, f: &mut Frame<'_>, area: Rect) {
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(index, tab)| format!("{} {}", index + 1, tab.title()));
        let tabs = Tabs::new(titles)
            .block(Block::default().title("tasklist").borders(Borders::ALL))
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }
}
