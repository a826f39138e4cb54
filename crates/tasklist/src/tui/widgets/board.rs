use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tasklist_core::board::{Column, Priority};

use super::super::constants::TASK_LIST_HIGHLIGHT_SYMBOL;
use super::super::view::Ui;
use super::util::priority_marker;

const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

impl Ui {
    pub(in crate::tui) fn draw_board(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (column, rect) in Column::ALL.into_iter().zip(columns.iter()) {
            self.draw_board_column(f, *rect, column);
        }
    }

    fn draw_board_column(&self, f: &mut Frame<'_>, area: Rect, column: Column) {
        let cards = self.board.cards(column);
        let items: Vec<ListItem<'_>> = cards
            .iter()
            .map(|card| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        card.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::styled(
                            priority_marker(card.priority),
                            Style::default().fg(priority_color(card.priority)),
                        ),
                        Span::styled(
                            format!(" {} {}", card.priority.as_str(), card.assignee),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ])
            })
            .collect();

        let focused = self.board_cursor.column == column;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{} ({})", column.title(), cards.len()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if focused && !cards.is_empty() {
            state.select(Some(self.board_cursor.index));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
