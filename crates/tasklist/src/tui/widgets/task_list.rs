use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use tasklist_core::FilterMode;
use time::macros::format_description;

use super::super::constants::{
    COMPLETED_MARKER, PENDING_MARKER, TASK_LIST_HIGHLIGHT_SYMBOL, TASK_TEXT_MAX_GRAPHEMES,
};
use super::super::view::{InputMode, Ui};
use super::util::truncate_with_ellipsis;

impl Ui {
    pub(in crate::tui) const INPUT_HEIGHT: u16 = 4;
    pub(in crate::tui) const SELECTOR_HEIGHT: u16 = 3;
    pub(in crate::tui) const GAUGE_HEIGHT: u16 = 3;

    pub(in crate::tui) fn draw_tasks_tab(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Length(Self::SELECTOR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(Self::GAUGE_HEIGHT),
            ])
            .split(area);

        self.draw_input(f, rows[0]);
        self.draw_selectors(f, rows[1]);
        self.draw_task_list(f, rows[2]);
        self.draw_progress(f, rows[3]);
    }

    fn draw_input(&self, f: &mut Frame<'_>, area: Rect) {
        let editing = self.mode == InputMode::Editing;
        let border_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let prompt = if self.input.is_empty() && !editing {
            Line::from(Span::styled(
                "Press i to add a task",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input.as_str())
        };
        let feedback = self.input_error.as_ref().map_or_else(Line::default, |err| {
            Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red)))
        });

        let input = Paragraph::new(vec![prompt, feedback]).block(
            Block::default()
                .title("New task")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, area);
    }

    fn draw_selectors(&self, f: &mut Frame<'_>, area: Rect) {
        let text = format!(
            "Filter: {}  |  Sort: {}",
            self.service.filter().label(),
            self.service.sort().label()
        );
        let selectors =
            Paragraph::new(text).block(Block::default().title("View").borders(Borders::ALL));
        f.render_widget(selectors, area);
    }

    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        let date_format = format_description!("[year]-[month]-[day]");
        let visibility = &self.visibility;
        let items = if visibility.has_visible_tasks() {
            visibility
                .visible_tasks()
                .iter()
                .map(|task| {
                    let (marker, text_style) = if task.completed() {
                        (
                            COMPLETED_MARKER,
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        (PENDING_MARKER, Style::default().add_modifier(Modifier::BOLD))
                    };
                    let created = task.created_at().format(date_format).unwrap_or_default();
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{marker} ")),
                        Span::styled(
                            truncate_with_ellipsis(task.text(), TASK_TEXT_MAX_GRAPHEMES),
                            text_style,
                        ),
                        Span::styled(
                            format!("  #{} {created}", task.id()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect()
        } else {
            let message = if self.service.store().is_empty() {
                "No tasks yet"
            } else if self.service.filter() == FilterMode::Completed {
                "No completed tasks"
            } else {
                "No tasks match the current filter"
            };
            vec![ListItem::new(Line::from(message))]
        };

        let list = List::new(items)
            .block(Block::default().title("Tasks").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if visibility.has_visible_tasks() {
            state.select(Some(visibility.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_progress(&self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.service.stats();
        let gauge = Gauge::default()
            .block(Block::default().title("Progress").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(stats.ratio())
            .label(format!(
                "{}/{} done ({}%), {} pending",
                stats.completed, stats.total, stats.percent_complete, stats.pending
            ));
        f.render_widget(gauge, area);
    }
}
