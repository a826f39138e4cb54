use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist_core::calendar::{DayCell, events_on, month_grid};

use super::super::constants::{CALENDAR_CELL_WIDTH, WEEKDAY_HEADINGS};
use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_calendar(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.draw_month_grid(f, columns[0]);
        self.draw_events(f, columns[1]);
    }

    fn draw_month_grid(&self, f: &mut Frame<'_>, area: Rect) {
        let month = self.calendar.month;
        let title = format!("{} {}", month.month, month.year);
        let cells = match month_grid(month) {
            Ok(cells) => cells,
            Err(err) => {
                let paragraph = Paragraph::new(err.to_string())
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().title(title).borders(Borders::ALL));
                f.render_widget(paragraph, area);
                return;
            }
        };

        let heading = WEEKDAY_HEADINGS
            .iter()
            .map(|day| {
                Span::styled(
                    format!("{day:>width$}", width = CALENDAR_CELL_WIDTH),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>();
        let mut lines = vec![Line::from(heading)];
        for week in cells.chunks(WEEKDAY_HEADINGS.len()) {
            lines.push(Line::from(
                week.iter().map(|cell| self.day_span(*cell)).collect::<Vec<_>>(),
            ));
        }

        let grid = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(grid, area);
    }

    fn day_span(&self, cell: DayCell) -> Span<'static> {
        let Some(day) = cell.day() else {
            return Span::raw(" ".repeat(CALENDAR_CELL_WIDTH));
        };
        let has_event = events_on(&self.calendar.events, day).next().is_some();
        let marker = if has_event { "*" } else { " " };
        let mut style = Style::default();
        if has_event {
            style = style.fg(Color::Cyan);
        }
        if self.calendar.selected_day == Some(day) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let width = CALENDAR_CELL_WIDTH - 1;
        Span::styled(format!("{day:>width$}{marker}"), style)
    }

    fn draw_events(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line<'_>> = match self.calendar.selected_day {
            Some(day) => {
                let mut lines: Vec<Line<'_>> = events_on(&self.calendar.events, day)
                    .map(|event| Line::from(format!("{} {}", event.time, event.title)))
                    .collect();
                if lines.is_empty() {
                    lines.push(Line::from(format!("Nothing scheduled on day {day}")));
                }
                lines
            }
            None => self
                .calendar
                .events
                .iter()
                .map(|event| Line::from(format!("{:>2}  {} {}", event.day, event.time, event.title)))
                .collect(),
        };
        let events = Paragraph::new(lines).block(Block::default().title("Events").borders(Borders::ALL));
        f.render_widget(events, area);
    }
}
