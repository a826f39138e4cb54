use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};
use tasklist_app::TaskService;
use tasklist_core::board::{Board, Column};
use tasklist_core::calendar::{CalendarEvent, CalendarMonth, sample_events};
use tasklist_core::{TaskId, ValidationError};

use super::constants::UI_MESSAGE_TTL_SECS;
use super::task_visibility::TaskVisibility;

/// Top-level tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    /// To-do list.
    Tasks,
    /// Kanban board.
    Board,
    /// Month calendar.
    Calendar,
}

impl Tab {
    pub(super) const ALL: [Self; 3] = [Self::Tasks, Self::Board, Self::Calendar];

    pub(super) const fn title(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Board => "Board",
            Self::Calendar => "Calendar",
        }
    }

    pub(super) const fn index(self) -> usize {
        match self {
            Self::Tasks => 0,
            Self::Board => 1,
            Self::Calendar => 2,
        }
    }

    pub(super) const fn next(self) -> Self {
        match self {
            Self::Tasks => Self::Board,
            Self::Board => Self::Calendar,
            Self::Calendar => Self::Tasks,
        }
    }

    pub(super) const fn prev(self) -> Self {
        match self {
            Self::Tasks => Self::Calendar,
            Self::Board => Self::Tasks,
            Self::Calendar => Self::Board,
        }
    }
}

/// Whether keystrokes go to the new-task input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputMode {
    Normal,
    Editing,
}

/// Cursor on the kanban board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BoardCursor {
    pub(super) column: Column,
    pub(super) index: usize,
}

/// Displayed month and selected day.
#[derive(Debug, Clone)]
pub(super) struct CalendarState {
    pub(super) month: CalendarMonth,
    pub(super) selected_day: Option<u8>,
    pub(super) events: Vec<CalendarEvent>,
}

pub(super) struct Ui {
    pub(super) service: TaskService,
    pub(super) visibility: TaskVisibility,
    pub(super) tab: Tab,
    pub(super) mode: InputMode,
    /// Pending text of the new-task input line.
    pub(super) input: String,
    /// Inline validation failure for the last submit; cleared on edit.
    pub(super) input_error: Option<ValidationError>,
    pub(super) board: Board,
    pub(super) board_cursor: BoardCursor,
    pub(super) calendar: CalendarState,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
}

impl Ui {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const STATUS_HEIGHT: u16 = 3;

    pub(super) fn new(service: TaskService, board: Board, month: CalendarMonth) -> Self {
        let mut ui = Self {
            service,
            visibility: TaskVisibility::default(),
            tab: Tab::Tasks,
            mode: InputMode::Normal,
            input: String::new(),
            input_error: None,
            board,
            board_cursor: BoardCursor {
                column: Column::Todo,
                index: 0,
            },
            calendar: CalendarState {
                month,
                selected_day: None,
                events: sample_events(),
            },
            message: None,
            should_quit: false,
        };
        ui.refresh_view(None);
        ui
    }

    /// Recompute the visible task list from the store.
    pub(super) fn refresh_view(&mut self, preferred: Option<TaskId>) {
        let keep = preferred.or_else(|| self.visibility.selected_task_id());
        self.visibility.rebuild(self.service.visible(), keep);
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(f.area());

        self.draw_tabs(f, chunks[0]);
        match self.tab {
            Tab::Tasks => self.draw_tasks_tab(f, chunks[1]),
            Tab::Board => self.draw_board(f, chunks[1]),
            Tab::Calendar => self.draw_calendar(f, chunks[1]),
        }
        self.draw_status(f, chunks[2]);
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
