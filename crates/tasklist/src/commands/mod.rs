use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tasklist_app::{ScriptOutcome, TaskService, parse_line};
use tasklist_core::board::{Board, Column, ParseColumnError};
use tasklist_core::calendar::{CalendarMonth, events_on, month_grid, sample_events};
use tasklist_core::{CardId, Task, TaskStats};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;

use crate::OutputFormat;
use crate::tui::constants::{CALENDAR_CELL_WIDTH, COMPLETED_MARKER, PENDING_MARKER, WEEKDAY_HEADINGS};

/// Counts reported once a script has been fully processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines that parsed into a command and were applied.
    pub commands: usize,
    /// Rejected adds plus lines that could not be decoded or parsed.
    pub failures: usize,
}

#[derive(Serialize)]
struct TaskRow {
    id: u64,
    text: String,
    completed: bool,
    created_at: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Result<Self> {
        Ok(Self {
            id: task.id().get(),
            text: task.text().to_owned(),
            completed: task.completed(),
            created_at: task
                .created_at()
                .format(&Rfc3339)
                .context("failed to format creation time")?,
        })
    }
}

/// One JSON line per processed script line.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record {
    Added { line: usize, task: TaskRow },
    Rejected { line: usize, error: String },
    Removed { line: usize, id: u64, found: bool },
    Toggled { line: usize, id: u64, completed: Option<bool> },
    Listed {
        line: usize,
        filter: &'static str,
        sort: &'static str,
        tasks: Vec<TaskRow>,
    },
    FilterSet { line: usize, filter: &'static str },
    SortSet { line: usize, sort: &'static str },
    Stats { line: usize, stats: TaskStats },
    Error { line: usize, message: String },
}

impl Record {
    fn from_outcome(line: usize, outcome: &ScriptOutcome) -> Result<Self> {
        Ok(match outcome {
            ScriptOutcome::Added(task) => Self::Added {
                line,
                task: TaskRow::from_task(task)?,
            },
            ScriptOutcome::Rejected(err) => Self::Rejected {
                line,
                error: err.to_string(),
            },
            ScriptOutcome::Removed { id, found } => Self::Removed {
                line,
                id: id.get(),
                found: *found,
            },
            ScriptOutcome::Toggled { id, completed } => Self::Toggled {
                line,
                id: id.get(),
                completed: *completed,
            },
            ScriptOutcome::Listed {
                filter,
                sort,
                tasks,
            } => Self::Listed {
                line,
                filter: filter.as_str(),
                sort: sort.as_str(),
                tasks: tasks.iter().map(TaskRow::from_task).collect::<Result<_>>()?,
            },
            ScriptOutcome::FilterSet(filter) => Self::FilterSet {
                line,
                filter: filter.as_str(),
            },
            ScriptOutcome::SortSet(sort) => Self::SortSet {
                line,
                sort: sort.as_str(),
            },
            ScriptOutcome::Stats(stats) => Self::Stats {
                line,
                stats: *stats,
            },
        })
    }
}

/// Execute every line of `input` against `service`, writing one result per command.
///
/// Rejected tasks and malformed lines are reported and processing continues.
pub fn run_script<R: BufRead, W: Write>(
    service: &mut TaskService,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    for (index, raw) in input.split(b'\n').enumerate() {
        let number = index + 1;
        let mut raw = raw.with_context(|| format!("failed to read script line {number}"))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                summary.failures += 1;
                report_line_error(out, format, number, &err.utf8_error())?;
                continue;
            }
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                summary.failures += 1;
                report_line_error(out, format, number, &err)?;
                continue;
            }
        };

        summary.commands += 1;
        let outcome = command.apply(service);
        if matches!(outcome, ScriptOutcome::Rejected(_)) {
            summary.failures += 1;
        }
        match format {
            OutputFormat::Text => write_outcome_text(out, &outcome)?,
            OutputFormat::Json => write_json(out, &Record::from_outcome(number, &outcome)?)?,
        }
    }
    Ok(summary)
}

fn report_line_error<W: Write>(
    out: &mut W,
    format: OutputFormat,
    line: usize,
    err: &dyn std::error::Error,
) -> Result<()> {
    tracing::warn!(line, %err, "skipping script line");
    match format {
        OutputFormat::Text => writeln!(out, "line {line}: {err}")?,
        OutputFormat::Json => write_json(
            out,
            &Record::Error {
                line,
                message: err.to_string(),
            },
        )?,
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *out, record).context("failed to encode record")?;
    writeln!(out)?;
    Ok(())
}

fn write_outcome_text<W: Write>(out: &mut W, outcome: &ScriptOutcome) -> Result<()> {
    match outcome {
        ScriptOutcome::Added(task) => writeln!(out, "added #{} {}", task.id(), task.text())?,
        ScriptOutcome::Rejected(err) => writeln!(out, "rejected: {err}")?,
        ScriptOutcome::Removed { id, found: true } => writeln!(out, "removed #{id}")?,
        ScriptOutcome::Toggled {
            id,
            completed: Some(completed),
        } => {
            let state = if *completed { "completed" } else { "pending" };
            writeln!(out, "#{id} {state}")?;
        }
        ScriptOutcome::Removed { id, found: false } | ScriptOutcome::Toggled { id, completed: None } => {
            writeln!(out, "no task #{id}")?;
        }
        ScriptOutcome::Listed {
            filter,
            sort,
            tasks,
        } => {
            writeln!(out, "{} / {} ({})", filter.label(), sort.label(), tasks.len())?;
            if tasks.is_empty() {
                writeln!(out, "  no tasks")?;
            }
            for task in tasks {
                let marker = if task.completed() {
                    COMPLETED_MARKER
                } else {
                    PENDING_MARKER
                };
                let created = task
                    .created_at()
                    .format(&Rfc3339)
                    .context("failed to format creation time")?;
                writeln!(out, "  {marker} #{} {} ({created})", task.id(), task.text())?;
            }
        }
        ScriptOutcome::FilterSet(filter) => writeln!(out, "filter: {filter}")?,
        ScriptOutcome::SortSet(sort) => writeln!(out, "sort: {sort}")?,
        ScriptOutcome::Stats(stats) => writeln!(
            out,
            "{} total, {} completed, {} pending ({}%)",
            stats.total, stats.completed, stats.pending, stats.percent_complete
        )?,
    }
    Ok(())
}

/// Error raised for a malformed `--move` argument.
#[derive(Debug, Error)]
pub enum CardMoveError {
    /// Not exactly three `:`-separated parts.
    #[error("expected <id>:<from>:<to>, got '{0}'")]
    Shape(String),
    /// The id part is not a number.
    #[error("invalid card id: {0}")]
    Id(#[from] ParseIntError),
    /// A column part is not a known column.
    #[error(transparent)]
    Column(#[from] ParseColumnError),
}

/// A requested card move, parsed from `<id>:<from>:<to>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMove {
    /// Card to move.
    pub id: CardId,
    /// Column the card is expected in.
    pub from: Column,
    /// Destination column.
    pub to: Column,
}

impl FromStr for CardMove {
    type Err = CardMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(id), Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CardMoveError::Shape(s.to_owned()));
        };
        Ok(Self {
            id: id.parse()?,
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

/// Print the demo board after applying `moves` in order.
pub fn print_board<W: Write>(moves: &[CardMove], out: &mut W) -> Result<()> {
    let mut board = Board::sample();
    for CardMove { id, from, to } in moves.iter().copied() {
        if board.move_card(id, from, to) {
            tracing::info!(%id, %from, %to, "card moved");
        } else {
            tracing::warn!(%id, %from, %to, "card move skipped");
            writeln!(out, "skipped: card #{id} is not movable from {from} to {to}")?;
        }
    }
    write_board(&board, out)
}

fn write_board<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    for column in Column::ALL {
        writeln!(out, "{} ({})", column.title(), board.count(column))?;
        for card in board.cards(column) {
            writeln!(
                out,
                "  #{} {} [{}] {}",
                card.id,
                card.title,
                card.priority.as_str(),
                card.assignee
            )?;
        }
    }
    Ok(())
}

/// Print the month grid for `month`, marking days that carry demo events.
pub fn print_calendar<W: Write>(month: CalendarMonth, out: &mut W) -> Result<()> {
    let cells = month_grid(month)?;
    let events = sample_events();

    writeln!(out, "{} {}", month.month, month.year)?;
    let heading: String = WEEKDAY_HEADINGS
        .iter()
        .map(|day| format!("{day:>width$}", width = CALENDAR_CELL_WIDTH))
        .collect();
    writeln!(out, "{}", heading.trim_end())?;

    for week in cells.chunks(WEEKDAY_HEADINGS.len()) {
        let row: String = week
            .iter()
            .map(|cell| match cell.day() {
                Some(day) => {
                    let marker = if events_on(&events, day).next().is_some() { '*' } else { ' ' };
                    format!("{day:>width$}{marker}", width = CALENDAR_CELL_WIDTH - 1)
                }
                None => " ".repeat(CALENDAR_CELL_WIDTH),
            })
            .collect();
        writeln!(out, "{}", row.trim_end())?;
    }

    writeln!(out)?;
    for event in &events {
        writeln!(out, "{:>2} {} {}", event.day, event.time, event.title)?;
    }
    Ok(())
}
