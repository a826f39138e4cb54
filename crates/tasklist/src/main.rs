//! CLI entry point for tasklist.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tasklist_app::{ProjectConfig, TaskService};
use tasklist_core::calendar::CalendarMonth;
use time::{Month, OffsetDateTime};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use commands::CardMove;

mod commands;
mod tui;

/// Validated to-do list with kanban and calendar views.
#[derive(Parser, Debug)]
#[command(
    name = "tasklist",
    version,
    about = "tasklist: a validated to-do list with filter, sort, board and calendar views"
)]
struct Cli {
    /// Directory holding `.tasklist/config.toml` (defaults to current).
    #[arg(long)]
    workdir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch interactive terminal UI.
    Tui,

    /// Run a command script against a fresh task list.
    Run {
        /// Script file; reads stdin when omitted.
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Preload the demo tasks before running the script.
        #[arg(long)]
        seed: bool,
    },

    /// Print the demo kanban board.
    Board {
        /// Move a card first, as `<id>:<from>:<to>`. Repeatable.
        #[arg(long = "move", value_name = "ID:FROM:TO")]
        moves: Vec<CardMove>,
    },

    /// Print a month grid with the demo events marked.
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

fn main() -> Result<()> {
    let Cli { workdir, cmd } = Cli::parse();
    install_tracing();

    let workdir = workdir.unwrap_or_else(|| PathBuf::from("."));
    execute_command(ProjectConfig::from_workdir(&workdir)?, cmd)
}

fn execute_command(config: ProjectConfig, command: Command) -> Result<()> {
    match command {
        Command::Tui => tui::run(TaskService::from_config(&config)),

        Command::Run {
            script,
            format,
            seed,
        } => {
            let mut config = config;
            config.seed.sample_tasks = seed;
            let mut service = TaskService::from_config(&config);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open script {}", path.display()))?;
                    commands::run_script(&mut service, BufReader::new(file), &mut out, format)?
                }
                None => commands::run_script(&mut service, io::stdin().lock(), &mut out, format)?,
            };
            tracing::info!(
                commands = summary.commands,
                failures = summary.failures,
                "script finished"
            );
            Ok(())
        }

        Command::Board { moves } => commands::print_board(&moves, &mut io::stdout().lock()),

        Command::Calendar { year, month } => {
            let month = resolve_month(year, month)?;
            commands::print_calendar(month, &mut io::stdout().lock())
        }
    }
}

/// Month to display; missing parts come from today's UTC date.
fn resolve_month(year: Option<i32>, month: Option<u8>) -> Result<CalendarMonth> {
    let today = CalendarMonth::of(OffsetDateTime::now_utc().date());
    let month = match month {
        Some(number) => Month::try_from(number).with_context(|| format!("invalid month {number}"))?,
        None => today.month,
    };
    Ok(CalendarMonth::new(year.unwrap_or(today.year), month))
}

fn install_tracing() {
    // RUST_LOG is honoured; INFO by default. Stdout stays reserved for command output.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::board::Column;
    use tasklist_core::CardId;

    #[test]
    fn parse_run_command() {
        let cli = Cli::parse_from([
            "tasklist",
            "--workdir",
            "/tmp/project",
            "run",
            "--script",
            "session.txt",
            "--format",
            "json",
        ]);

        assert_eq!(cli.workdir, Some(PathBuf::from("/tmp/project")));
        match cli.cmd {
            Command::Run {
                script,
                format,
                seed,
            } => {
                assert_eq!(script, Some(PathBuf::from("session.txt")));
                assert_eq!(format, OutputFormat::Json);
                assert!(!seed);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn parse_run_defaults_to_text_on_stdin() {
        let cli = Cli::parse_from(["tasklist", "run"]);
        match cli.cmd {
            Command::Run { script, format, .. } => {
                assert_eq!(script, None);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn parse_board_moves() {
        let cli = Cli::parse_from([
            "tasklist",
            "board",
            "--move",
            "1:todo:in-progress",
            "--move",
            "3:doing:done",
        ]);
        match cli.cmd {
            Command::Board { moves } => {
                assert_eq!(
                    moves,
                    vec![
                        CardMove {
                            id: CardId(1),
                            from: Column::Todo,
                            to: Column::InProgress,
                        },
                        CardMove {
                            id: CardId(3),
                            from: Column::InProgress,
                            to: Column::Done,
                        },
                    ]
                );
            }
            _ => panic!("expected board command"),
        }
    }

    #[test]
    fn rejects_malformed_board_move() {
        assert!(Cli::try_parse_from(["tasklist", "board", "--move", "1:todo"]).is_err());
        assert!(Cli::try_parse_from(["tasklist", "board", "--move", "x:todo:done"]).is_err());
        assert!(Cli::try_parse_from(["tasklist", "board", "--move", "1:todo:later"]).is_err());
    }

    #[test]
    fn parse_calendar_command_checks_month_range() {
        let cli = Cli::parse_from(["tasklist", "calendar", "--year", "2024", "--month", "2"]);
        match cli.cmd {
            Command::Calendar { year, month } => {
                assert_eq!(year, Some(2024));
                assert_eq!(month, Some(2));
            }
            _ => panic!("expected calendar command"),
        }
        assert!(Cli::try_parse_from(["tasklist", "calendar", "--month", "13"]).is_err());
    }

    #[test]
    fn resolve_month_uses_given_parts() {
        let month = resolve_month(Some(2023), Some(12)).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(month, CalendarMonth::new(2023, Month::December));
    }

    #[test]
    fn parse_tui_command() {
        let cli = Cli::parse_from(["tasklist", "tui"]);
        assert!(matches!(cli.cmd, Command::Tui));
    }
}
