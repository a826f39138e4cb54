//! Application layer logic for tasklist.
//!
//! This crate provides the task service, configuration, demo seeding and the
//! command script runner shared by the CLI and TUI.

pub mod config;
pub mod script;
pub mod seed;
pub mod service;

// Re-exports for convenience
pub use config::{ProjectConfig, SeedConfig, ViewConfig};
pub use script::{ScriptCommand, ScriptError, ScriptOutcome, parse_line};
pub use seed::{SAMPLE_TASKS, seed_sample_tasks};
pub use service::TaskService;
