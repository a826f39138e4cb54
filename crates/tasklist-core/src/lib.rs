//! Domain types for the tasklist engine: a validated task store, a pure
//! filter/sort query pipeline, and the kanban board and calendar models used
//! by the dashboard views.

/// Kanban board columns and cards.
pub mod board;
/// Month grid generation.
pub mod calendar;
/// Identifier types.
pub mod id;
/// Filter and sort views.
pub mod query;
/// Completion statistics.
pub mod stats;
mod store;
mod task;
/// Rules applied to new task text.
pub mod validation;

pub use id::{CardId, TaskId};
pub use query::{FilterMode, ParseModeError, SortMode, query};
pub use stats::TaskStats;
pub use store::TaskStore;
pub use task::Task;
pub use validation::{MAX_TEXT_LEN, MIN_TEXT_LEN, ValidationError, trim_text, validate};
