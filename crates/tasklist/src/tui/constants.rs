//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside selected list entries.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Maximum graphemes of task text shown per list row before truncation.
pub const TASK_TEXT_MAX_GRAPHEMES: usize = 60;
/// Marker shown before completed tasks.
pub const COMPLETED_MARKER: &str = "[x]";
/// Marker shown before pending tasks.
pub const PENDING_MARKER: &str = "[ ]";
/// Width in columns of one calendar day cell.
pub const CALENDAR_CELL_WIDTH: usize = 5;
/// Weekday headings, Sunday first.
pub const WEEKDAY_HEADINGS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
