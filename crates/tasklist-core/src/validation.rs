//! Input rules for new task text.

use thiserror::Error;

use crate::task::Task;

/// Minimum number of characters after trimming.
pub const MIN_TEXT_LEN: usize = 3;
/// Maximum number of characters after trimming.
pub const MAX_TEXT_LEN: usize = 100;

/// Reason a candidate task text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    #[error("Task cannot be empty")]
    EmptyInput,
    /// Trimmed text is shorter than [`MIN_TEXT_LEN`].
    #[error("Task must be at least 3 characters long")]
    TooShort {
        /// Trimmed character count.
        length: usize,
    },
    /// Trimmed text is longer than [`MAX_TEXT_LEN`].
    #[error("Task must be at most 100 characters long")]
    TooLong {
        /// Trimmed character count.
        length: usize,
    },
    /// Another task already has the same text, ignoring case.
    #[error("Task already exists")]
    DuplicateTask,
}

/// Strip surrounding whitespace, including the zero-width no-break space (U+FEFF).
#[must_use]
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Check a candidate text against the existing tasks.
///
/// Rules are evaluated in a fixed order (empty, too short, too long,
/// duplicate) and the first violation is reported.
///
/// # Errors
/// Returns the first [`ValidationError`] the candidate violates.
pub fn validate(candidate: &str, existing: &[Task]) -> Result<(), ValidationError> {
    let trimmed = trim_text(candidate);
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let length = trimmed.chars().count();
    if length < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort { length });
    }
    if length > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong { length });
    }

    let needle = trimmed.to_lowercase();
    if existing
        .iter()
        .any(|task| trim_text(&task.text).to_lowercase() == needle)
    {
        return Err(ValidationError::DuplicateTask);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use time::macros::datetime;

    fn task(text: &str) -> Task {
        Task {
            id: TaskId(1),
            text: text.to_owned(),
            completed: false,
            created_at: datetime!(2024-01-15 00:00 UTC),
        }
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(validate("", &[]), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   \t\n", &[]), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(validate("ab", &[]), Err(ValidationError::TooShort { length: 2 }));
        assert_eq!(validate("abc", &[]), Ok(()));
        assert_eq!(validate(&"a".repeat(100), &[]), Ok(()));
        assert_eq!(
            validate(&"a".repeat(101), &[]),
            Err(ValidationError::TooLong { length: 101 })
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        assert_eq!(validate("  ab  ", &[]), Err(ValidationError::TooShort { length: 2 }));
        let padded = format!("   {}   ", "a".repeat(100));
        assert_eq!(validate(&padded, &[]), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate("äöü", &[]), Ok(()));
        assert_eq!(validate("日本", &[]), Err(ValidationError::TooShort { length: 2 }));
    }

    #[test]
    fn duplicates_ignore_case_and_surrounding_space() {
        let existing = vec![task("Buy milk")];
        assert_eq!(validate("  BUY MILK ", &existing), Err(ValidationError::DuplicateTask));
        assert_eq!(validate("Buy milk today", &existing), Ok(()));
    }

    #[test]
    fn first_failing_rule_wins() {
        // "ab" is both too short and a duplicate of an existing "AB"-like entry.
        let existing = vec![task("ab")];
        assert_eq!(validate("AB", &existing), Err(ValidationError::TooShort { length: 2 }));

        let long = "y".repeat(MAX_TEXT_LEN + 1);
        let existing = vec![task(&long)];
        assert_eq!(
            validate(&long.to_uppercase(), &existing),
            Err(ValidationError::TooLong {
                length: MAX_TEXT_LEN + 1
            })
        );
        assert_eq!(validate(" \t ", &existing), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(validate("\u{FEFF}", &[]), Err(ValidationError::EmptyInput));
        assert_eq!(validate("\u{FEFF} ab \u{FEFF}", &[]), Err(ValidationError::TooShort { length: 2 }));
        let existing = vec![task("Buy milk")];
        assert_eq!(validate("\u{FEFF}buy milk", &existing), Err(ValidationError::DuplicateTask));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyInput.to_string(), "Task cannot be empty");
        assert_eq!(
            ValidationError::TooShort { length: 1 }.to_string(),
            "Task must be at least 3 characters long"
        );
        assert_eq!(ValidationError::DuplicateTask.to_string(), "Task already exists");
    }
}
