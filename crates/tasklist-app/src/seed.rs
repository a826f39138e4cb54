//! Demo data loaded at startup.

use tasklist_core::{TaskStore, ValidationError};
use time::OffsetDateTime;
use time::macros::datetime;

/// Text, completion flag and creation time of each demo task.
pub const SAMPLE_TASKS: [(&str, bool, OffsetDateTime); 3] = [
    ("Complete React project", false, datetime!(2024-01-15 0:00 UTC)),
    ("Review code documentation", true, datetime!(2024-01-14 0:00 UTC)),
    ("Set up testing environment", false, datetime!(2024-01-16 0:00 UTC)),
];

/// Insert the demo tasks into `store` through the regular validated path.
///
/// # Errors
/// Fails if the store already holds a task with one of the sample texts.
pub fn seed_sample_tasks(store: &mut TaskStore) -> Result<(), ValidationError> {
    for (text, completed, created_at) in SAMPLE_TASKS {
        let task = store.add_at(text, created_at)?;
        if completed {
            store.toggle(task.id());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::TaskStats;

    #[test]
    fn seeds_three_tasks_with_one_completed() {
        let mut store = TaskStore::new();
        seed_sample_tasks(&mut store).unwrap_or_else(|err| panic!("seed must succeed: {err}"));
        let stats = TaskStats::from_tasks(store.tasks());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(store.tasks()[1].text(), "Review code documentation");
        assert!(store.tasks()[1].completed());
    }

    #[test]
    fn seeding_twice_is_rejected_as_duplicate() {
        let mut store = TaskStore::new();
        seed_sample_tasks(&mut store).unwrap_or_else(|err| panic!("seed must succeed: {err}"));
        assert_eq!(seed_sample_tasks(&mut store), Err(ValidationError::DuplicateTask));
        assert_eq!(store.len(), 3);
    }
}
