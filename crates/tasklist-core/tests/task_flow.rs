#![allow(missing_docs)]

use tasklist_core::{FilterMode, SortMode, Task, TaskStore, ValidationError, query};
use time::macros::datetime;

fn texts(view: &[Task]) -> Vec<&str> {
    view.iter().map(Task::text).collect()
}

#[test]
fn completed_view_after_toggle_contains_only_toggled_task() {
    let mut store = TaskStore::new();
    let milk = store
        .add("Buy milk")
        .unwrap_or_else(|err| panic!("Buy milk must be accepted: {err}"));
    store
        .add("Walk dog")
        .unwrap_or_else(|err| panic!("Walk dog must be accepted: {err}"));

    store.toggle(milk.id());

    let view = query(store.tasks(), FilterMode::Completed, SortMode::Newest);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text(), "Buy milk");
    assert!(view[0].completed());
}

#[test]
fn short_input_is_rejected_then_valid_input_accepted() {
    let mut store = TaskStore::new();
    assert_eq!(store.add("ok"), Err(ValidationError::TooShort { length: 2 }));
    assert!(store.is_empty());

    store
        .add("Valid task")
        .unwrap_or_else(|err| panic!("Valid task must be accepted: {err}"));
    assert_eq!(store.len(), 1);
}

#[test]
fn every_length_in_range_is_accepted() {
    let mut store = TaskStore::new();
    for length in 3..=100 {
        let text = "x".repeat(length);
        let before = store.len();
        let task = store
            .add(&text)
            .unwrap_or_else(|err| panic!("length {length} must be accepted: {err}"));
        assert_eq!(store.len(), before + 1);
        assert!(!task.completed());
    }
}

#[test]
fn duplicates_do_not_grow_the_store() {
    let mut store = TaskStore::new();
    store
        .add("Review code documentation")
        .unwrap_or_else(|err| panic!("first insert must succeed: {err}"));
    assert_eq!(
        store.add("  review CODE documentation\t"),
        Err(ValidationError::DuplicateTask)
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn views_over_seeded_tasks() {
    let mut store = TaskStore::new();
    for (text, created_at) in [
        ("Complete React project", datetime!(2024-01-15 0:00 UTC)),
        ("Review code documentation", datetime!(2024-01-14 0:00 UTC)),
        ("Set up testing environment", datetime!(2024-01-16 0:00 UTC)),
    ] {
        store
            .add_at(text, created_at)
            .unwrap_or_else(|err| panic!("seed must be accepted: {err}"));
    }
    let review = store.tasks()[1].id();
    store.toggle(review);

    assert_eq!(
        texts(&query(store.tasks(), FilterMode::Pending, SortMode::Newest)),
        vec!["Set up testing environment", "Complete React project"]
    );
    assert_eq!(
        texts(&query(store.tasks(), FilterMode::All, SortMode::Oldest)),
        vec![
            "Review code documentation",
            "Complete React project",
            "Set up testing environment"
        ]
    );
    assert_eq!(
        texts(&query(store.tasks(), FilterMode::All, SortMode::Alphabetical)),
        vec![
            "Complete React project",
            "Review code documentation",
            "Set up testing environment"
        ]
    );
}

#[test]
fn alphabetical_sort_is_case_insensitive() {
    let mut store = TaskStore::new();
    store
        .add("Banana")
        .unwrap_or_else(|err| panic!("Banana must be accepted: {err}"));
    store
        .add("apple")
        .unwrap_or_else(|err| panic!("apple must be accepted: {err}"));
    let view = query(store.tasks(), FilterMode::All, SortMode::Alphabetical);
    assert_eq!(texts(&view), vec!["apple", "Banana"]);
}
