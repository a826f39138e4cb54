//! Three-column kanban board with explicit card moves.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::id::{CardId, IdAllocator};

/// Board column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl Column {
    /// Every column in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Token used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Neighbouring column to the left, if any.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }

    /// Neighbouring column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }
}

/// Error raised for an unrecognized column token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column: {0} (expected todo, in-progress or done)")]
pub struct ParseColumnError(String);

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" | "doing" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnError(s.to_owned())),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Urgent.
    High,
    /// Normal.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Identifier, unique across the board.
    pub id: CardId,
    /// Short title.
    pub title: String,
    /// Person responsible.
    pub assignee: String,
    /// Priority badge.
    pub priority: Priority,
}

/// Kanban board: one ordered card list per [`Column`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    columns: [Vec<Card>; 3],
    ids: IdAllocator,
}

impl Board {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the dashboard's demo cards.
    #[must_use]
    pub fn sample() -> Self {
        let mut board = Self::new();
        let seed = [
            (Column::Todo, "Design Homepage", "John Doe", Priority::High),
            (Column::Todo, "Setup Database", "Jane Smith", Priority::Medium),
            (Column::InProgress, "API Development", "Mike Johnson", Priority::High),
            (Column::InProgress, "User Authentication", "Sarah Wilson", Priority::Low),
            (Column::Done, "Project Setup", "Tom Brown", Priority::Medium),
            (Column::Done, "Requirements Analysis", "Lisa Davis", Priority::Low),
        ];
        for (column, title, assignee, priority) in seed {
            board.add_card(column, title, assignee, priority);
        }
        board
    }

    /// Append a card to the end of `column`.
    pub fn add_card(
        &mut self,
        column: Column,
        title: impl Into<String>,
        assignee: impl Into<String>,
        priority: Priority,
    ) -> CardId {
        let id = CardId(self.ids.allocate());
        self.columns[column.index()].push(Card {
            id,
            title: title.into(),
            assignee: assignee.into(),
            priority,
        });
        id
    }

    /// Move a card from `from` to the end of `to`.
    ///
    /// Returns `false` without changing anything when `from == to` or the
    /// card is not in `from`.
    pub fn move_card(&mut self, id: CardId, from: Column, to: Column) -> bool {
        if from == to {
            return false;
        }
        let source = &mut self.columns[from.index()];
        let Some(position) = source.iter().position(|card| card.id == id) else {
            return false;
        };
        let card = source.remove(position);
        self.columns[to.index()].push(card);
        true
    }

    /// Cards in `column`, in order.
    #[must_use]
    pub fn cards(&self, column: Column) -> &[Card] {
        &self.columns[column.index()]
    }

    /// Number of cards in `column`.
    #[must_use]
    pub fn count(&self, column: Column) -> usize {
        self.cards(column).len()
    }

    /// Locate a card and the column holding it.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<(Column, &Card)> {
        Column::ALL.into_iter().find_map(|column| {
            self.cards(column)
                .iter()
                .find(|card| card.id == id)
                .map(|card| (column, card))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(board: &Board, column: Column) -> Vec<&str> {
        board.cards(column).iter().map(|card| card.title.as_str()).collect()
    }

    #[test]
    fn sample_board_has_two_cards_per_column() {
        let board = Board::sample();
        for column in Column::ALL {
            assert_eq!(board.count(column), 2, "{column}");
        }
        assert_eq!(titles(&board, Column::Todo), vec!["Design Homepage", "Setup Database"]);
    }

    #[test]
    fn move_appends_to_target_and_removes_from_source() {
        let mut board = Board::sample();
        let (_, card) = board
            .find(CardId(1))
            .unwrap_or_else(|| panic!("sample card 1 must exist"));
        assert_eq!(card.title, "Design Homepage");

        assert!(board.move_card(CardId(1), Column::Todo, Column::Done));
        assert_eq!(titles(&board, Column::Todo), vec!["Setup Database"]);
        assert_eq!(
            titles(&board, Column::Done),
            vec!["Project Setup", "Requirements Analysis", "Design Homepage"]
        );
        assert_eq!(board.find(CardId(1)).map(|(column, _)| column), Some(Column::Done));
    }

    #[test]
    fn move_within_same_column_is_noop() {
        let mut board = Board::sample();
        assert!(!board.move_card(CardId(1), Column::Todo, Column::Todo));
        assert_eq!(titles(&board, Column::Todo), vec!["Design Homepage", "Setup Database"]);
    }

    #[test]
    fn move_from_wrong_column_never_duplicates() {
        let mut board = Board::sample();
        assert!(!board.move_card(CardId(1), Column::InProgress, Column::Done));
        let total: usize = Column::ALL.into_iter().map(|column| board.count(column)).sum();
        assert_eq!(total, 6);
        assert_eq!(board.count(Column::Done), 2);
    }

    #[test]
    fn column_tokens_parse_leniently() {
        assert_eq!("In-Progress".parse::<Column>(), Ok(Column::InProgress));
        assert_eq!("in_progress".parse::<Column>(), Ok(Column::InProgress));
        assert_eq!("TODO".parse::<Column>(), Ok(Column::Todo));
        assert!("later".parse::<Column>().is_err());
    }

    #[test]
    fn neighbours_stop_at_edges() {
        assert_eq!(Column::Todo.prev(), None);
        assert_eq!(Column::Todo.next(), Some(Column::InProgress));
        assert_eq!(Column::Done.next(), None);
    }
}
