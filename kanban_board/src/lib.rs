// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kanban_board --heading-base-level=0

//! Kanban Board: the authoritative, committed state of a drag-and-drop board.
//!
//! A [`Board`] is an ordered sequence of [`Column`]s, and each column is an
//! ordered sequence of card identifiers. Order is display order. The crate
//! knows nothing about rendering or pointer input; it only owns the data and
//! answers lookups that the reorder and drag-session layers need.
//!
//! Two invariants hold for every committed board:
//!
//! - Column ids are unique.
//! - A card id appears in at most one column's card list.
//!
//! [`Board::validate`] checks both. Constructors that take arbitrary input
//! ([`Board::try_from_columns`]) validate up front; [`Board::from_columns`]
//! trusts the caller.
//!
//! Mutation goes through [`BoardStore`], which only exposes wholesale
//! replacement. There is no partial-field mutation, so a commit is either
//! fully visible or not visible at all.
//!
//! ## Minimal example
//!
//! ```rust
//! use kanban_board::{Board, BoardStore, Column};
//!
//! let board = Board::from_columns([
//!     Column::new("Planned", ["a", "b"]),
//!     Column::new("Work", ["c"]),
//!     Column::new("Done", [] as [&str; 0]),
//! ]);
//! assert_eq!(board.card_count(), 3);
//! assert_eq!(board.column_of(&"c".into()).map(|c| c.id.as_str()), Some("Work"));
//!
//! let mut store = BoardStore::new(board);
//! let mut next = store.snapshot();
//! next.columns_mut().swap(0, 2);
//! store.replace(next);
//! assert_eq!(store.get().columns()[0].id.as_str(), "Done");
//! assert_eq!(store.revision(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Board`], [`Column`], and the id types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod seed;
mod store;

pub use error::BoardError;
pub use store::BoardStore;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashSet;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Creates an id from anything convertible into a `String`.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the id is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(String::from(id))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

string_id! {
    /// Stable, unique identifier of a card.
    CardId
}

string_id! {
    /// Stable, unique identifier of a column.
    ColumnId
}

/// A column: a stable id plus an ordered list of card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Column id, unique within a board.
    pub id: ColumnId,
    /// Cards in display order.
    pub cards: Vec<CardId>,
}

impl Column {
    /// Creates a column from an id and an ordered list of cards.
    pub fn new<I, C>(id: impl Into<ColumnId>, cards: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        Self {
            id: id.into(),
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the index of `card` within this column, if present.
    #[must_use]
    pub fn position(&self, card: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns `true` if this column holds `card`.
    #[must_use]
    pub fn contains(&self, card: &CardId) -> bool {
        self.position(card).is_some()
    }

    /// Returns the number of cards in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if this column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// An ordered sequence of columns, keyed by unique column id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Creates a board from columns without validating the invariants.
    ///
    /// Use [`Board::try_from_columns`] for untrusted input.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = Column>,
    {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Creates a board from columns, rejecting duplicate column or card ids.
    pub fn try_from_columns<I>(columns: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Column>,
    {
        let board = Self::from_columns(columns);
        board.validate()?;
        Ok(board)
    }

    /// Checks that column ids are unique and that no card appears twice.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut columns: HashSet<&ColumnId> = HashSet::with_capacity(self.columns.len());
        let mut cards: HashSet<&CardId> = HashSet::with_capacity(self.card_count());
        for column in &self.columns {
            if !columns.insert(&column.id) {
                return Err(BoardError::DuplicateColumn {
                    column: column.id.clone(),
                });
            }
            for card in &column.cards {
                if !cards.insert(card) {
                    return Err(BoardError::DuplicateCard {
                        card: card.clone(),
                        column: column.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the columns mutably.
    ///
    /// Callers building a replacement board use this on a snapshot; the
    /// committed board inside a [`BoardStore`] is never handed out mutably.
    pub fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// Consumes the board, returning its columns.
    #[must_use]
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Returns an iterator over the columns in display order.
    pub fn iter(&self) -> core::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the display index of the column with `id`.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Returns the column with `id`.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Returns the column with `id` mutably.
    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Returns the column currently holding `card`.
    #[must_use]
    pub fn column_of(&self, card: &CardId) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(card))
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Column;
    type IntoIter = core::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl FromIterator<Column> for Board {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::from_columns(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_columns([
            Column::new("Planned", ["a", "b"]),
            Column::new("Work", ["c"]),
            Column::new("Done", [] as [&str; 0]),
        ])
    }

    #[test]
    fn lookups_by_id() {
        let board = sample();
        assert_eq!(board.len(), 3);
        assert_eq!(board.column_index(&"Done".into()), Some(2));
        assert_eq!(board.column(&"Work".into()).map(Column::len), Some(1));
        assert_eq!(
            board.column_of(&"b".into()).map(|c| c.id.as_str()),
            Some("Planned")
        );
        assert!(board.column(&"Missing".into()).is_none());
        assert!(board.column_of(&"z".into()).is_none());
    }

    #[test]
    fn card_count_sums_columns() {
        assert_eq!(sample().card_count(), 3);
        assert_eq!(Board::new().card_count(), 0);
    }

    #[test]
    fn validate_rejects_duplicate_column() {
        let err = Board::try_from_columns([
            Column::new("A", ["x"]),
            Column::new("A", ["y"]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateColumn {
                column: "A".into()
            }
        );
    }

    #[test]
    fn validate_rejects_card_in_two_columns() {
        let err = Board::try_from_columns([
            Column::new("A", ["x"]),
            Column::new("B", ["y", "x"]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateCard {
                card: "x".into(),
                column: "B".into(),
            }
        );
    }

    #[test]
    fn validate_accepts_sample() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn column_position_and_contains() {
        let column = Column::new("Planned", ["a", "b"]);
        assert_eq!(column.position(&"b".into()), Some(1));
        assert!(column.contains(&"a".into()));
        assert!(!column.contains(&"c".into()));
        assert!(!column.is_empty());
    }
}
