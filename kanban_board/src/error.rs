// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when a board violates its invariants.

use crate::{CardId, ColumnId};

/// A board invariant violation found by [`Board::validate`](crate::Board::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two columns share the same id.
    #[error("duplicate column id: {column}")]
    DuplicateColumn {
        /// The repeated column id.
        column: ColumnId,
    },

    /// A card id appears more than once across the board.
    #[error("card {card} appears more than once (again in column {column})")]
    DuplicateCard {
        /// The repeated card id.
        card: CardId,
        /// The column where the repeat was found.
        column: ColumnId,
    },
}
