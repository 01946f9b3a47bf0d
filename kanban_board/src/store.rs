// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board store: holds the committed board and swaps it wholesale.

use crate::Board;

/// Owner of the authoritative, committed [`Board`].
///
/// The only mutation is [`BoardStore::replace`]. Every change is a full-board
/// replacement, so observers never see a partially updated column list.
///
/// Like the revision counter on a selection, [`BoardStore::revision`] bumps
/// on each replacement and gives observers a cheap "did anything change?"
/// marker.
#[derive(Clone, Debug, Default)]
pub struct BoardStore {
    board: Board,
    revision: u64,
}

impl BoardStore {
    /// Creates a store holding `board`.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    /// Returns the current committed board.
    #[must_use]
    pub fn get(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the committed board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Replaces the committed board, returning the previous one.
    ///
    /// Replacing with a structurally equal board still counts as a change:
    /// the revision reflects commits, not diffs.
    pub fn replace(&mut self, board: Board) -> Board {
        self.revision = self.revision.wrapping_add(1);
        core::mem::replace(&mut self.board, board)
    }

    /// Returns the number of replacements made so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Consumes the store, returning the committed board.
    #[must_use]
    pub fn into_inner(self) -> Board {
        self.board
    }
}

impl From<Board> for BoardStore {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Column;

    #[test]
    fn new_store_has_zero_revision() {
        let store = BoardStore::new(Board::seed());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.get(), &Board::seed());
    }

    #[test]
    fn replace_swaps_board_and_returns_previous() {
        let mut store = BoardStore::new(Board::seed());
        let next = Board::from_columns([Column::new("Only", ["x"])]);

        let previous = store.replace(next.clone());

        assert_eq!(previous, Board::seed());
        assert_eq!(store.get(), &next);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn snapshot_is_detached() {
        let store = BoardStore::new(Board::seed());
        let mut copy = store.snapshot();
        copy.columns_mut().clear();

        assert_eq!(store.get().len(), 3);
    }
}
