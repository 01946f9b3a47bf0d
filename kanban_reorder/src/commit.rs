// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit resolver: the single authoritative reordering applied at drag end.
//!
//! [`commit`] takes a snapshot of the committed board plus the final active
//! and target items and builds a brand-new [`Board`]. The input is never
//! touched, so a caller that swaps the result into its store gets an atomic
//! update, and a caller that receives an error keeps its board as-is.
//!
//! | Active | Target | Result |
//! |--------|--------|--------|
//! | column | another column (or a card in it) | column moved to that column's index |
//! | card | another column | card removed from source, appended to target |
//! | card | card, same column | card moved to the target card's index |
//! | card | card, other column | card removed from source, inserted after the target card |
//! | card | itself | [`NoOp::SelfTarget`] |
//! | card | its own column | [`NoOp::AlreadyInColumn`] |
//! | any | nothing | [`NoOp::NoTarget`] |
//!
//! Unknown column or card ids yield [`NoOp::StaleColumn`] or [`NoOp::StaleCard`].

use kanban_board::{Board, CardId, ColumnId};

use crate::item::{ActiveItem, TargetItem};
use crate::list::move_item;

/// Why a drop left the board unchanged.
///
/// None of these are failures of the caller; they are the expected outcomes
/// of drops that have nothing to do.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoOp {
    /// The drag ended outside every droppable region.
    #[error("drop has no target")]
    NoTarget,

    /// The item was dropped onto itself.
    #[error("item dropped onto itself")]
    SelfTarget,

    /// A card was dropped onto the column it already lives in.
    #[error("card {card} is already in column {column}")]
    AlreadyInColumn {
        /// The dropped card.
        card: CardId,
        /// Its (unchanged) column.
        column: ColumnId,
    },

    /// A column id no longer exists on the board.
    #[error("column {column} is not on the board")]
    StaleColumn {
        /// The missing column.
        column: ColumnId,
    },

    /// A card id is no longer where the drag thinks it is.
    #[error("card {card} is not in column {column}")]
    StaleCard {
        /// The missing card.
        card: CardId,
        /// The column it was expected in.
        column: ColumnId,
    },
}

/// Computes the board that results from dropping `active` onto `target`.
///
/// Returns the new board, or the [`NoOp`] reason when nothing should change.
/// `board` is only read.
pub fn commit(board: &Board, active: &ActiveItem, target: &TargetItem) -> Result<Board, NoOp> {
    let result = match active {
        ActiveItem::Column { column_id } => commit_column(board, column_id, target),
        ActiveItem::Card {
            card_id,
            source_column_id,
        } => commit_card(board, card_id, source_column_id, target),
    };
    match &result {
        Ok(_) => tracing::debug!(?active, ?target, "drop committed"),
        Err(reason) => tracing::debug!(?active, ?target, %reason, "drop left board unchanged"),
    }
    result
}

fn column_index(board: &Board, column: &ColumnId) -> Result<usize, NoOp> {
    board.column_index(column).ok_or_else(|| NoOp::StaleColumn {
        column: column.clone(),
    })
}

fn card_index(board: &Board, column_idx: usize, card: &CardId) -> Result<usize, NoOp> {
    let column = &board.columns()[column_idx];
    column.position(card).ok_or_else(|| NoOp::StaleCard {
        card: card.clone(),
        column: column.id.clone(),
    })
}

fn commit_column(board: &Board, column: &ColumnId, target: &TargetItem) -> Result<Board, NoOp> {
    // A column hovering over a card is treated as hovering over that card's column.
    let over = target.column_id().ok_or(NoOp::NoTarget)?;
    if over == column {
        return Err(NoOp::SelfTarget);
    }
    let from = column_index(board, column)?;
    let to = column_index(board, over)?;

    let mut next = board.clone();
    move_item(next.columns_mut(), from, to);
    Ok(next)
}

fn commit_card(
    board: &Board,
    card: &CardId,
    source: &ColumnId,
    target: &TargetItem,
) -> Result<Board, NoOp> {
    match target {
        TargetItem::None => return Err(NoOp::NoTarget),
        TargetItem::OverCard { card_id, .. } if card_id == card => {
            return Err(NoOp::SelfTarget);
        }
        _ => {}
    }

    let source_idx = column_index(board, source)?;
    let from = card_index(board, source_idx, card)?;

    let mut next = board.clone();
    match target {
        TargetItem::OverColumn { column_id } => {
            let dest_idx = column_index(board, column_id)?;
            if dest_idx == source_idx {
                return Err(NoOp::AlreadyInColumn {
                    card: card.clone(),
                    column: column_id.clone(),
                });
            }
            let columns = next.columns_mut();
            let moved = columns[source_idx].cards.remove(from);
            columns[dest_idx].cards.push(moved);
        }
        TargetItem::OverCard { card_id, column_id } => {
            let dest_idx = column_index(board, column_id)?;
            let to = card_index(board, dest_idx, card_id)?;
            let columns = next.columns_mut();
            if dest_idx == source_idx {
                move_item(&mut columns[source_idx].cards, from, to);
            } else {
                let moved = columns[source_idx].cards.remove(from);
                columns[dest_idx].cards.insert(to + 1, moved);
            }
        }
        TargetItem::None => return Err(NoOp::NoTarget),
    }
    Ok(next)
}
