// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview resolver: a speculative, render-only arrangement during a drag.
//!
//! Preview never touches the committed board. It is a pure derivation, so
//! calling it twice with the same inputs yields the same view, and a view
//! can be thrown away at any time (for example when the drag is cancelled).
//!
//! Only card drags reshape the preview:
//!
//! - Over a different column (or a card in it): the card is lifted out of
//!   its source list and shown in the hovered column, placed where
//!   [`commit`](crate::commit) would put it: appended for a column target,
//!   right after the hovered card for a card target.
//! - Over nothing: the card is lifted out of its source list and shown
//!   nowhere.
//! - Over its own column: no change; in-column sorting is left to the
//!   renderer's own animation.
//!
//! Column drags leave the preview untouched, and so does a card that is no
//! longer in its source column: [`commit`](crate::commit) would reject that
//! drop as stale.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use kanban_board::{Board, CardId, Column};

use crate::item::{ActiveItem, TargetItem};

/// Computes the preview of the whole board.
///
/// Equivalent to calling [`preview_column`] for every column, except that a
/// stale active card yields the board unchanged.
#[must_use]
pub fn preview(board: &Board, active: &ActiveItem, target: &TargetItem) -> Board {
    if !active.is_present_in(board) {
        return board.clone();
    }
    board
        .iter()
        .map(|column| Column {
            id: column.id.clone(),
            cards: preview_column(column, active, target).into_owned(),
        })
        .collect()
}

/// Computes the previewed card list of a single column.
///
/// Columns the drag does not affect are returned borrowed, so a renderer
/// can call this per column without cloning untouched lists.
///
/// A single column cannot tell whether the active card is stale; check
/// [`ActiveItem::is_present_in`] against the board first.
#[must_use]
pub fn preview_column<'a>(
    column: &'a Column,
    active: &ActiveItem,
    target: &TargetItem,
) -> Cow<'a, [CardId]> {
    let ActiveItem::Card {
        card_id,
        source_column_id,
    } = active
    else {
        return Cow::Borrowed(&column.cards);
    };

    let over = target.column_id();
    if over == Some(source_column_id) {
        return Cow::Borrowed(&column.cards);
    }

    if &column.id == source_column_id {
        if !column.contains(card_id) {
            return Cow::Borrowed(&column.cards);
        }
        let lifted: Vec<CardId> = column
            .cards
            .iter()
            .filter(|c| *c != card_id)
            .cloned()
            .collect();
        return Cow::Owned(lifted);
    }

    if over != Some(&column.id) || column.contains(card_id) {
        return Cow::Borrowed(&column.cards);
    }

    let at = match target {
        TargetItem::OverCard { card_id: over, .. } => {
            column.position(over).map_or(column.len(), |idx| idx + 1)
        }
        TargetItem::OverColumn { .. } | TargetItem::None => column.len(),
    };
    let mut shown = column.cards.clone();
    shown.insert(at, card_id.clone());
    Cow::Owned(shown)
}
