// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient drag items: what is being dragged and what it is over.

use kanban_board::{Board, CardId, ColumnId};

/// The element currently being dragged.
///
/// Exists only between drag start and drag end/cancel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum ActiveItem {
    /// A card, lifted from `source_column_id`.
    Card {
        /// The dragged card.
        card_id: CardId,
        /// The column the card was in when the drag started.
        source_column_id: ColumnId,
    },
    /// A whole column.
    Column {
        /// The dragged column.
        column_id: ColumnId,
    },
}

impl ActiveItem {
    /// Creates a card item.
    pub fn card(card_id: impl Into<CardId>, source_column_id: impl Into<ColumnId>) -> Self {
        Self::Card {
            card_id: card_id.into(),
            source_column_id: source_column_id.into(),
        }
    }

    /// Creates a column item.
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self::Column {
            column_id: column_id.into(),
        }
    }

    /// Returns the dragged card, if this is a card item.
    #[must_use]
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Self::Card { card_id, .. } => Some(card_id),
            Self::Column { .. } => None,
        }
    }

    /// Returns the source column of a card, or the dragged column itself.
    #[must_use]
    pub fn column_id(&self) -> &ColumnId {
        match self {
            Self::Card {
                source_column_id, ..
            } => source_column_id,
            Self::Column { column_id } => column_id,
        }
    }

    /// Returns `true` if `board` still has this item where the drag says it is.
    ///
    /// A card must be in its source column; a column must exist.
    #[must_use]
    pub fn is_present_in(&self, board: &Board) -> bool {
        let column = board.column(self.column_id());
        match self {
            Self::Card { card_id, .. } => column.is_some_and(|c| c.contains(card_id)),
            Self::Column { .. } => column.is_some(),
        }
    }
}

/// The droppable element currently under the pointer.
///
/// Recomputed on every drag-over event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum TargetItem {
    /// Over a card that lives in `column_id`.
    OverCard {
        /// The card under the pointer.
        card_id: CardId,
        /// The column holding that card.
        column_id: ColumnId,
    },
    /// Over a column's droppable region.
    OverColumn {
        /// The column under the pointer.
        column_id: ColumnId,
    },
    /// Not over any droppable region.
    #[default]
    None,
}

impl TargetItem {
    /// Creates a card target.
    pub fn over_card(card_id: impl Into<CardId>, column_id: impl Into<ColumnId>) -> Self {
        Self::OverCard {
            card_id: card_id.into(),
            column_id: column_id.into(),
        }
    }

    /// Creates a column target.
    pub fn over_column(column_id: impl Into<ColumnId>) -> Self {
        Self::OverColumn {
            column_id: column_id.into(),
        }
    }

    /// Returns the column this target belongs to, if any.
    #[must_use]
    pub fn column_id(&self) -> Option<&ColumnId> {
        match self {
            Self::OverCard { column_id, .. } | Self::OverColumn { column_id } => Some(column_id),
            Self::None => None,
        }
    }

    /// Returns the card under the pointer, if any.
    #[must_use]
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Self::OverCard { card_id, .. } => Some(card_id),
            Self::OverColumn { .. } | Self::None => None,
        }
    }

    /// Returns `true` if the pointer is outside every droppable region.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
