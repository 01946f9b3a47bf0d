// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptors: the identity and metadata attached to draggable and droppable elements.
//!
//! The host interaction layer hands every event an *active* descriptor (what is
//! being dragged) and, for over/end events, an optional *over* descriptor (what
//! it is hovering). Each descriptor is the element id plus optional [`DragData`]
//! tagged `card` or `column`.
//!
//! With the `serde` feature the metadata uses the same JSON shape the host
//! layer registers:
//!
//! ```text
//! { "type": "card", "cardId": "a", "columnId": "Planned" }
//! { "type": "card", "columnId": "Planned" }            // card id = element id
//! { "type": "column", "columnId": "Planned" }
//! ```

use alloc::format;
use alloc::string::String;

use kanban_board::{CardId, ColumnId};
use kanban_reorder::{ActiveItem, TargetItem};

use crate::DragError;

/// Metadata registered with a draggable or droppable element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum DragData {
    /// A card living in `column_id`.
    Card {
        /// The card id; when absent the element id is the card id.
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        card_id: Option<CardId>,
        /// The column holding the card.
        column_id: ColumnId,
    },
    /// A column (either the sortable column itself or its drop zone).
    Column {
        /// The column id.
        column_id: ColumnId,
    },
}

/// An element taking part in a drag: its id plus optional metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Element id as registered with the interaction layer.
    pub id: String,
    /// Metadata; absent if the element was registered without any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: Option<DragData>,
}

impl Descriptor {
    /// Describes a card in `column`. The element id is the card id.
    pub fn card(card: impl Into<CardId>, column: impl Into<ColumnId>) -> Self {
        let card = card.into();
        Self {
            id: String::from(card.as_str()),
            data: Some(DragData::Card {
                card_id: Some(card),
                column_id: column.into(),
            }),
        }
    }

    /// Describes a sortable column. The element id is the column id.
    pub fn column(column: impl Into<ColumnId>) -> Self {
        let column = column.into();
        Self {
            id: String::from(column.as_str()),
            data: Some(DragData::Column { column_id: column }),
        }
    }

    /// Describes the drop zone of `column`, using the [`DropZoneId`] naming scheme.
    pub fn drop_zone(column: impl Into<ColumnId>) -> Self {
        let column = column.into();
        Self {
            id: DropZoneId::for_column(&column).into_string(),
            data: Some(DragData::Column { column_id: column }),
        }
    }

    /// Describes an element registered without metadata.
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    fn data(&self) -> Result<&DragData, DragError> {
        self.data.as_ref().ok_or_else(|| DragError::MissingMetadata {
            id: self.id.clone(),
        })
    }

    fn malformed(&self, reason: &'static str) -> DragError {
        DragError::MalformedMetadata {
            id: self.id.clone(),
            reason,
        }
    }

    /// Resolves the card and column named by a card descriptor.
    fn card_parts(
        &self,
        card_id: Option<&CardId>,
        column_id: &ColumnId,
    ) -> Result<(CardId, ColumnId), DragError> {
        if column_id.is_empty() {
            return Err(self.malformed("empty column id"));
        }
        let card = match card_id {
            Some(card) if card.as_str() != self.id => {
                return Err(self.malformed("card id does not match element id"));
            }
            Some(card) => card.clone(),
            None => CardId::from(self.id.as_str()),
        };
        if card.is_empty() {
            return Err(self.malformed("empty card id"));
        }
        Ok((card, column_id.clone()))
    }

    /// Interprets this descriptor as the item being dragged.
    pub fn to_active(&self) -> Result<ActiveItem, DragError> {
        match self.data()? {
            DragData::Card { card_id, column_id } => {
                let (card_id, source_column_id) = self.card_parts(card_id.as_ref(), column_id)?;
                Ok(ActiveItem::Card {
                    card_id,
                    source_column_id,
                })
            }
            DragData::Column { column_id } if column_id.is_empty() => {
                Err(self.malformed("empty column id"))
            }
            DragData::Column { column_id } => Ok(ActiveItem::column(column_id.clone())),
        }
    }

    /// Interprets this descriptor as the element under the pointer.
    pub fn to_target(&self) -> Result<TargetItem, DragError> {
        match self.data()? {
            DragData::Card { card_id, column_id } => {
                let (card_id, column_id) = self.card_parts(card_id.as_ref(), column_id)?;
                Ok(TargetItem::OverCard { card_id, column_id })
            }
            DragData::Column { column_id } if column_id.is_empty() => {
                Err(self.malformed("empty column id"))
            }
            DragData::Column { column_id } => Ok(TargetItem::over_column(column_id.clone())),
        }
    }
}

/// Id of a column's droppable region: `column-{column id}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DropZoneId(String);

impl DropZoneId {
    const PREFIX: &'static str = "column-";

    /// Returns the drop zone id of `column`.
    #[must_use]
    pub fn for_column(column: &ColumnId) -> Self {
        Self(format!("{}{column}", Self::PREFIX))
    }

    /// Returns the column this zone belongs to, if the id follows the naming scheme.
    #[must_use]
    pub fn column_id(&self) -> Option<ColumnId> {
        parse_drop_zone(&self.0)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Parses a raw element id of the form `column-{id}`.
#[must_use]
pub fn parse_drop_zone(id: &str) -> Option<ColumnId> {
    id.strip_prefix(DropZoneId::PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(ColumnId::from)
}

/// Delivered when a drag activates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragStartEvent {
    /// The element being dragged.
    pub active: Descriptor,
}

/// Delivered whenever the element under the pointer may have changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOverEvent {
    /// The element being dragged.
    pub active: Descriptor,
    /// The droppable element under the pointer, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub over: Option<Descriptor>,
}

/// Delivered when the pointer is released after an activated drag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEndEvent {
    /// The element being dragged.
    pub active: Descriptor,
    /// The droppable element under the pointer at release, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub over: Option<Descriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_descriptor_resolves_both_ways() {
        let d = Descriptor::card("a", "Planned");
        assert_eq!(d.id, "a");
        assert_eq!(d.to_active(), Ok(ActiveItem::card("a", "Planned")));
        assert_eq!(d.to_target(), Ok(TargetItem::over_card("a", "Planned")));
    }

    #[test]
    fn card_id_falls_back_to_element_id() {
        let d = Descriptor {
            id: String::from("Cook"),
            data: Some(DragData::Card {
                card_id: None,
                column_id: "In Work".into(),
            }),
        };
        assert_eq!(d.to_active(), Ok(ActiveItem::card("Cook", "In Work")));
    }

    #[test]
    fn drop_zone_resolves_to_column() {
        let d = Descriptor::drop_zone("Done");
        assert_eq!(d.id, "column-Done");
        assert_eq!(d.to_target(), Ok(TargetItem::over_column("Done")));
    }

    #[test]
    fn missing_metadata_is_reported() {
        let d = Descriptor::bare("x");
        assert_eq!(
            d.to_active(),
            Err(DragError::MissingMetadata {
                id: String::from("x")
            })
        );
    }

    #[test]
    fn malformed_metadata_is_reported() {
        let mismatched = Descriptor {
            id: String::from("a"),
            data: Some(DragData::Card {
                card_id: Some("b".into()),
                column_id: "Planned".into(),
            }),
        };
        assert!(matches!(
            mismatched.to_target(),
            Err(DragError::MalformedMetadata { .. })
        ));

        let empty_column = Descriptor::column("");
        assert!(matches!(
            empty_column.to_active(),
            Err(DragError::MalformedMetadata { .. })
        ));

        let empty_card = Descriptor::card("", "Planned");
        assert!(matches!(
            empty_card.to_active(),
            Err(DragError::MalformedMetadata { .. })
        ));
    }

    #[test]
    fn drop_zone_ids_round_trip() {
        let zone = DropZoneId::for_column(&"In Work".into());
        assert_eq!(zone.as_str(), "column-In Work");
        assert_eq!(zone.column_id(), Some(ColumnId::from("In Work")));
        assert_eq!(parse_drop_zone("column-"), None);
        assert_eq!(parse_drop_zone("card-a"), None);
    }
}
