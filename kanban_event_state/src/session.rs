// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: which item is being dragged and what it is over.
//!
//! [`DragSession`] turns the host layer's drag callbacks into the two pieces
//! of transient state the resolvers need:
//!
//! - the **active item**, set on drag start and kept until end or cancel;
//! - the **target item**, recomputed on every drag-over event.
//!
//! Events for one gesture arrive as start → over* → (end | cancel). A handler
//! that receives malformed input logs it, returns a [`DragError`], and leaves
//! the session untouched.
//!
//! The session never touches the board. [`DragSession::on_drag_end`] hands
//! back a [`DropRequest`] for the caller to commit; see
//! [`DragController`](crate::DragController) for the wiring that does so.
//!
//! ## Minimal example
//!
//! ```
//! use kanban_event_state::session::DragSession;
//! use kanban_event_state::{Descriptor, DragEndEvent, DragOverEvent, DragStartEvent};
//! use kanban_reorder::{ActiveItem, TargetItem};
//!
//! let mut session = DragSession::new();
//! let card = Descriptor::card("a", "Planned");
//!
//! session.on_drag_start(&DragStartEvent { active: card.clone() }).unwrap();
//! session
//!     .on_drag_over(&DragOverEvent {
//!         active: card.clone(),
//!         over: Some(Descriptor::drop_zone("Done")),
//!     })
//!     .unwrap();
//! assert_eq!(session.target(), &TargetItem::over_column("Done"));
//!
//! let drop = session
//!     .on_drag_end(&DragEndEvent {
//!         active: card,
//!         over: Some(Descriptor::drop_zone("Done")),
//!     })
//!     .unwrap();
//! assert_eq!(drop.active, ActiveItem::card("a", "Planned"));
//! assert!(!session.is_dragging());
//! ```

use kanban_board::CardId;
use kanban_reorder::{ActiveItem, TargetItem};

use crate::DragError;
use crate::descriptor::{DragEndEvent, DragOverEvent, DragStartEvent};

/// The final active and target items of a finished drag, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropRequest {
    /// What was dragged.
    pub active: ActiveItem,
    /// What it was released over.
    pub target: TargetItem,
}

/// Transient state of the gesture in progress, if any.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    active: Option<ActiveItem>,
    target: TargetItem,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            target: TargetItem::None,
        }
    }

    /// Starts tracking a drag from the active descriptor's metadata.
    ///
    /// A start while another drag is in progress replaces it.
    pub fn on_drag_start(&mut self, event: &DragStartEvent) -> Result<&ActiveItem, DragError> {
        let active = event.active.to_active().inspect_err(|err| {
            tracing::warn!(%err, "ignoring drag start");
        })?;
        if let Some(previous) = &self.active {
            tracing::debug!(?previous, "drag start replaces unfinished drag");
        }
        tracing::debug!(?active, "drag started");
        self.target = TargetItem::None;
        Ok(&*self.active.insert(active))
    }

    /// Updates the target from the element under the pointer.
    pub fn on_drag_over(&mut self, event: &DragOverEvent) -> Result<&TargetItem, DragError> {
        if self.active.is_none() {
            tracing::warn!(id = %event.active.id, "drag over without an active drag");
            return Err(DragError::NoActiveDrag);
        }
        self.target = match &event.over {
            None => TargetItem::None,
            Some(over) => over.to_target().inspect_err(|err| {
                tracing::warn!(%err, "ignoring drag over");
            })?,
        };
        Ok(&self.target)
    }

    /// Finishes the drag and returns what to commit.
    ///
    /// The target is refreshed from the end event first: `over: None` means
    /// the pointer was released outside every droppable region. If the end
    /// event's over descriptor is unusable the last tracked target is kept.
    ///
    /// The session is cleared whatever the outcome.
    pub fn on_drag_end(&mut self, event: &DragEndEvent) -> Result<DropRequest, DragError> {
        match &event.over {
            None => self.target = TargetItem::None,
            Some(over) => match over.to_target() {
                Ok(target) => self.target = target,
                Err(err) => tracing::warn!(%err, "keeping last target for drop"),
            },
        }
        self.finish()
    }

    /// Finishes the drag using the last tracked target.
    ///
    /// Returns [`DragError::NoActiveDrag`] if nothing was being dragged. The
    /// session is cleared either way.
    pub fn finish(&mut self) -> Result<DropRequest, DragError> {
        let target = core::mem::take(&mut self.target);
        let active = self.active.take().ok_or(DragError::NoActiveDrag)?;
        tracing::debug!(?active, ?target, "drag ended");
        Ok(DropRequest { active, target })
    }

    /// Abandons the drag without producing anything to commit.
    pub fn on_drag_cancel(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(?active, "drag cancelled");
        }
        self.target = TargetItem::None;
    }

    /// Returns the item being dragged.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveItem> {
        self.active.as_ref()
    }

    /// Returns the element under the pointer.
    #[must_use]
    pub fn target(&self) -> &TargetItem {
        &self.target
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` if `card` is the card being dragged.
    ///
    /// Renderers use this to dim the card's placeholder in its list.
    #[must_use]
    pub fn is_dragged_card(&self, card: &CardId) -> bool {
        self.overlay_card() == Some(card)
    }

    /// Returns the card to draw in the drag overlay under the pointer.
    #[must_use]
    pub fn overlay_card(&self) -> Option<&CardId> {
        self.active.as_ref().and_then(ActiveItem::card_id)
    }
}
