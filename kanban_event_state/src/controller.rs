// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: the board store, the drag session, and the pointer sensor in one place.
//!
//! [`DragController`] is the top-level state a Kanban view keeps. It owns the
//! committed board and the transient drag state side by side and wires them
//! together:
//!
//! - drag callbacks go to the [`DragSession`];
//! - [`DragController::preview`] derives the board to render;
//! - [`DragController::on_drag_end`] commits through
//!   [`kanban_reorder::commit`] and replaces the stored board once.
//!
//! Hosts whose interaction layer only reports raw pointer input can use the
//! `pointer_*` methods instead; they apply the [`ActivationConstraint`] and
//! translate into the same drag callbacks.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use kanban_board::{Board, BoardStore, CardId, ColumnId};
use kanban_reorder::{NoOp, commit, preview, preview_column};
use kurbo::Point;

use crate::DragError;
use crate::descriptor::{Descriptor, DragEndEvent, DragOverEvent, DragStartEvent, DropZoneId};
use crate::sensor::{ActivationConstraint, PointerSensor, SensorStep};
use crate::session::{DragSession, DropRequest};

/// What a finished drag did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The board was replaced; carries the store's new revision.
    Committed {
        /// Store revision after the replacement.
        revision: u64,
    },
    /// The drop resolved to nothing; the board is unchanged.
    Unchanged(NoOp),
    /// No drag was in progress.
    NotDragging,
}

impl DropOutcome {
    /// Returns `true` if the board was replaced.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Owns the committed board and the drag in progress.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    store: BoardStore,
    session: DragSession,
    sensor: PointerSensor,
    pressed: Option<Descriptor>,
}

impl DragController {
    /// Creates a controller over `board` with the default activation distance.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_constraint(board, ActivationConstraint::default())
    }

    /// Creates a controller over `board` using `constraint` for pointer input.
    #[must_use]
    pub fn with_constraint(board: Board, constraint: ActivationConstraint) -> Self {
        Self {
            store: BoardStore::new(board),
            session: DragSession::new(),
            sensor: PointerSensor::new(constraint),
            pressed: None,
        }
    }

    /// Returns the committed board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.store.get()
    }

    /// Returns the board store.
    #[must_use]
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns the drag session.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Replaces the committed board from outside a drag (for example on reload).
    ///
    /// Any drag in progress is cancelled first, since its items may no longer exist.
    pub fn reset(&mut self, board: Board) {
        self.cancel_all();
        self.store.replace(board);
    }

    /// Handles drag start.
    pub fn on_drag_start(&mut self, event: &DragStartEvent) -> Result<(), DragError> {
        self.session.on_drag_start(event).map(|_| ())
    }

    /// Handles drag over.
    pub fn on_drag_over(&mut self, event: &DragOverEvent) -> Result<(), DragError> {
        self.session.on_drag_over(event).map(|_| ())
    }

    /// Handles drag end: commits the drop and clears the session.
    pub fn on_drag_end(&mut self, event: &DragEndEvent) -> DropOutcome {
        let request = self.session.on_drag_end(event);
        self.apply(request)
    }

    /// Handles drag cancel: clears the session, commits nothing.
    pub fn on_drag_cancel(&mut self) {
        self.session.on_drag_cancel();
    }

    fn apply(&mut self, request: Result<DropRequest, DragError>) -> DropOutcome {
        let Ok(request) = request else {
            return DropOutcome::NotDragging;
        };
        match commit(self.store.get(), &request.active, &request.target) {
            Ok(next) => {
                self.store.replace(next);
                DropOutcome::Committed {
                    revision: self.store.revision(),
                }
            }
            Err(reason) => DropOutcome::Unchanged(reason),
        }
    }

    /// Returns the board to render right now.
    ///
    /// Borrows the committed board when idle; derives a preview while dragging.
    #[must_use]
    pub fn preview(&self) -> Cow<'_, Board> {
        match self.session.active() {
            Some(active) => Cow::Owned(preview(self.store.get(), active, self.session.target())),
            None => Cow::Borrowed(self.store.get()),
        }
    }

    /// Returns the card list to render for one column, or `None` for an unknown column.
    #[must_use]
    pub fn column_preview(&self, column: &ColumnId) -> Option<Cow<'_, [CardId]>> {
        let board = self.store.get();
        let column = board.column(column)?;
        Some(match self.session.active() {
            Some(active) if active.is_present_in(board) => {
                preview_column(column, active, self.session.target())
            }
            _ => Cow::Borrowed(&column.cards),
        })
    }

    /// Descriptors to register for every draggable element: each column, then its cards.
    #[must_use]
    pub fn draggables(&self) -> Vec<Descriptor> {
        let board = self.store.get();
        let mut out = Vec::with_capacity(board.len() + board.card_count());
        for column in board {
            out.push(Descriptor::column(column.id.clone()));
            out.extend(
                column
                    .cards
                    .iter()
                    .map(|card| Descriptor::card(card.clone(), column.id.clone())),
            );
        }
        out
    }

    /// Drop zone ids to register, one per column, in display order.
    #[must_use]
    pub fn droppables(&self) -> Vec<DropZoneId> {
        self.store
            .get()
            .iter()
            .map(|column| DropZoneId::for_column(&column.id))
            .collect()
    }

    /// Pointer went down on the element described by `pressed`.
    ///
    /// Nothing starts yet; the drag begins once the pointer travels past the
    /// activation distance. A drag left over from an earlier press whose
    /// release never arrived is cancelled.
    pub fn pointer_down(&mut self, pos: Point, pressed: Descriptor) {
        if self.session.is_dragging() {
            tracing::debug!(id = %pressed.id, "new press cancels unfinished drag");
            self.session.on_drag_cancel();
        }
        self.sensor.press(pos);
        self.pressed = Some(pressed);
    }

    /// Pointer moved to `pos`, hovering `over`.
    ///
    /// Starts the drag when the activation distance is crossed and updates the
    /// target on every move after that. If the pressed element turns out to
    /// have unusable metadata the gesture is dropped.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        over: Option<Descriptor>,
    ) -> Result<SensorStep, DragError> {
        let step = self.sensor.move_to(pos);
        let Some(active) = self.pressed.clone() else {
            return Ok(step);
        };
        match step {
            SensorStep::Idle | SensorStep::Pending => return Ok(step),
            SensorStep::Activated => {
                let start = DragStartEvent {
                    active: active.clone(),
                };
                if let Err(err) = self.on_drag_start(&start) {
                    self.sensor.cancel();
                    self.pressed = None;
                    return Err(err);
                }
            }
            SensorStep::Dragging(_) => {}
        }
        self.on_drag_over(&DragOverEvent { active, over })?;
        Ok(step)
    }

    /// Pointer released at `pos` over `over`.
    ///
    /// Returns `None` for a click (released before activation); otherwise the
    /// drop outcome. The release itself never starts a drag, however far it
    /// is from the press.
    pub fn pointer_up(&mut self, pos: Point, over: Option<Descriptor>) -> Option<DropOutcome> {
        tracing::trace!(x = pos.x, y = pos.y, "pointer released");
        let was_drag = self.sensor.release();
        let active = self.pressed.take()?;
        if !was_drag || !self.session.is_dragging() {
            return None;
        }
        Some(self.on_drag_end(&DragEndEvent { active, over }))
    }

    /// Pointer interaction aborted (for example by Escape or losing capture).
    pub fn pointer_cancel(&mut self) {
        self.cancel_all();
    }

    fn cancel_all(&mut self) {
        self.sensor.cancel();
        self.pressed = None;
        self.session.on_drag_cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_board::Column;

    fn board() -> Board {
        Board::from_columns([
            Column::new("Planned", ["a", "b"]),
            Column::new("Work", ["c"]),
            Column::new("Done", [] as [&str; 0]),
        ])
    }

    #[test]
    fn registrations_cover_every_element() {
        let controller = DragController::new(board());
        let ids: Vec<_> = controller
            .draggables()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["Planned", "a", "b", "Work", "c", "Done"]);

        let zones: Vec<_> = controller
            .droppables()
            .into_iter()
            .map(DropZoneId::into_string)
            .collect();
        assert_eq!(zones, ["column-Planned", "column-Work", "column-Done"]);
    }

    #[test]
    fn end_without_start_reports_not_dragging() {
        let mut controller = DragController::new(board());
        let outcome = controller.on_drag_end(&DragEndEvent {
            active: Descriptor::card("a", "Planned"),
            over: Some(Descriptor::drop_zone("Done")),
        });
        assert_eq!(outcome, DropOutcome::NotDragging);
        assert_eq!(controller.store().revision(), 0);
    }

    #[test]
    fn reset_cancels_drag() {
        let mut controller = DragController::new(board());
        controller
            .on_drag_start(&DragStartEvent {
                active: Descriptor::card("a", "Planned"),
            })
            .unwrap();

        controller.reset(Board::seed());

        assert!(!controller.session().is_dragging());
        assert_eq!(controller.board(), &Board::seed());
    }
}
