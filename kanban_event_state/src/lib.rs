// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kanban_event_state --heading-base-level=0

//! Kanban Event State: drag session tracking for drag-and-drop Kanban boards.
//!
//! This crate sits between a host interaction layer (whatever delivers pointer
//! and drag events) and the pure resolvers in `kanban_reorder`. It provides
//! small, focused state machines:
//!
//! - [`sensor`]: tell clicks from drags with a minimum pointer travel distance
//! - [`session`]: track the active item and the current target across drag events
//! - [`controller`]: own the committed board next to the drag, render previews,
//!   and commit exactly once at drag end
//! - [`descriptor`]: the element ids and metadata exchanged with the host layer
//!
//! ## Design Philosophy
//!
//! - **Framework-free**: no rendering, no event loop, no timers. Feed events in,
//!   read state out.
//! - **Single-threaded and ordered**: one gesture at a time, delivered as
//!   start → over* → (end | cancel).
//! - **Typed no-ops**: malformed input returns a [`DragError`] and changes nothing;
//!   drops that resolve to nothing report a [`NoOp`](kanban_reorder::NoOp).
//!   Both are logged with `tracing` as well.
//!
//! ## Usage
//!
//! ```rust
//! use kanban_board::{Board, Column};
//! use kanban_event_state::{
//!     Descriptor, DragController, DragEndEvent, DragOverEvent, DragStartEvent, DropOutcome,
//! };
//!
//! let mut kanban = DragController::new(Board::from_columns([
//!     Column::new("Planned", ["a", "b"]),
//!     Column::new("Work", ["c"]),
//!     Column::new("Done", [] as [&str; 0]),
//! ]));
//!
//! let card = Descriptor::card("a", "Planned");
//! kanban.on_drag_start(&DragStartEvent { active: card.clone() }).unwrap();
//! kanban
//!     .on_drag_over(&DragOverEvent {
//!         active: card.clone(),
//!         over: Some(Descriptor::drop_zone("Done")),
//!     })
//!     .unwrap();
//!
//! // Render the preview while dragging; nothing is committed yet.
//! assert_eq!(kanban.preview().columns()[2].cards.len(), 1);
//! assert!(kanban.board().columns()[2].cards.is_empty());
//!
//! let outcome = kanban.on_drag_end(&DragEndEvent {
//!     active: card,
//!     over: Some(Descriptor::drop_zone("Done")),
//! });
//! assert_eq!(outcome, DropOutcome::Committed { revision: 1 });
//! assert_eq!(kanban.board().columns()[2].cards.len(), 1);
//! ```
//!
//! ### Pointer input
//!
//! ```rust
//! use kurbo::Point;
//! use kanban_board::Board;
//! use kanban_event_state::{Descriptor, DragController};
//!
//! let mut kanban = DragController::new(Board::seed());
//! let card = Descriptor::card("Cook", "In Work");
//!
//! // A press and a tiny wobble is a click: nothing is dragged or committed.
//! kanban.pointer_down(Point::new(10.0, 10.0), card.clone());
//! kanban.pointer_move(Point::new(12.0, 11.0), None).unwrap();
//! assert!(!kanban.session().is_dragging());
//! assert_eq!(kanban.pointer_up(Point::new(12.0, 11.0), None), None);
//! assert_eq!(kanban.store().revision(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use Kurbo's `libm` backend in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for descriptors, events, and
//!   [`ActivationConstraint`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod controller;
pub mod descriptor;
mod error;
pub mod sensor;
pub mod session;

pub use controller::{DragController, DropOutcome};
pub use descriptor::{
    Descriptor, DragData, DragEndEvent, DragOverEvent, DragStartEvent, DropZoneId,
    parse_drop_zone,
};
pub use error::DragError;
pub use sensor::{ActivationConstraint, PointerSensor, SensorStep};
pub use session::{DragSession, DropRequest};
