// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kanban_reorder --heading-base-level=0

//! Kanban Reorder: pure resolvers for drag-and-drop reordering of a board.
//!
//! Given a committed [`Board`](kanban_board::Board), the item being dragged
//! ([`ActiveItem`]) and what it hovers ([`TargetItem`]), this crate computes:
//!
//! - [`preview`]: a speculative arrangement to render while the drag is in
//!   progress. It never mutates the input and is never persisted.
//! - [`commit`]: the final arrangement to store when the drag ends, or a
//!   [`NoOp`] explaining why nothing changes.
//!
//! Both are plain functions. They hold no state and can be called from any
//! UI layer that can tell them what is active and what is under the pointer;
//! tracking those two items across pointer events is the job of
//! `kanban_event_state`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kanban_board::{Board, CardId, Column};
//! use kanban_reorder::{ActiveItem, NoOp, TargetItem, commit, preview};
//!
//! let board = Board::from_columns([
//!     Column::new("Planned", ["a", "b"]),
//!     Column::new("Work", ["c"]),
//!     Column::new("Done", [] as [&str; 0]),
//! ]);
//!
//! let active = ActiveItem::card("a", "Planned");
//! let target = TargetItem::over_column("Done");
//!
//! // While dragging, render the preview; the board itself is untouched.
//! let view = preview(&board, &active, &target);
//! assert_eq!(view.columns()[2].cards, [CardId::from("a")]);
//! assert!(board.columns()[2].cards.is_empty());
//!
//! // On drop, commit.
//! let next = commit(&board, &active, &target).unwrap();
//! assert_eq!(next.columns()[0].cards, [CardId::from("b")]);
//! assert_eq!(next.columns()[2].cards, [CardId::from("a")]);
//!
//! // Dropping a card onto itself changes nothing.
//! let same = TargetItem::over_card("a", "Planned");
//! assert_eq!(commit(&board, &active, &same), Err(NoOp::SelfTarget));
//! ```
//!
//! ## Placement rules
//!
//! - Card dropped on another column: appended to the end.
//! - Card dropped on a card in another column: inserted right after it.
//! - Card dropped on a card in its own column: moved to that card's index.
//! - Column dropped on another column: moved to that column's index.
//!
//! Moves are stable: remove, then insert ([`move_item`]). All other items keep
//! their relative order.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`ActiveItem`] and [`TargetItem`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod commit;
mod item;
mod list;
mod preview;

pub use commit::{NoOp, commit};
pub use item::{ActiveItem, TargetItem};
pub use list::move_item;
pub use preview::{preview, preview_column};
