// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Kanban demos.
//!
//! - [`render`]: draw a board as plain-text columns.
//! - [`Script`]: a JSON gesture script (optional seed board, optional
//!   activation constraint, and a list of drag events) and [`replay`] to run
//!   it against a [`DragController`].
//! - [`init_tracing`]: install a `tracing-subscriber` formatter so the core
//!   crates' logs are visible.

use std::fmt::Write as _;

use kanban_board::Board;
use kanban_event_state::{
    ActivationConstraint, DragController, DragEndEvent, DragError, DragOverEvent, DragStartEvent,
    DropOutcome,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// One drag event in a script.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Step {
    /// Drag activated.
    Start(DragStartEvent),
    /// Pointer hovering.
    Over(DragOverEvent),
    /// Pointer released.
    End(DragEndEvent),
    /// Gesture aborted.
    Cancel,
}

/// A gesture script.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Board to start from; the seed board when absent.
    pub board: Option<Board>,
    /// Activation rule for pointer input.
    pub constraint: ActivationConstraint,
    /// Events, replayed in order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds the controller the script starts from.
    pub fn controller(&self) -> DragController {
        let board = self.board.clone().unwrap_or_else(Board::seed);
        DragController::with_constraint(board, self.constraint)
    }
}

/// What one replayed step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepReport {
    /// The event was accepted.
    Accepted,
    /// The event was ignored.
    Rejected(DragError),
    /// A drag ended.
    Dropped(DropOutcome),
}

/// Replays `steps` against `controller`, returning one report per step.
pub fn replay(controller: &mut DragController, steps: &[Step]) -> Vec<StepReport> {
    steps
        .iter()
        .map(|step| match step {
            Step::Start(event) => report(controller.on_drag_start(event)),
            Step::Over(event) => report(controller.on_drag_over(event)),
            Step::End(event) => StepReport::Dropped(controller.on_drag_end(event)),
            Step::Cancel => {
                controller.on_drag_cancel();
                StepReport::Accepted
            }
        })
        .collect()
}

fn report(result: Result<(), DragError>) -> StepReport {
    match result {
        Ok(()) => StepReport::Accepted,
        Err(err) => StepReport::Rejected(err),
    }
}

/// Renders `board` as one line per column: `Planned | a, b`.
pub fn render(board: &Board) -> String {
    let width = board.iter().map(|c| c.id.as_str().len()).max().unwrap_or(0);
    let mut out = String::new();
    for column in board {
        let cards: Vec<&str> = column.cards.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(out, "{:<width$} | {}", column.id.as_str(), cards.join(", "));
    }
    out
}

/// Installs a formatting subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kanban_event_state=debug,kanban_reorder=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_reorder::NoOp;

    const SCRIPT: &str = include_str!("../scripts/move_cards.json");

    #[test]
    fn bundled_script_replays() {
        let script = Script::from_json(SCRIPT).unwrap();
        let mut controller = script.controller();
        let reports = replay(&mut controller, &script.steps);

        assert!(reports.contains(&StepReport::Dropped(DropOutcome::Committed { revision: 1 })));
        assert!(reports.contains(&StepReport::Dropped(DropOutcome::Unchanged(
            NoOp::SelfTarget
        ))));
        assert_eq!(
            render(controller.board()),
            "Planned | b\nWork    | \nDone    | a, c\n"
        );
    }

    #[test]
    fn render_pads_column_names() {
        let board = Board::seed();
        let text = render(&board);
        assert!(text.starts_with("Planned  | Eat soup, Write a book"));
        assert!(text.ends_with("Complete | \n"));
    }
}
