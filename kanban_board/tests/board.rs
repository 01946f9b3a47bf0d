// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `kanban_board` crate.
//!
//! These exercise construction, validation, and the replace-only store.

use kanban_board::{Board, BoardError, BoardStore, CardId, Column, ColumnId};

#[test]
fn ids_compare_by_string_value() {
    let a = CardId::from("a");
    assert_eq!(a, CardId::new(String::from("a")));
    assert_eq!(a.as_str(), "a");
    assert_eq!(a.to_string(), "a");
    assert!(ColumnId::default().is_empty());
}

#[test]
fn board_iterates_in_display_order() {
    let board: Board = ["Planned", "Work", "Done"]
        .into_iter()
        .map(|id| Column::new(id, [] as [&str; 0]))
        .collect();

    let ids: Vec<&str> = board.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["Planned", "Work", "Done"]);

    let again: Vec<&str> = (&board).into_iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, again);
}

#[test]
fn try_from_columns_reports_first_violation() {
    let result = Board::try_from_columns([
        Column::new("A", ["x", "x"]),
        Column::new("A", [] as [&str; 0]),
    ]);
    assert_eq!(
        result,
        Err(BoardError::DuplicateCard {
            card: "x".into(),
            column: "A".into(),
        })
    );
}

#[test]
fn error_messages_name_the_offender() {
    let err = BoardError::DuplicateColumn {
        column: "Done".into(),
    };
    assert_eq!(err.to_string(), "duplicate column id: Done");
}

#[test]
fn store_revision_counts_every_replacement() {
    let mut store = BoardStore::from(Board::seed());
    store.replace(Board::seed());
    store.replace(Board::seed());

    assert_eq!(store.revision(), 2);
    assert_eq!(store.into_inner(), Board::seed());
}

#[cfg(feature = "serde")]
#[test]
fn board_round_trips_through_json() {
    let json = r#"[{"id":"Planned","cards":["a","b"]},{"id":"Done","cards":[]}]"#;
    let board: Board = serde_json::from_str(json).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board.columns()[0].cards, vec![CardId::from("a"), "b".into()]);
    assert_eq!(serde_json::to_string(&board).unwrap(), json);
}
