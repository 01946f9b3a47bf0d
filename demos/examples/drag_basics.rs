// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag basics.
//!
//! Drive a few pointer gestures over the seed board with `kanban_event_state`
//! and print the board after each one.
//!
//! Run:
//! - `cargo run -p kanban_demos --example drag_basics`
//! - `RUST_LOG=trace cargo run -p kanban_demos --example drag_basics`

use kanban_board::Board;
use kanban_demos::{init_tracing, render};
use kanban_event_state::{Descriptor, DragController};
use kurbo::Point;

fn main() {
    init_tracing();

    let mut kanban = DragController::new(Board::seed());
    println!("Initial board:\n{}", render(kanban.board()));

    // A click on a card: released before the pointer travels far enough.
    kanban.pointer_down(Point::new(10.0, 10.0), Descriptor::card("Cook", "In Work"));
    let _ = kanban.pointer_move(Point::new(12.0, 12.0), None);
    let click = kanban.pointer_up(Point::new(12.0, 12.0), None);
    println!("Click on Cook: {click:?}");

    // Drag "Eat soup" into the empty Complete column.
    kanban.pointer_down(Point::new(10.0, 10.0), Descriptor::card("Eat soup", "Planned"));
    for x in [20.0, 120.0, 220.0] {
        if let Err(err) = kanban.pointer_move(Point::new(x, 10.0), None) {
            println!("  move rejected: {err}");
        }
    }
    // While hovering, the preview shows the card in its new home.
    let complete = Descriptor::drop_zone("Complete");
    let _ = kanban.pointer_move(Point::new(420.0, 10.0), Some(complete.clone()));
    println!("Preview while hovering Complete:\n{}", render(&kanban.preview()));
    let outcome = kanban.pointer_up(Point::new(420.0, 10.0), Some(complete));
    println!("Drop on Complete: {outcome:?}\n{}", render(kanban.board()));

    // Drag "Cook 2" over "Write a book": it lands right after it.
    kanban.pointer_down(Point::new(220.0, 80.0), Descriptor::card("Cook 2", "In Work"));
    let book = Descriptor::card("Write a book", "Planned");
    let _ = kanban.pointer_move(Point::new(20.0, 40.0), Some(book.clone()));
    let outcome = kanban.pointer_up(Point::new(20.0, 40.0), Some(book));
    println!("Drop on Write a book: {outcome:?}\n{}", render(kanban.board()));

    // Move the Complete column to the front.
    kanban.pointer_down(Point::new(420.0, 0.0), Descriptor::column("Complete"));
    let planned = Descriptor::column("Planned");
    let _ = kanban.pointer_move(Point::new(10.0, 0.0), Some(planned.clone()));
    let outcome = kanban.pointer_up(Point::new(10.0, 0.0), Some(planned));
    println!("Column drop: {outcome:?}\n{}", render(kanban.board()));

    // Start a drag and abort it: nothing changes.
    kanban.pointer_down(Point::new(10.0, 10.0), Descriptor::card("asd1", "Planned"));
    let in_work = Descriptor::drop_zone("In Work");
    let _ = kanban.pointer_move(Point::new(300.0, 10.0), Some(in_work));
    kanban.pointer_cancel();
    println!(
        "After cancel (revision {}):\n{}",
        kanban.store().revision(),
        render(kanban.board())
    );
}
