// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a JSON drag script.
//!
//! Reads a script of drag events (see `demos/scripts/move_cards.json`),
//! replays it against a `DragController`, and prints the board after every
//! step.
//!
//! Run:
//! - `cargo run -p kanban_demos --example replay_script`
//! - `cargo run -p kanban_demos --example replay_script -- path/to/script.json`

use kanban_demos::{Script, init_tracing, render, replay};

const BUNDLED: &str = include_str!("../scripts/move_cards.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUNDLED.to_owned(),
    };
    let script = Script::from_json(&json)?;
    let mut kanban = script.controller();
    println!("Initial board:\n{}", render(kanban.board()));

    for (index, step) in script.steps.iter().enumerate() {
        let report = replay(&mut kanban, core::slice::from_ref(step));
        println!("#{index} {step:?}\n  -> {report:?}");
        println!("{}", render(&kanban.preview()));
    }

    tracing::info!(
        steps = script.steps.len(),
        revision = kanban.store().revision(),
        "replay finished"
    );
    println!(
        "Final board (revision {}):\n{}",
        kanban.store().revision(),
        render(kanban.board())
    );
    Ok(())
}
