// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Board, Column};

impl Board {
    /// The board a fresh session starts with.
    ///
    /// Three columns: `Planned`, `In Work`, and an empty `Complete`.
    #[must_use]
    pub fn seed() -> Self {
        Self::from_columns([
            Column::new(
                "Planned",
                ["Eat soup", "Write a book", "asd1", "asd2", "asd3"],
            ),
            Column::new("In Work", ["Cook", "Cook 1", "Cook 2"]),
            Column::new("Complete", [] as [&str; 0]),
        ])
    }
}
