// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kanban_board::{Board, Column};
use kanban_event_state::{Descriptor, DragController, DragEndEvent, DragOverEvent, DragStartEvent};

fn board(columns: usize, per_column: usize) -> Board {
    (0..columns)
        .map(|col| {
            Column::new(
                format!("col{col}"),
                (0..per_column).map(|i| format!("c{col}-{i}")),
            )
        })
        .collect()
}

fn bench_full_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/full");

    // One start, `hovers` over events alternating between two columns, then a
    // drop: models a card dragged back and forth before release.
    for hovers in [1usize, 16, 128] {
        let columns = 4;
        let board = board(columns, 256);
        let active = Descriptor::card("c0-10", "col0");
        let zones = [Descriptor::drop_zone("col1"), Descriptor::drop_zone("col2")];
        group.throughput(Throughput::Elements(hovers as u64));

        group.bench_with_input(BenchmarkId::new("hover_then_drop", hovers), &board, |b, board| {
            b.iter_batched(
                || DragController::new(board.clone()),
                |mut kanban| {
                    let _ = kanban.on_drag_start(&DragStartEvent {
                        active: active.clone(),
                    });
                    for i in 0..hovers {
                        let _ = kanban.on_drag_over(&DragOverEvent {
                            active: active.clone(),
                            over: Some(zones[i % 2].clone()),
                        });
                    }
                    let outcome = kanban.on_drag_end(&DragEndEvent {
                        active: active.clone(),
                        over: Some(zones[(hovers - 1) % 2].clone()),
                    });
                    black_box((outcome, kanban));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_render_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/preview");

    for per_column in [16usize, 256, 2_048] {
        let mut kanban = DragController::new(board(4, per_column));
        let active = Descriptor::card("c0-0", "col0");
        let _ = kanban.on_drag_start(&DragStartEvent {
            active: active.clone(),
        });
        let _ = kanban.on_drag_over(&DragOverEvent {
            active,
            over: Some(Descriptor::card("c3-0", "col3")),
        });
        group.throughput(Throughput::Elements((4 * per_column) as u64));

        group.bench_function(BenchmarkId::new("board", per_column), |b| {
            b.iter(|| black_box(kanban.preview()));
        });

        let column = "col1".into();
        group.bench_function(BenchmarkId::new("column", per_column), |b| {
            b.iter(|| black_box(kanban.column_preview(&column)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_gesture, bench_render_preview);
criterion_main!(benches);
