// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kanban_board::{Board, Column};
use kanban_reorder::{ActiveItem, TargetItem, commit, preview, preview_column};

/// `columns` columns of `per_column` cards each; card ids are `c{column}-{index}`.
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

fn bench_commit_card(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/commit_card");

    // Worst case for the lookups: first card of the first column, dropped
    // after the last card of the last column.
    for per_column in [16usize, 128, 1_024, 8_192] {
        let columns = 8;
        let board = board(columns, per_column);
        let active = ActiveItem::card("c0-0", "col0");
        let last = columns - 1;
        let across = TargetItem::over_card(
            format!("c{last}-{}", per_column - 1),
            format!("col{last}"),
        );
        let within = TargetItem::over_card(format!("c0-{}", per_column - 1), "col0");
        group.throughput(Throughput::Elements((columns * per_column) as u64));

        group.bench_with_input(
            BenchmarkId::new("across_columns", per_column),
            &board,
            |b, board| {
                b.iter(|| black_box(commit(board, &active, &across)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("within_column", per_column),
            &board,
            |b, board| {
                b.iter(|| black_box(commit(board, &active, &within)));
            },
        );

        group.bench_with_input(BenchmarkId::new("self_target", per_column), &board, |b, board| {
            let target = TargetItem::over_card("c0-0", "col0");
            b.iter(|| black_box(commit(board, &active, &target)));
        });
    }

    group.finish();
}

fn bench_commit_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/commit_column");

    for columns in [4usize, 32, 256] {
        let board = board(columns, 16);
        let active = ActiveItem::column("col0");
        let target = TargetItem::over_column(format!("col{}", columns - 1));
        group.throughput(Throughput::Elements(columns as u64));

        group.bench_with_input(BenchmarkId::new("first_to_last", columns), &board, |b, board| {
            b.iter(|| black_box(commit(board, &active, &target)));
        });
    }

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/preview");

    // The preview runs on every pointer move; compare rebuilding the whole
    // board with deriving only the column a view is about to draw.
    for per_column in [16usize, 128, 1_024] {
        let columns = 8;
        let board = board(columns, per_column);
        let active = ActiveItem::card("c0-0", "col0");
        let target = TargetItem::over_column("col3");
        group.throughput(Throughput::Elements((columns * per_column) as u64));

        group.bench_with_input(BenchmarkId::new("whole_board", per_column), &board, |b, board| {
            b.iter(|| black_box(preview(board, &active, &target)));
        });

        group.bench_with_input(
            BenchmarkId::new("untouched_column", per_column),
            &board,
            |b, board| {
                let column = &board.columns()[5];
                b.iter(|| black_box(preview_column(column, &active, &target)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_commit_card, bench_commit_column, bench_preview);
criterion_main!(benches);
