//! Benchmarks for the backtracking solver.
//!
//! Measures the full solve of a published puzzle and of the all-empty grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use soluko_core::DigitGrid;
use soluko_solver::solve;

const CLASSIC_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_solve_classic(c: &mut Criterion) {
    let puzzle: DigitGrid = CLASSIC_PUZZLE.parse().unwrap();
    c.bench_function("solve_classic", |b| {
        b.iter(|| solve(hint::black_box(&puzzle)));
    });
}

fn bench_solve_empty(c: &mut Criterion) {
    let empty = DigitGrid::new();
    c.bench_function("solve_empty", |b| {
        b.iter(|| solve(hint::black_box(&empty)));
    });
}

criterion_group!(benches, bench_solve_classic, bench_solve_empty);
criterion_main!(benches);
