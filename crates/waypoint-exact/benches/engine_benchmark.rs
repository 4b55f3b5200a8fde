// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use waypoint_exact::branch_bound::BranchBoundSolver;
use waypoint_exact::brute_force::BruteForceSolver;
use waypoint_exact::monitor::NoOpMonitor;
use waypoint_model::matrix::DistanceMatrix;

/// Deterministic dense instance used across both engines.
fn bench_matrix(n: usize) -> DistanceMatrix<i64> {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let cost = if i == j {
                0
            } else {
                ((i * 37 + j * 17) % 50 + 1) as i64
            };
            row.push(cost);
        }
        rows.push(row);
    }
    DistanceMatrix::from_rows(rows)
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_tsp");

    for n in [6usize, 8, 10] {
        let matrix = bench_matrix(n);

        group.bench_with_input(BenchmarkId::new("brute_force", n), &matrix, |b, m| {
            let solver = BruteForceSolver::new();
            b.iter(|| {
                let outcome = solver.solve(black_box(m), &mut NoOpMonitor::new());
                black_box(outcome.best_tour().cost())
            });
        });

        group.bench_with_input(BenchmarkId::new("branch_bound", n), &matrix, |b, m| {
            let solver = BranchBoundSolver::new();
            b.iter(|| {
                let outcome = solver.solve(black_box(m), &mut NoOpMonitor::new());
                black_box(outcome.best_tour().cost())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
