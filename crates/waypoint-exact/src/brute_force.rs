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

//! Exhaustive search for the TSP: the correctness baseline.
//!
//! City 0 is fixed as the tour start, which removes the `n` equivalent
//! rotations of every cyclic tour. The engine then enumerates all `(n-1)!`
//! orderings of the remaining cities with an in-place swap-based recursive
//! generator: to generate the permutations of the suffix starting at index
//! `k`, each index `i >= k` is swapped into position `k`, the suffix `k+1`
//! is recursed, and the swap is undone before the next `i`. No array is
//! copied per step, so the working space beyond the output is O(n).
//!
//! Every complete permutation counts as one explored node; this engine has
//! no pruning and its pruned counter is always zero. The returned outcome
//! always reflects the global optimum.

use crate::{
    monitor::SearchMonitor,
    outcome::{Algorithm, SearchOutcome},
    stats::SearchStatistics,
};
use num_traits::PrimInt;
use waypoint_model::{index::CityIndex, matrix::DistanceMatrix, tour::Tour};

/// Exhaustive permutation-enumeration solver.
///
/// Complexity: O(n * (n-1)!) time, O(n) working space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the exhaustive search over the given matrix.
    ///
    /// Timing is measured from just before permutation generation begins to
    /// just after it ends.
    pub fn solve<T, M>(&self, matrix: &DistanceMatrix<T>, monitor: &mut M) -> SearchOutcome<T>
    where
        T: PrimInt,
        M: SearchMonitor<T>,
    {
        let session = BruteForceSession::new(matrix, monitor);
        session.run()
    }
}

/// Per-run state of an exhaustive search.
struct BruteForceSession<'a, T, M> {
    matrix: &'a DistanceMatrix<T>,
    monitor: &'a mut M,
    stats: SearchStatistics,
    best_cost: T,
    best_path: Vec<CityIndex>,
    /// Scratch buffer holding the full candidate tour; slot 0 is always the
    /// start city, the tail is overwritten per permutation.
    full_path: Vec<CityIndex>,
}

impl<'a, T, M> BruteForceSession<'a, T, M>
where
    T: PrimInt,
    M: SearchMonitor<T>,
{
    fn new(matrix: &'a DistanceMatrix<T>, monitor: &'a mut M) -> Self {
        let num_cities = matrix.num_cities();
        Self {
            matrix,
            monitor,
            stats: SearchStatistics::default(),
            best_cost: T::max_value(),
            best_path: Vec::new(),
            full_path: vec![CityIndex::START; num_cities],
        }
    }

    fn run(mut self) -> SearchOutcome<T> {
        let num_cities = self.matrix.num_cities();
        self.monitor.on_enter_search(num_cities);

        let mut remaining: Vec<CityIndex> = (1..num_cities).map(CityIndex::new).collect();

        let start_time = std::time::Instant::now();
        for_each_permutation(&mut remaining, 0, &mut |permutation| {
            self.test_permutation(permutation);
        });
        self.stats.set_total_time(start_time.elapsed());

        self.monitor.on_exit_search(&self.stats);

        debug_assert!(
            !self.best_path.is_empty(),
            "exhaustive search must have evaluated at least one tour"
        );

        let tour = Tour::new(self.best_cost, self.best_path);
        SearchOutcome::new(Algorithm::BruteForce, tour, self.stats)
    }

    /// Evaluates one complete permutation of the non-start cities.
    fn test_permutation(&mut self, permutation: &[CityIndex]) {
        self.full_path[1..].copy_from_slice(permutation);

        let cost = self
            .matrix
            .tour_cost(&self.full_path)
            .expect("scratch path length always matches the instance size");

        self.stats.on_node_explored();

        // The first tour is always accepted: a saturated instance where every
        // tour costs `T::max_value()` must still report a tour.
        if cost < self.best_cost || self.best_path.is_empty() {
            self.best_cost = cost;
            self.best_path.clear();
            self.best_path.extend_from_slice(&self.full_path);
            self.monitor.on_improvement(cost, &self.stats);
        }

        self.monitor.on_node(&self.stats);
    }
}

/// Invokes `f` once for every permutation of `items`, in place.
///
/// Classic swap-based recursion: each call fixes position `k` in turn and
/// restores the buffer before trying the next candidate, so the buffer is
/// back in its original order when the outermost call returns. Every
/// permutation is produced exactly once; an empty slice produces exactly one
/// (empty) permutation, which is what makes the 1-city instance work.
pub(crate) fn for_each_permutation<F>(items: &mut [CityIndex], k: usize, f: &mut F)
where
    F: FnMut(&[CityIndex]),
{
    if k == items.len() {
        f(items);
        return;
    }

    for i in k..items.len() {
        items.swap(k, i);
        for_each_permutation(items, k + 1, f);
        items.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::NoOpMonitor;
    use std::collections::HashSet;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn four_city() -> DistanceMatrix<i64> {
        DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
    }

    fn factorial(n: u64) -> u64 {
        (2..=n).product::<u64>().max(1)
    }

    #[test]
    fn test_four_city_optimum() {
        let matrix = four_city();
        let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

        assert_eq!(outcome.best_tour().cost(), 80);
        assert!(outcome.best_tour().is_valid_permutation());
        assert_eq!(outcome.statistics().nodes_explored, 6); // 3!
        assert_eq!(outcome.statistics().nodes_pruned, 0);
    }

    #[test]
    fn test_single_city_instance() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0i64]]);
        let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

        assert_eq!(outcome.best_tour().cost(), 0);
        assert_eq!(outcome.best_tour().cities(), &[ci(0)]);
        assert_eq!(outcome.statistics().nodes_explored, 1);
    }

    #[test]
    fn test_two_city_instance() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 7], vec![3, 0]]);
        let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

        assert_eq!(outcome.best_tour().cost(), 10);
        assert_eq!(outcome.best_tour().cities(), &[ci(0), ci(1)]);
    }

    #[test]
    fn test_asymmetric_instance_prefers_cheap_direction() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 1, 100],
            vec![100, 0, 1],
            vec![1, 100, 0],
        ]);
        let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

        assert_eq!(outcome.best_tour().cost(), 3);
        assert_eq!(outcome.best_tour().cities(), &[ci(0), ci(1), ci(2)]);
    }

    #[test]
    fn test_permutation_generator_is_exact_and_duplicate_free() {
        for n in 0..=6usize {
            let mut items: Vec<CityIndex> = (1..=n).map(ci).collect();
            let original = items.clone();

            let mut seen: HashSet<Vec<usize>> = HashSet::new();
            let mut count = 0u64;
            for_each_permutation(&mut items, 0, &mut |perm| {
                count += 1;
                seen.insert(perm.iter().map(|c| c.get()).collect());
            });

            assert_eq!(count, factorial(n as u64), "count mismatch for n = {}", n);
            assert_eq!(
                seen.len() as u64,
                factorial(n as u64),
                "duplicates for n = {}",
                n
            );
            assert_eq!(items, original, "buffer not restored for n = {}", n);
        }
    }

    #[test]
    fn test_explored_counter_matches_permutation_count() {
        for n in 1..=6usize {
            let size = n * n;
            let matrix = DistanceMatrix::new(n, vec![1i64; size]);
            let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

            assert_eq!(
                outcome.statistics().nodes_explored,
                factorial(n as u64 - 1),
                "explored mismatch for n = {}",
                n
            );
            assert_eq!(outcome.statistics().nodes_pruned, 0);
        }
    }

    #[test]
    fn test_idempotent_re_solve_same_cost() {
        let matrix = four_city();
        let solver = BruteForceSolver::new();
        let first = solver.solve(&matrix, &mut NoOpMonitor::new());
        let second = solver.solve(&matrix, &mut NoOpMonitor::new());

        assert_eq!(first.best_tour().cost(), second.best_tour().cost());
        assert_eq!(first.statistics().nodes_explored, second.statistics().nodes_explored);
    }

    #[test]
    fn test_reported_cost_is_recomputable() {
        let matrix = four_city();
        let outcome = BruteForceSolver::new().solve(&matrix, &mut NoOpMonitor::new());

        let recomputed = matrix.tour_cost(outcome.best_tour().cities()).unwrap();
        assert_eq!(recomputed, outcome.best_tour().cost());
    }
}
