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

//! Branch-and-bound search for the TSP.
//!
//! This engine explores partial tours depth-first over an explicit LIFO
//! stack and discards any partial tour whose lower bound proves it cannot
//! strictly improve on the incumbent. The bound is the reduced-cost bound:
//! the accumulated prefix cost plus, for every city that still needs an
//! outgoing edge (every unvisited city and the current tail of the prefix),
//! the cheapest edge it could still use. Every remaining city must
//! eventually leave through at least one edge no cheaper than its cheapest
//! available one, so the bound never overestimates the best completion and
//! pruning on it never discards the optimum.
//!
//! Tied nodes are pruned: a child whose bound equals the incumbent cost is
//! discarded, because its descendants can at best tie but never beat the
//! incumbent, and the engine reports one best cost rather than all optimal
//! tours.
//!
//! Each stack entry owns its full path and visited set. The per-node copy
//! is deliberate: it keeps the stack discipline trivially correct and the
//! frontier inspectable; the result contract is equivalence, not memory
//! strategy. Worst case matches exhaustive search; typical instances prune
//! the vast majority of the tree.

use crate::{
    monitor::SearchMonitor,
    outcome::{Algorithm, SearchOutcome},
    stats::SearchStatistics,
};
use fixedbitset::FixedBitSet;
use num_traits::PrimInt;
use waypoint_model::{index::CityIndex, matrix::DistanceMatrix, tour::Tour};

/// Depth-first branch-and-bound solver with the reduced-cost lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchBoundSolver;

impl BranchBoundSolver {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the branch-and-bound search over the given matrix.
    pub fn solve<T, M>(&self, matrix: &DistanceMatrix<T>, monitor: &mut M) -> SearchOutcome<T>
    where
        T: PrimInt,
        M: SearchMonitor<T>,
    {
        let session = BranchBoundSession::new(matrix, monitor);
        session.run()
    }
}

/// A partial tour on the search stack.
///
/// Invariants:
/// - `path[0]` is the start city and `path.len() == level`.
/// - `visited` marks exactly the cities in `path`.
/// - `cost` is the exact sum of the edges along `path`.
/// - `bound` never exceeds the cost of any complete tour extending `path`.
#[derive(Debug, Clone)]
struct SearchNode<T> {
    path: Vec<CityIndex>,
    visited: FixedBitSet,
    cost: T,
    level: usize,
    bound: T,
}

impl<T> SearchNode<T>
where
    T: PrimInt,
{
    /// The root node: the tour prefix consisting of the start city alone.
    fn root(num_cities: usize) -> Self {
        let mut visited = FixedBitSet::with_capacity(num_cities);
        visited.insert(CityIndex::START.get());

        let mut path = Vec::with_capacity(num_cities);
        path.push(CityIndex::START);

        Self {
            path,
            visited,
            cost: T::zero(),
            level: 1,
            bound: T::zero(),
        }
    }

    /// The last city of the prefix.
    #[inline]
    fn tail(&self) -> CityIndex {
        self.path[self.level - 1]
    }
}

/// Per-run state of a branch-and-bound search.
struct BranchBoundSession<'a, T, M> {
    matrix: &'a DistanceMatrix<T>,
    monitor: &'a mut M,
    stack: Vec<SearchNode<T>>,
    stats: SearchStatistics,
    best_cost: T,
    best_path: Vec<CityIndex>,
}

impl<'a, T, M> BranchBoundSession<'a, T, M>
where
    T: PrimInt,
    M: SearchMonitor<T>,
{
    fn new(matrix: &'a DistanceMatrix<T>, monitor: &'a mut M) -> Self {
        Self {
            matrix,
            monitor,
            stack: Vec::new(),
            stats: SearchStatistics::default(),
            best_cost: T::max_value(),
            best_path: Vec::new(),
        }
    }

    fn run(mut self) -> SearchOutcome<T> {
        let num_cities = self.matrix.num_cities();
        self.monitor.on_enter_search(num_cities);

        let start_time = std::time::Instant::now();

        let mut root = SearchNode::root(num_cities);
        root.bound = reduced_cost_bound(self.matrix, &root.visited, root.tail(), root.cost);
        self.stack.push(root);

        while let Some(node) = self.stack.pop() {
            self.stats.on_node_explored();
            self.monitor.on_node(&self.stats);

            if node.level == num_cities {
                self.close_tour(&node);
                continue;
            }

            self.expand(&node);
        }

        self.stats.set_total_time(start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        debug_assert!(
            !self.best_path.is_empty(),
            "the first full tour can never be pruned against the infinite sentinel"
        );

        let tour = Tour::new(self.best_cost, self.best_path);
        SearchOutcome::new(Algorithm::BranchBound, tour, self.stats)
    }

    /// Handles a leaf: all cities are placed, close the cycle back to the
    /// start and compare against the incumbent.
    fn close_tour(&mut self, node: &SearchNode<T>) {
        let closing = self.matrix.cost(node.tail(), CityIndex::START);
        let final_cost = node.cost.saturating_add(closing);

        // First tour is always accepted, see the strict-improvement note in
        // the brute-force engine.
        if final_cost < self.best_cost || self.best_path.is_empty() {
            self.best_cost = final_cost;
            self.best_path.clear();
            self.best_path.extend_from_slice(&node.path);
            self.monitor.on_improvement(final_cost, &self.stats);
        }
    }

    /// Generates all children of an expansion point. A child is pushed only
    /// if its bound is strictly below the incumbent cost at this very
    /// moment; everything else is counted as pruned. Until a first tour is
    /// on record nothing is pruned: on a saturated instance every bound ties
    /// the `T::max_value()` sentinel, and pruning against the sentinel would
    /// drain the stack without ever reaching a leaf.
    fn expand(&mut self, node: &SearchNode<T>) {
        let num_cities = self.matrix.num_cities();
        let tail = node.tail();

        for next in 1..num_cities {
            if node.visited.contains(next) {
                continue;
            }
            let next_city = CityIndex::new(next);

            let mut child = node.clone();
            child.path.push(next_city);
            child.visited.insert(next);
            child.level = node.level + 1;
            child.cost = node
                .cost
                .saturating_add(self.matrix.cost(tail, next_city));
            child.bound = reduced_cost_bound(self.matrix, &child.visited, next_city, child.cost);

            if child.bound < self.best_cost || self.best_path.is_empty() {
                self.stack.push(child);
            } else {
                self.stats.on_node_pruned();
            }
        }
    }
}

/// Computes the reduced-cost lower bound for a partial tour.
///
/// Starting from the accumulated prefix cost, adds for every "open" city
/// (unvisited, or the current tail `last` which still needs its outgoing
/// edge) the cheapest edge it could still take: any edge to an unvisited
/// city or back to the start. Additions saturate so the bound degrades
/// gracefully at `T::max_value()` instead of wrapping.
pub(crate) fn reduced_cost_bound<T>(
    matrix: &DistanceMatrix<T>,
    visited: &FixedBitSet,
    last: CityIndex,
    cost: T,
) -> T
where
    T: PrimInt,
{
    let num_cities = matrix.num_cities();
    let mut bound = cost;

    for i in 0..num_cities {
        if visited.contains(i) && i != last.get() {
            continue;
        }
        let from = CityIndex::new(i);

        let mut min_edge: Option<T> = None;
        for j in 0..num_cities {
            if j == i {
                continue;
            }
            if !visited.contains(j) || j == CityIndex::START.get() {
                // Bounds hold by construction of the loops.
                let edge = unsafe { matrix.cost_unchecked(from, CityIndex::new(j)) };
                min_edge = Some(match min_edge {
                    Some(current) if current <= edge => current,
                    _ => edge,
                });
            }
        }

        if let Some(edge) = min_edge {
            bound = bound.saturating_add(edge);
        }
    }

    bound
}
