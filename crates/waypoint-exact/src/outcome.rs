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

use crate::stats::SearchStatistics;
use num_traits::PrimInt;
use waypoint_model::tour::Tour;

/// Identifies which exact engine produced an outcome. The identifier string
/// is stable and appears verbatim in the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exhaustive permutation enumeration.
    BruteForce,
    /// Depth-first branch-and-bound with the reduced-cost lower bound.
    BranchBound,
}

impl Algorithm {
    /// Returns the stable identifier used in reports and the results log.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "BRUTE_FORCE",
            Algorithm::BranchBound => "BRANCH_BOUND",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Result of an exact engine after termination.
///
/// Both engines run to completion on every valid instance (any matrix with
/// `n >= 1` admits at least one tour), so an outcome always carries the true
/// optimum. The outcome is handed to the caller read-only; only the owning
/// engine ever mutated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    algorithm: Algorithm,
    best: Tour<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PrimInt,
{
    #[inline]
    pub fn new(algorithm: Algorithm, best: Tour<T>, statistics: SearchStatistics) -> Self {
        Self {
            algorithm,
            best,
            statistics,
        }
    }

    /// Returns the engine that produced this outcome.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the optimal tour found by the engine.
    #[inline]
    pub fn best_tour(&self) -> &Tour<T> {
        &self.best
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchOutcome(algorithm: {}, best: {}, nodes_explored: {}, nodes_pruned: {})",
            self.algorithm,
            self.best,
            self.statistics.nodes_explored,
            self.statistics.nodes_pruned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_model::index::CityIndex;

    #[test]
    fn test_algorithm_identifiers_are_stable() {
        assert_eq!(Algorithm::BruteForce.identifier(), "BRUTE_FORCE");
        assert_eq!(Algorithm::BranchBound.identifier(), "BRANCH_BOUND");
        assert_eq!(format!("{}", Algorithm::BruteForce), "BRUTE_FORCE");
    }

    #[test]
    fn test_outcome_accessors() {
        let tour = Tour::new(42i64, vec![CityIndex::new(0), CityIndex::new(1)]);
        let outcome = SearchOutcome::new(
            Algorithm::BranchBound,
            tour.clone(),
            SearchStatistics::default(),
        );

        assert_eq!(outcome.algorithm(), Algorithm::BranchBound);
        assert_eq!(outcome.best_tour(), &tour);
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }
}
