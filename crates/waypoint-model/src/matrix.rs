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

//! Distance matrix for the Traveling Salesman Problem.
//!
//! This module provides `DistanceMatrix`, the immutable cost table every
//! search engine reads from, together with full-tour cost evaluation.
//!
//! The matrix is an `n x n` table of non-negative integer edge costs. It is
//! not required to be symmetric, so asymmetric instances are first-class.
//! Diagonal entries are present but semantically unused. Data is stored in a
//! flattened row-major vector for cache locality; the matrix is never mutated
//! after construction, which makes sharing it across engines (or threads)
//! trivially safe.
//!
//! Edge access comes in a checked variant and an `*_unchecked` variant for
//! hot search loops. Unchecked accessors are debug-asserted; in release
//! builds the caller must uphold the bounds contract.

use crate::index::CityIndex;
use num_traits::PrimInt;

/// Computes the flattened index of an edge in the cost table.
#[inline(always)]
fn flatten_index(num_cities: usize, from: CityIndex, to: CityIndex) -> usize {
    from.get() * num_cities + to.get()
}

/// The error returned by [`DistanceMatrix::tour_cost`] when the supplied
/// sequence does not cover every city exactly once by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourLengthError {
    /// The number of cities in the instance.
    pub expected: usize,
    /// The length of the sequence that was supplied.
    pub actual: usize,
}

impl std::fmt::Display for TourLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tour length {} does not match the instance size {}",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for TourLengthError {}

/// An immutable `n x n` table of edge costs for a TSP instance.
///
/// Invariants:
/// - `costs.len() == num_cities * num_cities`
/// - `num_cities >= 1`
/// - every entry is non-negative
///
/// The matrix is constructed once (directly or through
/// `waypoint_model::loading::MatrixLoader`) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<T> {
    costs: Vec<T>, // len = num_cities * num_cities
    num_cities: usize,
}

impl<T> DistanceMatrix<T>
where
    T: PrimInt,
{
    /// Constructs a new `DistanceMatrix` from a flattened row-major cost
    /// vector.
    ///
    /// # Panics
    ///
    /// Panics if `num_cities` is zero or `costs.len() != num_cities^2`.
    pub fn new(num_cities: usize, costs: Vec<T>) -> Self {
        assert!(
            num_cities >= 1,
            "called `DistanceMatrix::new` with zero cities"
        );
        assert_eq!(
            costs.len(),
            num_cities * num_cities,
            "called `DistanceMatrix::new` with inconsistent cost vector: the len is {} but {} entries are required",
            costs.len(),
            num_cities * num_cities
        );

        Self { costs, num_cities }
    }

    /// Constructs a new `DistanceMatrix` from nested rows.
    ///
    /// Mainly a convenience for tests and embedded instances; file input goes
    /// through `MatrixLoader`.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square `n x n` table with `n >= 1`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let num_cities = rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                num_cities,
                "called `DistanceMatrix::from_rows` with ragged row {}: the len is {} but {} entries are required",
                i,
                row.len(),
                num_cities
            );
        }

        let costs = rows.into_iter().flatten().collect();
        Self::new(num_cities, costs)
    }

    /// Returns the number of cities in this instance.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns the cost of the directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> T {
        assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `DistanceMatrix::cost` with city index out of bounds: the len is {} but the indices are {} and {}",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.costs[flatten_index(self.num_cities, from, to)]
    }

    /// Returns the cost of the directed edge `from -> to` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that both indices are within
    /// `0..num_cities`.
    #[inline(always)]
    pub unsafe fn cost_unchecked(&self, from: CityIndex, to: CityIndex) -> T {
        let flat_index = flatten_index(self.num_cities, from, to);
        debug_assert!(
            flat_index < self.costs.len(),
            "called `DistanceMatrix::cost_unchecked` with flat index out of bounds: the len is {} but the index is {}",
            self.costs.len(),
            flat_index
        );

        unsafe { *self.costs.get_unchecked(flat_index) }
    }

    /// Computes the cost of a complete tour: the sum of all consecutive
    /// edges plus the closing edge from the last city back to the first.
    ///
    /// Pure: no side effects, a function of the matrix and the sequence
    /// only. The sequence must contain exactly `num_cities` entries;
    /// callers are trusted to supply a permutation, partial prefixes are a
    /// concern of the search engines.
    ///
    /// Additions saturate at `T::max_value()` so a pathological instance
    /// cannot overflow into a spuriously cheap tour.
    pub fn tour_cost(&self, path: &[CityIndex]) -> Result<T, TourLengthError> {
        if path.len() != self.num_cities {
            return Err(TourLengthError {
                expected: self.num_cities,
                actual: path.len(),
            });
        }

        let mut total = T::zero();
        for window in path.windows(2) {
            total = total.saturating_add(self.cost(window[0], window[1]));
        }
        total = total.saturating_add(self.cost(path[self.num_cities - 1], path[0]));

        Ok(total)
    }

    /// Returns the flattened row-major cost table.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_edge_access_row_major() {
        let m = four_city();
        assert_eq!(m.num_cities(), 4);
        assert_eq!(m.cost(ci(0), ci(1)), 10);
        assert_eq!(m.cost(ci(1), ci(3)), 25);
        assert_eq!(m.cost(ci(3), ci(2)), 30);
        assert_eq!(unsafe { m.cost_unchecked(ci(2), ci(0)) }, 15);
    }

    #[test]
    fn test_tour_cost_closes_the_cycle() {
        let m = four_city();
        let path = [ci(0), ci(1), ci(3), ci(2)];
        // 10 + 25 + 30 + 15
        assert_eq!(m.tour_cost(&path), Ok(80));
    }

    #[test]
    fn test_tour_cost_asymmetric_direction_matters() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 1, 10], vec![10, 0, 1], vec![1, 10, 0]]);
        assert_eq!(m.tour_cost(&[ci(0), ci(1), ci(2)]), Ok(3));
        assert_eq!(m.tour_cost(&[ci(0), ci(2), ci(1)]), Ok(30));
    }

    #[test]
    fn test_tour_cost_rejects_wrong_length() {
        let m = four_city();
        let err = m.tour_cost(&[ci(0), ci(1)]).unwrap_err();
        assert_eq!(
            err,
            TourLengthError {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_single_city_tour_uses_diagonal() {
        let m = DistanceMatrix::from_rows(vec![vec![0i64]]);
        assert_eq!(m.tour_cost(&[ci(0)]), Ok(0));
    }

    #[test]
    #[should_panic]
    fn test_from_rows_rejects_ragged_table() {
        let _ = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_zero_cities() {
        let _: DistanceMatrix<i64> = DistanceMatrix::new(0, Vec::new());
    }
}
