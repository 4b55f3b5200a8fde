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

use crate::index::CityIndex;
use num_traits::PrimInt;

/// A complete tour of a TSP instance together with its closed-cycle cost.
///
/// The visiting order contains every city of `0..n` exactly once and
/// conventionally starts at city 0; the cycle implicitly closes from the last
/// city back to the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour<T> {
    /// The total cost of this tour including the closing edge.
    cost: T,

    /// The visiting order. `cities[0]` is the start city.
    cities: Vec<CityIndex>,
}

impl<T> Tour<T>
where
    T: PrimInt,
{
    /// Constructs a new `Tour`.
    ///
    /// # Panics
    ///
    /// Panics if `cities` is empty.
    pub fn new(cost: T, cities: Vec<CityIndex>) -> Self {
        assert!(
            !cities.is_empty(),
            "called `Tour::new` with an empty visiting order"
        );

        Self { cost, cities }
    }

    /// Returns the total cost of this tour.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the visiting order of this tour.
    #[inline]
    pub fn cities(&self) -> &[CityIndex] {
        &self.cities
    }

    /// Returns the number of cities in this tour.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the visiting order is a permutation of `0..n`
    /// starting at city 0. Used by tests and validation harnesses.
    pub fn is_valid_permutation(&self) -> bool {
        if !self.cities[0].is_start() {
            return false;
        }

        let n = self.cities.len();
        let mut seen = vec![false; n];
        for city in &self.cities {
            let index = city.get();
            if index >= n || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

impl<T> std::fmt::Display for Tour<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tour(cost: {}, order: [", self.cost)?;
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", city.get())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    #[test]
    fn test_accessors() {
        let tour = Tour::new(80i64, vec![ci(0), ci(1), ci(3), ci(2)]);
        assert_eq!(tour.cost(), 80);
        assert_eq!(tour.num_cities(), 4);
        assert_eq!(tour.cities()[2], ci(3));
    }

    #[test]
    fn test_valid_permutation() {
        let tour = Tour::new(80i64, vec![ci(0), ci(1), ci(3), ci(2)]);
        assert!(tour.is_valid_permutation());
    }

    #[test]
    fn test_invalid_permutations() {
        // Does not start at city 0.
        assert!(!Tour::new(1i64, vec![ci(1), ci(0)]).is_valid_permutation());
        // Duplicate city.
        assert!(!Tour::new(1i64, vec![ci(0), ci(1), ci(1)]).is_valid_permutation());
        // Out-of-range city.
        assert!(!Tour::new(1i64, vec![ci(0), ci(5)]).is_valid_permutation());
    }

    #[test]
    fn test_display() {
        let tour = Tour::new(12i64, vec![ci(0), ci(2), ci(1)]);
        assert_eq!(format!("{}", tour), "Tour(cost: 12, order: [0 2 1])");
    }

    #[test]
    #[should_panic]
    fn test_empty_order_rejected() {
        let _ = Tour::new(0i64, Vec::new());
    }
}
