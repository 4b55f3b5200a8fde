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

//! # Strongly Typed City Indices (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying a city in a TSP instance.
//! Tours, matrices, and search states all index the same city space, so a
//! single index type suffices, but keeping it distinct from raw `usize`
//! prevents accidental mixing with node counters, levels, and other integers
//! that float around a search engine.
//!
//! `CityIndex` compiles down to a plain `usize` (`#[repr(transparent)]`) and
//! costs nothing at runtime.

/// A strongly typed index identifying a city of a TSP instance.
///
/// # Examples
///
/// ```rust
/// use waypoint_model::index::CityIndex;
///
/// let c = CityIndex::new(3);
/// assert_eq!(c.get(), 3);
/// assert_eq!(format!("{}", c), "CityIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityIndex {
    index: usize,
}

impl CityIndex {
    /// The conventional start city of every tour.
    pub const START: CityIndex = CityIndex::new(0);

    /// Creates a new `CityIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.index
    }

    /// Returns `true` if this is the conventional start city (city 0).
    #[inline(always)]
    pub const fn is_start(self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Display for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CityIndex({})", self.index)
    }
}

impl std::fmt::Debug for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CityIndex({})", self.index)
    }
}

impl From<usize> for CityIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<CityIndex> for usize {
    #[inline(always)]
    fn from(index: CityIndex) -> Self {
        index.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get_roundtrip() {
        let c = CityIndex::new(7);
        assert_eq!(c.get(), 7);
        assert_eq!(usize::from(c), 7);
        assert_eq!(CityIndex::from(7usize), c);
    }

    #[test]
    fn test_start_city() {
        assert!(CityIndex::START.is_start());
        assert!(!CityIndex::new(1).is_start());
        assert_eq!(CityIndex::START.get(), 0);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format!("{}", CityIndex::new(42)), "CityIndex(42)");
        assert_eq!(format!("{:?}", CityIndex::new(42)), "CityIndex(42)");
    }

    #[test]
    fn test_ordering_follows_usize() {
        assert!(CityIndex::new(1) < CityIndex::new(2));
        assert_eq!(CityIndex::new(5), CityIndex::new(5));
    }
}
