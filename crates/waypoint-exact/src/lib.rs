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

//! # Waypoint Exact
//!
//! **Exact search engines for the Traveling Salesman Problem.**
//!
//! Two independent engines over the shared `waypoint_model` data model:
//!
//! * **`brute_force`**: exhaustive enumeration of all `(n-1)!` tours via
//!   in-place swap-based permutation generation. The ground truth.
//! * **`branch_bound`**: iterative depth-first branch-and-bound with an
//!   admissible reduced-cost lower bound. Finds the same optimum while
//!   discarding provably unpromising partial tours.
//!
//! The engines never call each other; they are compared only by the test
//! harness. Both are strictly single-threaded and synchronous: a search runs
//! to completion and returns a [`outcome::SearchOutcome`] carrying the best
//! tour, the node counters, and wall-clock timing. Progress reporting is
//! pluggable through [`monitor::SearchMonitor`].

pub mod branch_bound;
pub mod brute_force;
pub mod monitor;
pub mod outcome;
pub mod stats;
