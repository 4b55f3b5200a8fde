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

//! Progress monitors for the exact search engines.
//!
//! Engines never print on their own; all console output during a search goes
//! through a `SearchMonitor`. Tests and benchmarks plug in the no-op
//! implementation, the CLI plugs in `ConsoleMonitor`.

use crate::stats::SearchStatistics;

/// Observer hooks invoked by the search engines.
///
/// All hooks have empty default implementations, so a monitor only overrides
/// what it cares about. The engines call `on_node` once per explored node,
/// which makes it the natural place for throttled progress output.
pub trait SearchMonitor<T> {
    /// Called once before the search starts.
    fn on_enter_search(&mut self, _num_cities: usize) {}

    /// Called after every explored node (permutation tested or stack node
    /// popped).
    fn on_node(&mut self, _stats: &SearchStatistics) {}

    /// Called whenever the engine finds a strictly better tour.
    fn on_improvement(&mut self, _cost: T, _stats: &SearchStatistics) {}

    /// Called once after the search has terminated.
    fn on_exit_search(&mut self, _stats: &SearchStatistics) {}
}

/// A monitor that does nothing. Used by tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor {}

/// A monitor that prints progress lines to stdout.
///
/// Prints one line for every `interval` explored nodes and one line for
/// every strict improvement of the incumbent.
#[derive(Debug, Clone)]
pub struct ConsoleMonitor {
    interval: u64,
}

impl ConsoleMonitor {
    /// Creates a console monitor reporting every `interval` explored nodes.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn every(interval: u64) -> Self {
        assert!(
            interval > 0,
            "called `ConsoleMonitor::every` with a zero interval"
        );
        Self { interval }
    }
}

impl<T> SearchMonitor<T> for ConsoleMonitor
where
    T: std::fmt::Display,
{
    fn on_enter_search(&mut self, num_cities: usize) {
        println!("Starting search over {} cities...", num_cities);
    }

    fn on_node(&mut self, stats: &SearchStatistics) {
        if stats.nodes_explored % self.interval == 0 {
            println!(
                "Progress: {} nodes explored, {} pruned",
                stats.nodes_explored, stats.nodes_pruned
            );
        }
    }

    fn on_improvement(&mut self, cost: T, stats: &SearchStatistics) {
        println!(
            "New best solution: {} (node {})",
            cost, stats.nodes_explored
        );
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        println!(
            "Search finished: {} nodes explored, {} pruned in {:.2?}",
            stats.nodes_explored, stats.nodes_pruned, stats.time_total
        );
    }
}
