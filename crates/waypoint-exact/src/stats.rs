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

use std::time::Duration;

/// Statistics collected during the execution of an exact search engine.
///
/// `nodes_explored` and `nodes_pruned` together account for every node an
/// engine generates: a node is either fully visited (a permutation tested, a
/// leaf evaluated, or an expansion point popped from the stack) or discarded
/// by the bound without expansion. Exhaustive search never prunes, so its
/// pruned counter stays at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total nodes fully visited (leaves evaluated or expansion points popped).
    pub nodes_explored: u64,
    /// Total nodes discarded by the bound without expansion.
    pub nodes_pruned: u64,
    /// Total wall-clock time spent in the engine.
    pub time_total: Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            nodes_pruned: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_node_pruned(&mut self) {
        self.nodes_pruned = self.nodes_pruned.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the fraction of generated nodes that were pruned, in percent.
    /// Returns `0.0` when no nodes were generated at all.
    pub fn pruning_rate(&self) -> f64 {
        let generated = self.nodes_explored.saturating_add(self.nodes_pruned);
        if generated == 0 {
            return 0.0;
        }
        self.nodes_pruned as f64 / generated as f64 * 100.0
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes explored:  {}", self.nodes_explored)?;
        writeln!(f, "  Nodes pruned:    {}", self.nodes_pruned)?;
        writeln!(f, "  Pruning rate:    {:.2}%", self.pruning_rate())?;
        writeln!(f, "  Total time:      {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.nodes_pruned, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_are_monotone() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_node_pruned();
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.nodes_pruned, 1);
    }

    #[test]
    fn test_pruning_rate() {
        let mut stats = SearchStatistics::default();
        assert_eq!(stats.pruning_rate(), 0.0);

        stats.nodes_explored = 3;
        stats.nodes_pruned = 1;
        assert!((stats.pruning_rate() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_explored_counter_saturates() {
        let mut stats = SearchStatistics::default();
        stats.nodes_explored = u64::MAX;
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }
}
