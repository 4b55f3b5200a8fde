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

//! Per-run reporting: the human-readable console summary and the
//! append-only CSV results log.
//!
//! The results log is a plain text file with one comma-separated record per
//! finished run:
//!
//! ```text
//! filename,cities,best_cost,time,algorithm,optimal,ratio,explored,pruned
//! ```
//!
//! `time` is wall-clock seconds with six decimals, `ratio` is
//! `best_cost / optimal` with three decimals. When no known optimum is
//! available the record carries `-1` for the optimum and `0.000` for the
//! ratio.

use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;
use waypoint_exact::outcome::SearchOutcome;

/// Sentinel written to the results log when no known optimum is available.
const UNKNOWN_OPTIMAL: i64 = -1;

fn optimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"_(\d+)\.[^.]*$").expect("hard-coded pattern compiles"))
}

/// Extracts the known optimal tour cost encoded in an instance file name.
///
/// Instance files may carry their optimum as the digits between the last
/// underscore and the extension, e.g. `five_cities_19.txt` encodes an
/// optimum of 19. Returns `None` when the name does not follow that
/// convention.
pub fn optimal_from_filename(path: &Path) -> Option<i64> {
    let name = path.file_name()?.to_str()?;
    let captures = optimal_pattern().captures(name)?;
    captures[1].parse().ok()
}

/// One record of the results log.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsRecord {
    pub filename: String,
    pub num_cities: usize,
    pub best_cost: i64,
    pub time_seconds: f64,
    pub algorithm: &'static str,
    pub optimal: i64,
    pub ratio: f64,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

impl ResultsRecord {
    /// Builds a record from a finished run. Only the file name component of
    /// `path` is stored, so logs stay comparable across working directories.
    pub fn new(
        path: &Path,
        num_cities: usize,
        outcome: &SearchOutcome<i64>,
        optimal: Option<i64>,
    ) -> Self {
        let best_cost = outcome.best_tour().cost();
        let (optimal, ratio) = match optimal {
            Some(value) if value > 0 => (value, best_cost as f64 / value as f64),
            _ => (UNKNOWN_OPTIMAL, 0.0),
        };

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            filename,
            num_cities,
            best_cost,
            time_seconds: outcome.statistics().time_total.as_secs_f64(),
            algorithm: outcome.algorithm().identifier(),
            optimal,
            ratio,
            nodes_explored: outcome.statistics().nodes_explored,
            nodes_pruned: outcome.statistics().nodes_pruned,
        }
    }

    /// Renders the record as one CSV line, without a trailing newline.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{:.6},{},{},{:.3},{},{}",
            self.filename,
            self.num_cities,
            self.best_cost,
            self.time_seconds,
            self.algorithm,
            self.optimal,
            self.ratio,
            self.nodes_explored,
            self.nodes_pruned
        )
    }

    /// Appends the record to the log file, creating the file and any missing
    /// parent directories on first use.
    pub fn append_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", self.to_csv_line())
    }
}

/// Prints the human-readable summary of one finished run.
pub fn print_report(
    path: &Path,
    num_cities: usize,
    outcome: &SearchOutcome<i64>,
    optimal: Option<i64>,
) {
    let stats = outcome.statistics();
    let order: Vec<String> = outcome
        .best_tour()
        .cities()
        .iter()
        .map(|city| city.get().to_string())
        .collect();

    println!();
    println!("=== {} ===", outcome.algorithm().identifier());
    println!("File:           {}", path.display());
    println!("Cities:         {}", num_cities);
    println!("Best tour cost: {}", outcome.best_tour().cost());
    println!("Best tour:      {}", order.join(" "));
    println!("Time:           {:.6} seconds", stats.time_total.as_secs_f64());
    println!("Nodes explored: {}", stats.nodes_explored);
    println!("Nodes pruned:   {}", stats.nodes_pruned);
    println!("Pruning rate:   {:.2}%", stats.pruning_rate());

    if let Some(optimal) = optimal {
        println!("Known optimal:  {}", optimal);
        if optimal > 0 {
            println!(
                "Ratio:          {:.3}",
                outcome.best_tour().cost() as f64 / optimal as f64
            );
        }
    }
}
