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

//! Command-line front end for the Waypoint exact TSP solvers.
//!
//! Loads a distance matrix from a text file, runs the requested engine (or
//! both), prints a summary per run, and appends a CSV record to the results
//! log so batches of runs stay comparable.

mod report;

use anyhow::{Context, Result};
use clap::{arg, value_parser, ArgAction, Command};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use waypoint_exact::branch_bound::BranchBoundSolver;
use waypoint_exact::brute_force::BruteForceSolver;
use waypoint_exact::monitor::{ConsoleMonitor, NoOpMonitor};
use waypoint_exact::outcome::SearchOutcome;
use waypoint_model::loading::MatrixLoader;
use waypoint_model::matrix::DistanceMatrix;

/// Progress line interval for branch-and-bound runs. Bounded search explores
/// far fewer nodes per second of interest, so it reports more often.
const BRANCH_BOUND_REPORT_INTERVAL: u64 = 10_000;

/// Progress line interval for brute-force runs.
const BRUTE_FORCE_REPORT_INTERVAL: u64 = 1_000_000;

/// City count above which a brute-force run asks for confirmation first.
/// 13 cities already mean 479 million permutations.
const BRUTE_FORCE_CONFIRM_THRESHOLD: usize = 12;

fn cli() -> Command {
    Command::new("waypoint")
        .about("Exact TSP solvers over explicit distance matrices")
        .arg(
            arg!(<ALGORITHM> "Search algorithm to run")
                .value_parser(["brute-force", "branch-bound", "both-exact"]),
        )
        .arg(arg!(<FILE> "Distance matrix file").value_parser(value_parser!(PathBuf)))
        .arg(
            arg!(--"results-log" <PATH> "Append a CSV record of each run to this file")
                .value_parser(value_parser!(PathBuf))
                .default_value("results/exact_results.txt"),
        )
        .arg(arg!(--yes "Skip the brute-force confirmation prompt").action(ArgAction::SetTrue))
        .arg(arg!(--quiet "Suppress progress output during the search").action(ArgAction::SetTrue))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let algorithm = matches.get_one::<String>("ALGORITHM").unwrap().as_str();
    let file = matches.get_one::<PathBuf>("FILE").unwrap();
    let results_log = matches.get_one::<PathBuf>("results-log").unwrap();
    let yes = matches.get_flag("yes");
    let quiet = matches.get_flag("quiet");

    let matrix: DistanceMatrix<i64> = MatrixLoader::new()
        .from_path(file)
        .with_context(|| format!("failed to load distance matrix from {}", file.display()))?;

    let optimal = report::optimal_from_filename(file);

    let run_brute_force = matches!(algorithm, "brute-force" | "both-exact");
    let run_branch_bound = matches!(algorithm, "branch-bound" | "both-exact");

    if run_brute_force {
        if matrix.num_cities() > BRUTE_FORCE_CONFIRM_THRESHOLD
            && !yes
            && !confirm_brute_force(matrix.num_cities())?
        {
            println!("Brute force run cancelled.");
        } else {
            let outcome = solve_brute_force(&matrix, quiet);
            finish_run(file, results_log, &matrix, &outcome, optimal);
        }
    }

    if run_branch_bound {
        let outcome = solve_branch_bound(&matrix, quiet);
        finish_run(file, results_log, &matrix, &outcome, optimal);
    }

    Ok(())
}

/// Asks on stdin whether a long brute-force run should proceed.
fn confirm_brute_force(num_cities: usize) -> Result<bool> {
    println!(
        "Brute force on {} cities enumerates {} permutations and may run for a very long time.",
        num_cities,
        permutation_count_label(num_cities)
    );
    println!("Continue? (y/n)");

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation from stdin")?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

/// `(n-1)!` as a display string, or an order-of-magnitude note once the
/// factorial no longer fits into a `u64`.
fn permutation_count_label(num_cities: usize) -> String {
    let mut count: u64 = 1;
    for factor in 2..num_cities as u64 {
        count = match count.checked_mul(factor) {
            Some(next) => next,
            None => return format!("more than {}", u64::MAX),
        };
    }
    count.to_string()
}

fn solve_brute_force(matrix: &DistanceMatrix<i64>, quiet: bool) -> SearchOutcome<i64> {
    let solver = BruteForceSolver::new();
    if quiet {
        solver.solve(matrix, &mut NoOpMonitor::new())
    } else {
        solver.solve(matrix, &mut ConsoleMonitor::every(BRUTE_FORCE_REPORT_INTERVAL))
    }
}

fn solve_branch_bound(matrix: &DistanceMatrix<i64>, quiet: bool) -> SearchOutcome<i64> {
    let solver = BranchBoundSolver::new();
    if quiet {
        solver.solve(matrix, &mut NoOpMonitor::new())
    } else {
        solver.solve(matrix, &mut ConsoleMonitor::every(BRANCH_BOUND_REPORT_INTERVAL))
    }
}

/// Prints the run summary and appends the CSV record. A results log that
/// cannot be written must not fail the run; the solution has already been
/// computed and printed.
fn finish_run(
    file: &Path,
    results_log: &Path,
    matrix: &DistanceMatrix<i64>,
    outcome: &SearchOutcome<i64>,
    optimal: Option<i64>,
) {
    report::print_report(file, matrix.num_cities(), outcome, optimal);

    let record = report::ResultsRecord::new(file, matrix.num_cities(), outcome, optimal);
    if let Err(error) = record.append_to(results_log) {
        eprintln!(
            "warning: could not append to results log {}: {}",
            results_log.display(),
            error
        );
    }
}
