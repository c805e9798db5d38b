//! Strategy tree statistics
//!
//! Builds the full decision tree of each strategy and summarizes how many
//! guesses every secret needs.

use crate::core::Engine;
use crate::equivalence::EquivalenceFilter;
use crate::solver::{Strategy, StrategyType, TreeError, TreeOptions, build_strategy_tree};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Depth buckets in a report; deeper secrets land in the last one
pub const REPORT_DEPTH: usize = 10;

/// Statistics of one strategy tree
#[derive(Debug, Clone)]
pub struct TreeReport {
    pub name: String,
    pub total_guesses: usize,
    pub secrets: usize,
    pub depths: [usize; REPORT_DEPTH],
    pub max_depth: usize,
    pub nodes: usize,
    pub duration: Duration,
}

impl TreeReport {
    /// Average guesses per secret
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.secrets == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.secrets as f64
        }
    }
}

/// Build and measure one tree per strategy
///
/// Each tree starts from its own clone of `filter`.
///
/// # Errors
/// Returns the first `TreeError` any strategy runs into.
///
/// # Panics
/// Panics if the progress bar template is invalid.
pub fn compare_strategies<F: EquivalenceFilter>(
    engine: &Engine,
    strategies: &[StrategyType],
    filter: &F,
    options: &TreeOptions,
) -> Result<Vec<TreeReport>, TreeError> {
    let pb = ProgressBar::new(strategies.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        pb.set_message(strategy.name());
        let start = Instant::now();
        let tree = build_strategy_tree(engine, strategy, filter.clone(), options)?;
        let duration = start.elapsed();

        let mut depths = [0; REPORT_DEPTH];
        let secrets = tree.get_depth_info(&mut depths);
        reports.push(TreeReport {
            name: strategy.name(),
            total_guesses: tree.total_guesses(),
            secrets,
            depths,
            max_depth: tree.max_depth(),
            nodes: tree.node_count(),
            duration,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(reports)
}
