//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::heuristic::{
    Heuristic, MaximizeEntropy, MaximizePartitions, MinimizeAverage, MinimizeWorstCase,
};
use crate::core::{Codeword, Engine};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A strategy for selecting a guess from a pool of allowed guesses
pub trait Strategy: Send + Sync {
    /// Short label used on the command line and in reports
    fn name(&self) -> String;

    /// Select a guess from `guess_pool` to split `candidates`
    ///
    /// Returns `None` when there is nothing to choose from.
    fn select_guess(
        &self,
        engine: &Engine,
        guess_pool: &[Codeword],
        candidates: &[Codeword],
    ) -> Option<Codeword>;
}

/// Baseline strategy without any scoring
///
/// Picks the first pool entry that could still be the secret, or the first
/// candidate if the pool holds none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn name(&self) -> String {
        "simple".to_string()
    }

    fn select_guess(
        &self,
        _engine: &Engine,
        guess_pool: &[Codeword],
        candidates: &[Codeword],
    ) -> Option<Codeword> {
        let members: FxHashSet<Codeword> = candidates.iter().copied().collect();
        guess_pool
            .iter()
            .find(|guess| members.contains(guess))
            .or_else(|| candidates.first())
            .copied()
    }
}

/// Strategy that scores every pool entry with a heuristic
///
/// Ties go to guesses that could be the secret, then to the earliest pool
/// entry, so the choice does not depend on thread scheduling.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy<H> {
    heuristic: H,
}

impl<H: Heuristic> HeuristicStrategy<H> {
    #[must_use]
    pub const fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    #[must_use]
    pub const fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Strategy for HeuristicStrategy<H> {
    fn name(&self) -> String {
        self.heuristic.name()
    }

    fn select_guess(
        &self,
        engine: &Engine,
        guess_pool: &[Codeword],
        candidates: &[Codeword],
    ) -> Option<Codeword> {
        if candidates.is_empty() {
            return None;
        }
        let members: FxHashSet<Codeword> = candidates.iter().copied().collect();

        guess_pool
            .par_iter()
            .enumerate()
            .map(|(index, guess)| {
                let partition = engine.frequencies(guess, candidates);
                let score = self.heuristic.score(&partition);
                ((score, !members.contains(guess), index), *guess)
            })
            .min_by_key(|(key, _)| *key)
            .map(|(_, guess)| guess)
    }
}

/// Names accepted by [`StrategyType::from_name`], in report order
pub const STRATEGY_NAMES: [&str; 6] = [
    "simple",
    "minmax",
    "minavg",
    "entropy",
    "entropy-approx",
    "parts",
];

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// First plausible guess, no scoring
    Simple(SimpleStrategy),
    /// Minimize the largest feedback bucket
    MinMax(HeuristicStrategy<MinimizeWorstCase>),
    /// Minimize the expected bucket size
    MinAverage(HeuristicStrategy<MinimizeAverage>),
    /// Maximize entropy, exact or table-driven
    Entropy(HeuristicStrategy<MaximizeEntropy>),
    /// Maximize the number of buckets
    Partitions(HeuristicStrategy<MaximizePartitions>),
}

impl Strategy for StrategyType {
    fn name(&self) -> String {
        match self {
            Self::Simple(s) => s.name(),
            Self::MinMax(s) => s.name(),
            Self::MinAverage(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::Partitions(s) => s.name(),
        }
    }

    fn select_guess(
        &self,
        engine: &Engine,
        guess_pool: &[Codeword],
        candidates: &[Codeword],
    ) -> Option<Codeword> {
        match self {
            Self::Simple(s) => s.select_guess(engine, guess_pool, candidates),
            Self::MinMax(s) => s.select_guess(engine, guess_pool, candidates),
            Self::MinAverage(s) => s.select_guess(engine, guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(engine, guess_pool, candidates),
            Self::Partitions(s) => s.select_guess(engine, guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names are listed in [`STRATEGY_NAMES`]; returns `None`
    /// for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let strategy = match name.trim() {
            "simple" => Self::Simple(SimpleStrategy),
            "minmax" => Self::MinMax(HeuristicStrategy::new(MinimizeWorstCase::default())),
            "minavg" => Self::MinAverage(HeuristicStrategy::new(MinimizeAverage)),
            "entropy" => Self::Entropy(HeuristicStrategy::new(MaximizeEntropy::exact())),
            "entropy-approx" => {
                Self::Entropy(HeuristicStrategy::new(MaximizeEntropy::approximate()))
            }
            "parts" => Self::Partitions(HeuristicStrategy::new(MaximizePartitions)),
            _ => return None,
        };
        Some(strategy)
    }

    /// Every strategy, in report order
    #[must_use]
    pub fn all() -> Vec<Self> {
        STRATEGY_NAMES
            .iter()
            .filter_map(|name| Self::from_name(name))
            .collect()
    }
}
