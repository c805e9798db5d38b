//! Mastermind solving algorithms
//!
//! Heuristics score feedback partitions, strategies turn scores into
//! guesses, and the code breaker and tree builder drive strategies through
//! whole games.

mod breaker;
pub mod heuristic;
mod options;
pub mod strategy;
mod tree;

pub use breaker::{BreakerState, CodeBreaker};
pub use heuristic::{
    Heuristic, MaximizeEntropy, MaximizePartitions, MinimizeAverage, MinimizeWorstCase,
};
pub use options::{BreakerOptions, choose_guess};
pub use strategy::{HeuristicStrategy, STRATEGY_NAMES, SimpleStrategy, Strategy, StrategyType};
pub use tree::{StrategyNode, StrategyTree, TreeError, TreeOptions, build_strategy_tree};
