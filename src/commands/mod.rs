//! Command implementations

pub mod canonical;
pub mod simulate;
pub mod solve;
pub mod tree;

pub use canonical::{CanonicalExpansion, expand_canonical};
pub use simulate::{BreakerRun, RoundOutcome, SimulationResult, simulate};
pub use solve::{GuessStep, SolveConfig, SolveResult, random_secret, solve_secret};
pub use tree::{REPORT_DEPTH, TreeReport, compare_strategies};
