//! Secret solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;
use crate::solver::{BreakerOptions, BreakerState, CodeBreaker, MaximizeEntropy, Strategy};
use rand::prelude::IndexedRandom;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Codeword,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Codeword) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub strategy: String,
    pub secret: Codeword,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Codeword,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Canonical guesses the strategy chose from
    pub pool_size: usize,
    pub entropy: Option<f64>,
}

/// Pick a secret uniformly from the universe
#[must_use]
pub fn random_secret(engine: &Engine) -> Option<Codeword> {
    engine.universe().choose(&mut rand::rng()).copied()
}

/// Solve `config.secret` with one strategy, recording every step
#[must_use]
pub fn solve_secret<S, F>(
    engine: &Engine,
    strategy: &S,
    filter: F,
    options: BreakerOptions,
    config: &SolveConfig,
) -> SolveResult
where
    S: Strategy + ?Sized,
    F: EquivalenceFilter,
{
    let mut breaker = CodeBreaker::new(engine, strategy, filter, options);
    let mut steps = Vec::new();

    while steps.len() < config.max_guesses {
        let candidates_before = breaker.candidates().len();
        let pool_size = if options.possibility_only {
            breaker.filter().canonical_guesses(breaker.candidates()).len()
        } else {
            breaker.filter().canonical_guesses(engine.universe()).len()
        };

        let Some(guess) = breaker.make_guess() else {
            break;
        };

        let entropy = (candidates_before > 1).then(|| {
            MaximizeEntropy::exact().entropy(&engine.frequencies(&guess, breaker.candidates()))
        });

        let feedback = engine.compare(&config.secret, &guess);
        breaker.add_constraint(&guess, feedback);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: breaker.candidates().len(),
            pool_size,
            entropy,
        });

        if breaker.state() != BreakerState::Active {
            break;
        }
    }

    SolveResult {
        strategy: strategy.name(),
        secret: config.secret,
        success: breaker.state() == BreakerState::Solved,
        steps,
    }
}
