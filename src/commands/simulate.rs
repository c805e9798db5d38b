//! Side-by-side simulation
//!
//! Plays one secret with every strategy at once, round by round, so the
//! guesses can be compared line by line.

use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;
use crate::solver::{BreakerOptions, BreakerState, CodeBreaker, StrategyType};

/// What one breaker did in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Guess {
        guess: Codeword,
        feedback: Feedback,
        remaining: usize,
    },
    Fail,
}

/// Rounds played by one strategy
#[derive(Debug, Clone)]
pub struct BreakerRun {
    pub name: String,
    pub rounds: Vec<RoundOutcome>,
    pub state: BreakerState,
}

impl BreakerRun {
    /// Guesses made, not counting a final failure
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| matches!(round, RoundOutcome::Guess { .. }))
            .count()
    }
}

/// Result of a simulation
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub secret: Codeword,
    pub runs: Vec<BreakerRun>,
}

impl SimulationResult {
    /// Number of rounds until the last breaker finished
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.runs.iter().map(|run| run.rounds.len()).max().unwrap_or(0)
    }
}

/// Play `secret` with one code breaker per strategy
///
/// Every breaker owns a clone of `filter`; the strategies are shared.
/// Breakers still active after `max_rounds` keep [`BreakerState::Active`].
#[must_use]
pub fn simulate<F: EquivalenceFilter>(
    engine: &Engine,
    strategies: &[StrategyType],
    filter: &F,
    options: BreakerOptions,
    secret: Codeword,
    max_rounds: usize,
) -> SimulationResult {
    let mut breakers: Vec<CodeBreaker<'_, StrategyType, F>> = strategies
        .iter()
        .map(|strategy| CodeBreaker::new(engine, strategy, filter.clone(), options))
        .collect();
    let mut rounds: Vec<Vec<RoundOutcome>> = vec![Vec::new(); strategies.len()];

    for round in 1..=max_rounds {
        let mut any_active = false;
        for (breaker, played) in breakers.iter_mut().zip(rounds.iter_mut()) {
            if breaker.state() != BreakerState::Active {
                continue;
            }
            any_active = true;
            match breaker.make_guess() {
                Some(guess) => {
                    let feedback = engine.compare(&secret, &guess);
                    breaker.add_constraint(&guess, feedback);
                    played.push(RoundOutcome::Guess {
                        guess,
                        feedback,
                        remaining: breaker.candidates().len(),
                    });
                }
                None => played.push(RoundOutcome::Fail),
            }
        }
        if !any_active {
            break;
        }
        log::debug!("simulation round {round} done");
    }

    let runs = breakers
        .iter()
        .zip(rounds)
        .map(|(breaker, rounds)| BreakerRun {
            name: breaker.name(),
            rounds,
            state: breaker.state(),
        })
        .collect();

    SimulationResult { secret, runs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::equivalence::ConstraintEquivalenceFilter;

    #[test]
    fn every_strategy_finds_the_secret() {
        let engine = Engine::new(Rules::new(4, 6, true).unwrap());
        let secret = engine.universe()[engine.universe().len() / 4 * 3];
        let strategies = StrategyType::all();
        let filter = ConstraintEquivalenceFilter::new(&engine);

        let result = simulate(
            &engine,
            &strategies,
            &filter,
            BreakerOptions::default(),
            secret,
            10,
        );

        assert_eq!(result.runs.len(), strategies.len());
        for run in &result.runs {
            assert_eq!(run.state, BreakerState::Solved, "{} did not solve", run.name);
            let Some(RoundOutcome::Guess { guess, feedback, remaining }) = run.rounds.last() else {
                panic!("{} made no guess", run.name);
            };
            assert_eq!(*guess, secret);
            assert!(feedback.is_perfect(engine.rules()));
            assert_eq!(*remaining, 1);
            assert_eq!(run.guesses(), run.rounds.len());
        }
        assert!(result.round_count() <= 10);
    }

    #[test]
    fn round_limit_leaves_breakers_active() {
        let engine = Engine::new(Rules::new(4, 6, true).unwrap());
        let secret = Codeword::from_colors(&[5, 5, 4, 3]);
        let strategies = vec![StrategyType::from_name("simple").unwrap()];
        let filter = ConstraintEquivalenceFilter::new(&engine);

        let result = simulate(
            &engine,
            &strategies,
            &filter,
            BreakerOptions::default(),
            secret,
            1,
        );
        assert_eq!(result.runs[0].rounds.len(), 1);
        assert_eq!(result.runs[0].state, BreakerState::Active);
    }
}
