//! Interactive code breaker
//!
//! Plays one game round by round: ask for a guess, feed back the score,
//! repeat until the secret is found or the state becomes contradictory.

use super::options::{BreakerOptions, choose_guess};
use super::strategy::Strategy;
use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;

/// Progress of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// Still guessing
    Active,
    /// The last feedback was perfect
    Solved,
    /// No consistent guess exists
    Failed,
}

/// Drives one game with a shared strategy and its own filter
///
/// The breaker owns its candidate list and equivalence filter outright; the
/// strategy is borrowed, so many breakers can share one instance.
#[derive(Debug)]
pub struct CodeBreaker<'a, S: ?Sized, F> {
    engine: &'a Engine,
    strategy: &'a S,
    filter: F,
    options: BreakerOptions,
    candidates: Vec<Codeword>,
    history: Vec<(Codeword, Feedback)>,
    state: BreakerState,
}

impl<'a, S, F> CodeBreaker<'a, S, F>
where
    S: Strategy + ?Sized,
    F: EquivalenceFilter,
{
    /// Start a game in which every codeword is still possible
    #[must_use]
    pub fn new(engine: &'a Engine, strategy: &'a S, filter: F, options: BreakerOptions) -> Self {
        Self {
            engine,
            strategy,
            filter,
            options,
            candidates: engine.generate_codewords(),
            history: Vec::new(),
            state: BreakerState::Active,
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.strategy.name()
    }

    #[must_use]
    pub const fn state(&self) -> BreakerState {
        self.state
    }

    /// Codewords consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Codeword] {
        &self.candidates
    }

    /// Guesses made so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Codeword, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// Propose the next guess
    ///
    /// Returns `None` once the game is over. A game that is still active but
    /// has no guess to offer moves to [`BreakerState::Failed`].
    pub fn make_guess(&mut self) -> Option<Codeword> {
        if self.state != BreakerState::Active {
            return None;
        }
        let guess = choose_guess(
            self.engine,
            self.strategy,
            &self.filter,
            &self.candidates,
            self.options,
        );
        if guess.is_none() {
            log::warn!(
                "{}: no guess with {} candidates left",
                self.name(),
                self.candidates.len()
            );
            self.state = BreakerState::Failed;
        }
        guess
    }

    /// Record the feedback received for `guess`
    pub fn add_constraint(&mut self, guess: &Codeword, feedback: Feedback) {
        self.candidates = self.engine.filter(&self.candidates, guess, feedback);
        self.filter
            .add_constraint(guess, feedback, &self.candidates);
        self.history.push((*guess, feedback));

        if feedback.is_perfect(self.engine.rules()) {
            self.state = BreakerState::Solved;
        } else if self.candidates.is_empty() {
            log::warn!("{}: feedback {feedback} for {guess} is contradictory", self.name());
            self.state = BreakerState::Failed;
        }
    }

    /// Play against a known secret until solved, failed or out of rounds
    ///
    /// Returns the number of guesses if the secret was found.
    pub fn solve(&mut self, secret: &Codeword, max_rounds: usize) -> Option<usize> {
        while self.history.len() < max_rounds {
            let guess = self.make_guess()?;
            let feedback = self.engine.compare(secret, &guess);
            self.add_constraint(&guess, feedback);
            if self.state == BreakerState::Solved {
                return Some(self.history.len());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::equivalence::{ConstraintEquivalenceFilter, IdentityFilter};
    use crate::solver::StrategyType;

    fn engine() -> Engine {
        Engine::new(Rules::new(4, 6, true).unwrap())
    }

    #[test]
    fn solves_every_secret_with_minmax() {
        // Worst-case play on 4 pegs and 6 colors needs at most five guesses
        let e = engine();
        let strategy = StrategyType::from_name("minmax").unwrap();
        for secret in e.universe().iter().step_by(37) {
            let filter = ConstraintEquivalenceFilter::new(&e);
            let mut breaker = CodeBreaker::new(&e, &strategy, filter, BreakerOptions::default());
            let rounds = breaker.solve(secret, 10).unwrap();
            assert!(rounds <= 5, "{secret} took {rounds} guesses");
            assert_eq!(breaker.state(), BreakerState::Solved);
            assert_eq!(breaker.candidates(), &[*secret]);
        }
    }

    #[test]
    fn first_guess_is_canonical() {
        let e = engine();
        let strategy = StrategyType::from_name("entropy").unwrap();
        let mut breaker = CodeBreaker::new(
            &e,
            &strategy,
            ConstraintEquivalenceFilter::new(&e),
            BreakerOptions::default(),
        );
        let guess = breaker.make_guess().unwrap();
        let canonical = ConstraintEquivalenceFilter::new(&e).canonical_guesses(e.universe());
        assert!(canonical.contains(&guess));
        assert_eq!(breaker.state(), BreakerState::Active);
    }

    #[test]
    fn contradiction_fails() {
        let e = engine();
        let strategy = StrategyType::from_name("simple").unwrap();
        let mut breaker = CodeBreaker::new(&e, &strategy, IdentityFilter, BreakerOptions::default());

        let guess = Codeword::from_colors(&[0, 0, 0, 0]);
        breaker.add_constraint(&guess, Feedback::new(4, 0));
        assert_eq!(breaker.state(), BreakerState::Solved);

        let mut breaker = CodeBreaker::new(&e, &strategy, IdentityFilter, BreakerOptions::default());
        breaker.add_constraint(&guess, Feedback::new(0, 0));
        let other = Codeword::from_colors(&[1, 1, 1, 1]);
        breaker.add_constraint(&other, Feedback::new(3, 1));
        assert!(breaker.candidates().is_empty());
        assert_eq!(breaker.state(), BreakerState::Failed);
        assert_eq!(breaker.make_guess(), None);
    }

    #[test]
    fn solved_breaker_stops_guessing() {
        let e = engine();
        let strategy = StrategyType::from_name("parts").unwrap();
        let mut breaker = CodeBreaker::new(&e, &strategy, IdentityFilter, BreakerOptions::default());
        let secret = Codeword::from_colors(&[5, 4, 3, 2]);

        assert!(breaker.solve(&secret, 10).is_some());
        assert_eq!(breaker.make_guess(), None);
        assert_eq!(breaker.history().last().map(|&(g, _)| g), Some(secret));
    }

    #[test]
    fn breakers_share_one_strategy() {
        let e = engine();
        let strategy = StrategyType::from_name("minavg").unwrap();
        let secret = Codeword::from_colors(&[1, 2, 2, 5]);

        let mut symmetric = CodeBreaker::new(
            &e,
            &strategy,
            ConstraintEquivalenceFilter::new(&e),
            BreakerOptions::default(),
        );
        let mut plain = CodeBreaker::new(&e, &strategy, IdentityFilter, BreakerOptions::default());

        assert!(symmetric.solve(&secret, 10).is_some());
        assert!(plain.solve(&secret, 10).is_some());
    }
}
