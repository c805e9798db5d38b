//! Guess selection options shared by the code breaker and the tree builder

use super::strategy::Strategy;
use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;

/// Switches that change how a guess is picked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakerOptions {
    /// Skip scoring when the answer is obvious
    pub optimize_obvious: bool,
    /// Only guess codewords that could still be the secret
    pub possibility_only: bool,
}

/// Pick the next guess for `candidates`
///
/// A single remaining candidate is always guessed directly. Otherwise the
/// guess pool is the filter's canonical guesses, drawn from the remaining
/// candidates with `possibility_only` and from the whole universe without.
///
/// With `optimize_obvious`, two remaining candidates are resolved by guessing
/// the first, and a candidate that splits the rest into singletons is taken
/// without consulting the strategy.
///
/// Returns `None` if no candidates remain or the strategy finds no guess.
pub fn choose_guess<S, F>(
    engine: &Engine,
    strategy: &S,
    filter: &F,
    candidates: &[Codeword],
    options: BreakerOptions,
) -> Option<Codeword>
where
    S: Strategy + ?Sized,
    F: EquivalenceFilter,
{
    match candidates {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    if options.optimize_obvious {
        if candidates.len() <= 2 {
            return Some(candidates[0]);
        }
        if candidates.len() <= Feedback::outcome_count(engine.rules())
            && let Some(guess) = candidates
                .iter()
                .find(|guess| engine.frequencies(guess, candidates).partitions() == candidates.len())
        {
            log::trace!("obvious guess {guess} among {} candidates", candidates.len());
            return Some(*guess);
        }
    }

    let pool = if options.possibility_only {
        filter.canonical_guesses(candidates)
    } else {
        filter.canonical_guesses(engine.universe())
    };
    log::trace!(
        "{} canonical guesses for {} candidates",
        pool.len(),
        candidates.len()
    );
    strategy.select_guess(engine, &pool, candidates)
}
