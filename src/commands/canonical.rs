//! Canonical guess exploration
//!
//! Lists the canonical guesses of the unconstrained game and, level by
//! level, the canonical follow-ups after each of them.

use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;

/// Canonical guesses at one level, with the expansion below each guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalExpansion {
    pub guesses: Vec<Codeword>,
    /// One entry per guess, empty at the last level
    pub children: Vec<CanonicalExpansion>,
}

impl CanonicalExpansion {
    /// Total canonical guesses over every branch of the last level
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            self.guesses.len()
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }
}

/// Expand canonical guesses `levels` levels deep
///
/// Level 0 is the list from `filter` itself; each further level constrains a
/// clone of the filter on one guess of the level above.
pub fn expand_canonical<F: EquivalenceFilter>(
    engine: &Engine,
    filter: &F,
    levels: usize,
) -> CanonicalExpansion {
    let guesses = filter.canonical_guesses(engine.universe());
    let children = if levels == 0 {
        Vec::new()
    } else {
        guesses
            .iter()
            .map(|guess| {
                let mut child = filter.clone();
                child.add_constraint(guess, Feedback::new(0, 0), engine.universe());
                expand_canonical(engine, &child, levels - 1)
            })
            .collect()
    };
    CanonicalExpansion { guesses, children }
}
