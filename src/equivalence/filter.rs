//! Equivalence filters
//!
//! A filter tracks which symmetries of the game survive the constraints seen
//! so far and uses them to collapse a candidate list to one representative
//! per equivalence class.

use super::permutation::CodewordPermutation;
use crate::core::{Codeword, Engine, Feedback, MAX_COLORS, MAX_PEGS};

/// Symmetry reduction of guess candidates
///
/// `Clone` produces an independent copy; search branches clone before calling
/// [`EquivalenceFilter::add_constraint`] so siblings never share state.
pub trait EquivalenceFilter: Clone + Send + Sync {
    /// One representative per equivalence class, in candidate order
    ///
    /// The representative of a class is its first member in `candidates`.
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword>;

    /// Restrict the symmetries to those consistent with a new guess
    fn add_constraint(&mut self, guess: &Codeword, feedback: Feedback, remaining: &[Codeword]);
}

/// Filter over peg permutations combined with relabeling of unguessed colors
///
/// Starts with every peg permutation and an empty color map (the full
/// symmetry group). Each constraint keeps only the permutations under which
/// the guess maps onto itself, pinning down their color maps as it goes.
#[derive(Debug, Clone)]
pub struct ConstraintEquivalenceFilter<'a> {
    engine: &'a Engine,
    permutations: Vec<CodewordPermutation>,
}

impl<'a> ConstraintEquivalenceFilter<'a> {
    /// Create a filter holding the full symmetry group
    #[must_use]
    pub fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            permutations: CodewordPermutation::all_peg_permutations(engine.rules()),
        }
    }

    /// Permutations still consistent with every constraint
    #[must_use]
    pub fn permutations(&self) -> &[CodewordPermutation] {
        &self.permutations
    }
}

impl EquivalenceFilter for ConstraintEquivalenceFilter<'_> {
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword> {
        let colors = self.engine.rules().colors() as u8;
        let mut crossed_out = vec![false; self.engine.universe().len()];
        let mut canonical = Vec::new();

        for guess in candidates {
            // Codewords outside the rules have no class to stand for
            let Some(index) = self.engine.index(guess) else {
                log::debug!("skipping {guess}, not a codeword of these rules");
                continue;
            };
            if crossed_out[index] {
                continue;
            }
            canonical.push(*guess);
            log::trace!("canonical guess {guess}");

            for permutation in &self.permutations {
                // Unmapped colors have never appeared in a constraint; those
                // present in the guess are free to take any unmapped image.
                let mut unmapped = [0u8; MAX_COLORS];
                let mut unmapped_len = 0;
                let mut free = [0u8; MAX_PEGS];
                let mut free_len = 0;
                for color in 0..colors {
                    if permutation.color_of(color).is_none() {
                        unmapped[unmapped_len] = color;
                        unmapped_len += 1;
                        if guess.contains(color) {
                            free[free_len] = color;
                            free_len += 1;
                        }
                    }
                }

                for_each_arrangement(&unmapped[..unmapped_len], free_len, &mut |targets| {
                    let mut full = *permutation;
                    for (&color, &target) in free[..free_len].iter().zip(targets) {
                        full.map_color(color, target);
                    }
                    if let Some(index) = full
                        .permute(guess)
                        .and_then(|image| self.engine.index(&image))
                    {
                        crossed_out[index] = true;
                    }
                });
            }
        }
        canonical
    }

    fn add_constraint(&mut self, guess: &Codeword, _feedback: Feedback, _remaining: &[Codeword]) {
        let before = self.permutations.len();

        // Walk backwards so swap_remove only moves already-visited entries.
        for i in (0..self.permutations.len()).rev() {
            if !self.permutations[i].fix(guess) {
                log::trace!("removed peg permutation {}", self.permutations[i]);
                self.permutations.swap_remove(i);
            }
        }

        log::debug!(
            "constraint {guess}: {} of {before} permutations remain",
            self.permutations.len()
        );
        debug_assert!(self.permutations.iter().any(CodewordPermutation::is_identity));
    }
}

/// Filter that performs no reduction
///
/// Every candidate is its own class. Useful as a reference and for
/// measuring what symmetry reduction saves.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl EquivalenceFilter for IdentityFilter {
    fn canonical_guesses(&self, candidates: &[Codeword]) -> Vec<Codeword> {
        candidates.to_vec()
    }

    fn add_constraint(&mut self, _guess: &Codeword, _feedback: Feedback, _remaining: &[Codeword]) {}
}

/// Call `f` with every ordered selection of `k` distinct items from `pool`
fn for_each_arrangement(pool: &[u8], k: usize, f: &mut impl FnMut(&[u8])) {
    let mut buffer = [0u8; MAX_PEGS];
    let mut used = [false; MAX_COLORS];
    arrange(pool, k, 0, &mut buffer, &mut used, f);
}

fn arrange(
    pool: &[u8],
    k: usize,
    depth: usize,
    buffer: &mut [u8; MAX_PEGS],
    used: &mut [bool; MAX_COLORS],
    f: &mut impl FnMut(&[u8]),
) {
    if depth == k {
        f(&buffer[..k]);
        return;
    }
    for (i, &item) in pool.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        buffer[depth] = item;
        arrange(pool, k, depth + 1, buffer, used, f);
        used[i] = false;
    }
}
