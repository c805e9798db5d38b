//! Game engine
//!
//! Facade over the rules: enumerates the codeword universe once and provides
//! comparison, frequency counting and codeword indexing on top of it.

use super::codeword::Codeword;
use super::feedback::{Feedback, FeedbackFrequencyTable, FeedbackList};
use super::rules::{MAX_COLORS, MAX_PEGS, Rules, arrangements};

/// Read-only game engine shared by every solver and search branch
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Rules,
    universe: Vec<Codeword>,
}

impl Engine {
    /// Create an engine and enumerate the universe for `rules`
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let universe = generate_codewords(&rules);
        log::debug!("generated {} codewords for {rules}", universe.len());
        Self { rules, universe }
    }

    /// The rules this engine was built for
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Every codeword allowed by the rules, in lexicographic order
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &[Codeword] {
        &self.universe
    }

    /// A fresh copy of the universe
    #[must_use]
    pub fn generate_codewords(&self) -> Vec<Codeword> {
        self.universe.clone()
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Engine, Feedback, Rules};
    ///
    /// let engine = Engine::new(Rules::new(4, 6, true).unwrap());
    /// let secret = Codeword::from_colors(&[0, 1, 2, 3]);
    /// let guess = Codeword::from_colors(&[1, 0, 3, 2]);
    ///
    /// assert_eq!(engine.compare(&secret, &guess), Feedback::new(0, 4));
    /// ```
    #[must_use]
    pub fn compare(&self, secret: &Codeword, guess: &Codeword) -> Feedback {
        compare(secret, guess)
    }

    /// Score every codeword in `guesses` against `secret`
    #[must_use]
    pub fn compare_all(&self, secret: &Codeword, guesses: &[Codeword]) -> FeedbackList {
        guesses.iter().map(|guess| compare(secret, guess)).collect()
    }

    /// Tally feedbacks into a frequency table
    #[must_use]
    pub fn count_frequencies(&self, feedbacks: &[Feedback]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new(&self.rules);
        for &feedback in feedbacks {
            table.add(feedback);
        }
        table
    }

    /// Partition sizes of `candidates` under `guess`
    ///
    /// Equivalent to `count_frequencies(&compare_all(guess, candidates))`
    /// without the intermediate list.
    #[must_use]
    pub fn frequencies(&self, guess: &Codeword, candidates: &[Codeword]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new(&self.rules);
        for candidate in candidates {
            table.add(compare(guess, candidate));
        }
        table
    }

    /// Candidates that would answer `guess` with `feedback`
    #[must_use]
    pub fn filter(
        &self,
        candidates: &[Codeword],
        guess: &Codeword,
        feedback: Feedback,
    ) -> Vec<Codeword> {
        candidates
            .iter()
            .filter(|candidate| compare(guess, candidate) == feedback)
            .copied()
            .collect()
    }

    /// Position of `code` in [`Engine::universe`]
    ///
    /// Returns `None` if `code` does not satisfy the rules: wrong length, a
    /// color out of range, or a repeated color when repetition is off.
    #[must_use]
    pub fn index(&self, code: &Codeword) -> Option<usize> {
        let pegs = self.rules.pegs();
        let colors = self.rules.colors();

        if code.len() != pegs || code.pegs().iter().any(|&c| usize::from(c) >= colors) {
            return None;
        }

        if self.rules.repeatable() {
            return Some(
                code.pegs()
                    .iter()
                    .fold(0, |acc, &color| acc * colors + usize::from(color)),
            );
        }

        // Rank among unused colors at each position, weighted by the number
        // of arrangements of the remaining positions.
        let mut used = [false; MAX_COLORS];
        let mut index = 0;
        for (i, &color) in code.pegs().iter().enumerate() {
            let color = usize::from(color);
            if used[color] {
                return None;
            }
            let rank = used[..color].iter().filter(|&&u| !u).count();
            index += rank * arrangements(colors - i - 1, pegs - i - 1);
            used[color] = true;
        }
        Some(index)
    }
}

/// Compute the feedback of `guess` against `secret`
///
/// Symmetric in its two arguments.
#[must_use]
pub fn compare(secret: &Codeword, guess: &Codeword) -> Feedback {
    let exact = secret
        .pegs()
        .iter()
        .zip(guess.pegs())
        .filter(|(a, b)| a == b)
        .count();
    let common: usize = secret
        .counts()
        .iter()
        .zip(guess.counts())
        .map(|(&a, &b)| usize::from(a.min(b)))
        .sum();
    Feedback::new(exact as u8, (common - exact) as u8)
}

/// Enumerate all codewords in lexicographic order
fn generate_codewords(rules: &Rules) -> Vec<Codeword> {
    let mut out = Vec::with_capacity(rules.size());
    let mut current = [0u8; MAX_PEGS];
    extend(rules, &mut current, 0, &mut out);
    out
}

fn extend(rules: &Rules, current: &mut [u8; MAX_PEGS], position: usize, out: &mut Vec<Codeword>) {
    if position == rules.pegs() {
        out.push(Codeword::from_colors(&current[..position]));
        return;
    }
    for color in 0..rules.colors() as u8 {
        if !rules.repeatable() && current[..position].contains(&color) {
            continue;
        }
        current[position] = color;
        extend(rules, current, position + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn engine(pegs: usize, colors: usize, repeatable: bool) -> Engine {
        Engine::new(Rules::new(pegs, colors, repeatable).unwrap())
    }

    #[test]
    fn universe_size_with_repetition() {
        assert_eq!(engine(4, 6, true).universe().len(), 1296);
        assert_eq!(engine(3, 5, true).universe().len(), 125);
        assert_eq!(engine(1, 1, true).universe().len(), 1);
    }

    #[test]
    fn universe_size_without_repetition() {
        for (pegs, colors) in [(4, 6), (4, 10), (3, 3), (2, 5)] {
            let e = engine(pegs, colors, false);
            assert_eq!(e.universe().len(), arrangements(colors, pegs));
            for code in e.universe() {
                let distinct: FxHashSet<u8> = code.pegs().iter().copied().collect();
                assert_eq!(distinct.len(), pegs, "{code} repeats a color");
            }
        }
    }

    #[test]
    fn universe_is_strictly_increasing() {
        for e in [engine(4, 6, true), engine(4, 6, false)] {
            assert!(e.universe().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn universe_starts_and_ends_correctly() {
        let e = engine(4, 6, false);
        assert_eq!(e.universe()[0].to_string(), "0123");
        assert_eq!(e.universe()[1].to_string(), "0124");
        assert_eq!(e.universe().last().unwrap().to_string(), "5432");
    }

    #[test]
    fn index_inverts_generation_order() {
        for e in [
            engine(4, 6, true),
            engine(4, 6, false),
            engine(3, 7, false),
            engine(5, 5, false),
        ] {
            for (i, code) in e.universe().iter().enumerate() {
                assert_eq!(e.index(code), Some(i), "index of {code}");
            }
        }
    }

    #[test]
    fn index_rejects_codewords_outside_the_rules() {
        let e = engine(4, 6, false);
        assert_eq!(e.index(&Codeword::from_colors(&[0, 0, 1, 2])), None);
        assert_eq!(e.index(&Codeword::from_colors(&[0, 1, 2, 6])), None);
        assert_eq!(e.index(&Codeword::from_colors(&[0, 1, 2])), None);

        let e = engine(4, 6, true);
        assert_eq!(e.index(&Codeword::from_colors(&[0, 0, 1, 2])), Some(8));
        assert_eq!(e.index(&Codeword::from_colors(&[5, 5, 5, 6])), None);
    }

    #[test]
    fn compare_perfect_match() {
        let e = engine(4, 6, true);
        let secret = Codeword::from_colors(&[0, 1, 2, 3]);
        assert_eq!(e.compare(&secret, &secret), Feedback::new(4, 0));
    }

    #[test]
    fn compare_all_colors_misplaced() {
        let e = engine(4, 6, true);
        let secret = Codeword::from_colors(&[0, 1, 2, 3]);
        let guess = Codeword::from_colors(&[1, 0, 3, 2]);
        assert_eq!(e.compare(&secret, &guess), Feedback::new(0, 4));
    }

    #[test]
    fn compare_with_repeated_colors() {
        let e = engine(4, 6, true);
        let secret = Codeword::from_colors(&[0, 0, 1, 1]);
        let guess = Codeword::from_colors(&[0, 1, 1, 1]);
        // Exact at positions 0, 2, 3; the extra 1 in the guess has no partner
        assert_eq!(e.compare(&secret, &guess), Feedback::new(3, 0));

        let guess = Codeword::from_colors(&[1, 2, 0, 0]);
        assert_eq!(e.compare(&secret, &guess), Feedback::new(0, 3));
    }

    #[test]
    fn compare_is_symmetric_and_bounded() {
        let e = engine(3, 4, true);
        for a in e.universe() {
            assert_eq!(e.compare(a, a), Feedback::new(3, 0));
            for b in e.universe() {
                let ab = e.compare(a, b);
                assert_eq!(ab, e.compare(b, a));
                assert!(ab.exact() + ab.partial() <= 3);
            }
        }
    }

    #[test]
    fn compare_all_matches_compare() {
        let e = engine(4, 6, false);
        let secret = e.universe()[100];
        let feedbacks = e.compare_all(&secret, e.universe());
        assert_eq!(feedbacks.len(), e.universe().len());
        for (code, feedback) in e.universe().iter().zip(&feedbacks) {
            assert_eq!(*feedback, e.compare(&secret, code));
        }
    }

    #[test]
    fn count_frequencies_sums_to_input() {
        let e = engine(4, 6, true);
        let secret = e.universe()[0];
        let feedbacks = e.compare_all(&secret, e.universe());
        let table = e.count_frequencies(&feedbacks);

        assert_eq!(table.total(), 1296);
        assert_eq!(table.get(Feedback::perfect(e.rules())), 1);
        assert_eq!(table, e.frequencies(&secret, e.universe()));
    }

    #[test]
    fn filter_keeps_consistent_candidates() {
        let e = engine(4, 6, true);
        let guess = Codeword::from_colors(&[0, 0, 1, 1]);
        let secret = Codeword::from_colors(&[0, 1, 2, 3]);
        let feedback = e.compare(&secret, &guess);

        let remaining = e.filter(e.universe(), &guess, feedback);
        assert!(remaining.contains(&secret));
        assert!(remaining.iter().all(|c| e.compare(c, &guess) == feedback));
    }
}
