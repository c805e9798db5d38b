//! Feedback scoring and frequency tables
//!
//! A feedback is the pair (exact, partial):
//! - exact = pegs matching in both color and position
//! - partial = colors in common (counted with multiplicity) minus exact
//!
//! The pair is packed into one byte as `exact * (MAX_PEGS + 1) + partial`,
//! which gives every feedback a dense index for frequency tables.

use super::rules::{MAX_PEGS, Rules};
use std::fmt;

const RADIX: u8 = MAX_PEGS as u8 + 1;

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(u8);

/// Feedbacks in comparison order
pub type FeedbackList = Vec<Feedback>;

impl Feedback {
    /// Create a feedback from exact and partial match counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + partial > MAX_PEGS`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!((exact + partial) as usize <= MAX_PEGS);
        Self(exact * RADIX + partial)
    }

    /// Recover a feedback from its packed value
    #[inline]
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        Self(value)
    }

    /// Pegs matching in color and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.0 / RADIX
    }

    /// Pegs matching in color only
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.0 % RADIX
    }

    /// The packed value, usable as a table index
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All pegs correct
    #[inline]
    #[must_use]
    pub const fn perfect(rules: &Rules) -> Self {
        Self::new(rules.pegs() as u8, 0)
    }

    /// Whether this feedback identifies the secret under `rules`
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, rules: &Rules) -> bool {
        self.exact() as usize == rules.pegs()
    }

    /// Largest packed value any feedback can take under `rules`
    #[inline]
    #[must_use]
    pub const fn max_value(rules: &Rules) -> u8 {
        Self::perfect(rules).value()
    }

    /// Number of distinct feedbacks that can actually occur
    ///
    /// Every (exact, partial) with `exact + partial <= pegs`, except
    /// `(pegs - 1, 1)` which is impossible.
    #[must_use]
    pub const fn outcome_count(rules: &Rules) -> usize {
        let n = rules.pegs();
        (n + 1) * (n + 2) / 2 - 1
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.exact(), self.partial())
    }
}

/// Occurrence count of each feedback, dense over `0..=max_value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackFrequencyTable {
    counts: Vec<u32>,
}

impl FeedbackFrequencyTable {
    /// An all-zero table able to hold every feedback under `rules`
    #[must_use]
    pub fn new(rules: &Rules) -> Self {
        Self {
            counts: vec![0; usize::from(Feedback::max_value(rules)) + 1],
        }
    }

    /// Record one occurrence
    #[inline]
    pub fn add(&mut self, feedback: Feedback) {
        self.counts[usize::from(feedback.value())] += 1;
    }

    /// Occurrences of a specific feedback
    #[inline]
    #[must_use]
    pub fn get(&self, feedback: Feedback) -> u32 {
        self.counts
            .get(usize::from(feedback.value()))
            .copied()
            .unwrap_or(0)
    }

    /// Raw counts indexed by packed feedback value
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Non-zero entries in feedback order
    pub fn iter(&self) -> impl Iterator<Item = (Feedback, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(value, &count)| (Feedback::from_value(value as u8), count))
    }

    /// Number of non-empty partitions
    #[must_use]
    pub fn partitions(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }
}

impl fmt::Display for FeedbackFrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (feedback, count) in self.iter() {
            writeln!(f, "{feedback} = {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_packing() {
        let fb = Feedback::new(2, 1);
        assert_eq!(fb.exact(), 2);
        assert_eq!(fb.partial(), 1);
        assert_eq!(Feedback::from_value(fb.value()), fb);
    }

    #[test]
    fn feedback_perfect() {
        let rules = Rules::new(4, 6, true).unwrap();
        let perfect = Feedback::perfect(&rules);
        assert_eq!(perfect.exact(), 4);
        assert_eq!(perfect.partial(), 0);
        assert!(perfect.is_perfect(&rules));
        assert!(!Feedback::new(3, 0).is_perfect(&rules));
    }

    #[test]
    fn feedback_max_value_covers_all_outcomes() {
        let rules = Rules::new(4, 6, true).unwrap();
        let max = Feedback::max_value(&rules);
        for exact in 0..=4u8 {
            for partial in 0..=(4 - exact) {
                assert!(Feedback::new(exact, partial).value() <= max);
            }
        }
    }

    #[test]
    fn feedback_outcome_count() {
        assert_eq!(Feedback::outcome_count(&Rules::new(4, 6, true).unwrap()), 14);
        assert_eq!(Feedback::outcome_count(&Rules::new(5, 8, true).unwrap()), 20);
        assert_eq!(Feedback::outcome_count(&Rules::new(1, 3, true).unwrap()), 2);
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1A2B");
        assert_eq!(Feedback::new(4, 0).to_string(), "4A0B");
    }

    #[test]
    fn frequency_table_accumulates() {
        let rules = Rules::new(4, 6, true).unwrap();
        let mut table = FeedbackFrequencyTable::new(&rules);
        table.add(Feedback::new(0, 1));
        table.add(Feedback::new(0, 1));
        table.add(Feedback::new(4, 0));

        assert_eq!(table.get(Feedback::new(0, 1)), 2);
        assert_eq!(table.get(Feedback::new(4, 0)), 1);
        assert_eq!(table.get(Feedback::new(2, 2)), 0);
        assert_eq!(table.partitions(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn frequency_table_iterates_in_feedback_order() {
        let rules = Rules::new(4, 6, true).unwrap();
        let mut table = FeedbackFrequencyTable::new(&rules);
        table.add(Feedback::new(3, 0));
        table.add(Feedback::new(0, 2));

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(Feedback::new(0, 2), 1), (Feedback::new(3, 0), 1)]);
    }
}
