//! Partition scoring heuristics
//!
//! Every heuristic looks at the same thing: how a guess would split the
//! remaining candidates into feedback buckets. Scores are ordered so that
//! lower is better, which lets one selection routine serve them all.

use crate::core::FeedbackFrequencyTable;
use std::cmp::Reverse;
use std::fmt::Debug;

/// Scores a feedback partition; lower scores are better
pub trait Heuristic: Send + Sync {
    /// Totally ordered score
    type Score: Ord + Copy + Send + Debug;

    /// Short label used on the command line and in reports
    fn name(&self) -> String;

    /// Score the partition induced by one guess
    fn score(&self, partition: &FeedbackFrequencyTable) -> Self::Score;
}

/// Minimize the size of the k-th largest bucket
///
/// With `rank == 1` this is the classic worst-case (minimax) rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizeWorstCase {
    rank: usize,
}

impl MinimizeWorstCase {
    /// Score by the `rank`-th largest bucket (1-based, clamped to at least 1)
    #[must_use]
    pub const fn new(rank: usize) -> Self {
        Self {
            rank: if rank == 0 { 1 } else { rank },
        }
    }
}

impl Default for MinimizeWorstCase {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Heuristic for MinimizeWorstCase {
    type Score = u32;

    fn name(&self) -> String {
        if self.rank == 1 {
            "minmax".to_string()
        } else {
            format!("minmax{}", self.rank)
        }
    }

    fn score(&self, partition: &FeedbackFrequencyTable) -> u32 {
        if self.rank == 1 {
            return partition.counts().iter().copied().max().unwrap_or(0);
        }
        let mut sizes: Vec<u32> = partition.iter().map(|(_, count)| count).collect();
        sizes.sort_unstable_by_key(|&size| Reverse(size));
        sizes.get(self.rank - 1).copied().unwrap_or(0)
    }
}

/// Minimize the expected number of remaining candidates
///
/// Expected size is `Σ n² / N`; `N` is the same for every guess, so the
/// integer sum of squares ranks guesses identically without rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimizeAverage;

impl Heuristic for MinimizeAverage {
    type Score = u64;

    fn name(&self) -> String {
        "minavg".to_string()
    }

    fn score(&self, partition: &FeedbackFrequencyTable) -> u64 {
        partition
            .counts()
            .iter()
            .map(|&n| u64::from(n) * u64::from(n))
            .sum()
    }
}

/// Entropy scores are compared after rounding to this many units per bit
const ENTROPY_SCALE: f64 = 1e9;

/// Bucket sizes covered by the lookup table of the approximate mode
const LOOKUP_LIMIT: usize = 4096;

/// Maximize the Shannon entropy of the partition
///
/// The exact mode sums `-p·log2(p)` per bucket. The approximate mode uses
/// `log2(N) - Σ n·log2(n) / N` with `n·log2(n)` read from a precomputed
/// table. Both are rounded to a fixed resolution before comparison so they
/// rank guesses identically.
#[derive(Debug, Clone)]
pub struct MaximizeEntropy {
    lookup: Option<Vec<f64>>,
}

impl MaximizeEntropy {
    /// Evaluate entropy directly
    #[must_use]
    pub const fn exact() -> Self {
        Self { lookup: None }
    }

    /// Evaluate entropy through a table of `n·log2(n)`
    #[must_use]
    pub fn approximate() -> Self {
        let table = (0..LOOKUP_LIMIT).map(n_log2_n).collect();
        Self {
            lookup: Some(table),
        }
    }

    /// Whether this instance uses the lookup table
    #[must_use]
    pub const fn is_approximate(&self) -> bool {
        self.lookup.is_some()
    }

    /// Entropy of the partition in bits
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, FeedbackFrequencyTable, Rules};
    /// use mastermind_solver::solver::MaximizeEntropy;
    ///
    /// let mut table = FeedbackFrequencyTable::new(&Rules::default());
    /// table.add(Feedback::new(0, 0));
    /// table.add(Feedback::new(1, 0));
    ///
    /// let bits = MaximizeEntropy::exact().entropy(&table);
    /// assert!((bits - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn entropy(&self, partition: &FeedbackFrequencyTable) -> f64 {
        let total = partition.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;

        match &self.lookup {
            None => partition
                .iter()
                .map(|(_, count)| {
                    let p = f64::from(count) / total;
                    -p * p.log2()
                })
                .sum(),
            Some(table) => {
                let sum: f64 = partition
                    .iter()
                    .map(|(_, count)| {
                        let n = count as usize;
                        table.get(n).copied().unwrap_or_else(|| n_log2_n(n))
                    })
                    .sum();
                total.log2() - sum / total
            }
        }
    }
}

impl Default for MaximizeEntropy {
    fn default() -> Self {
        Self::exact()
    }
}

impl Heuristic for MaximizeEntropy {
    type Score = i64;

    fn name(&self) -> String {
        if self.is_approximate() {
            "entropy-approx".to_string()
        } else {
            "entropy".to_string()
        }
    }

    fn score(&self, partition: &FeedbackFrequencyTable) -> i64 {
        -(self.entropy(partition) * ENTROPY_SCALE).round() as i64
    }
}

fn n_log2_n(n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        let n = n as f64;
        n * n.log2()
    }
}

/// Maximize the number of non-empty buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaximizePartitions;

impl Heuristic for MaximizePartitions {
    type Score = Reverse<usize>;

    fn name(&self) -> String {
        "parts".to_string()
    }

    fn score(&self, partition: &FeedbackFrequencyTable) -> Reverse<usize> {
        Reverse(partition.partitions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Rules};

    fn table(sizes: &[u32]) -> FeedbackFrequencyTable {
        let mut table = FeedbackFrequencyTable::new(&Rules::default());
        for (value, &size) in sizes.iter().enumerate() {
            for _ in 0..size {
                table.add(Feedback::from_value(value as u8));
            }
        }
        table
    }

    #[test]
    fn worst_case_uses_largest_bucket() {
        let h = MinimizeWorstCase::default();
        assert_eq!(h.score(&table(&[3, 5, 1])), 5);
        assert_eq!(h.score(&table(&[])), 0);
        assert!(h.score(&table(&[2, 2, 2])) < h.score(&table(&[4, 1, 1])));
    }

    #[test]
    fn worst_case_rank_picks_kth_bucket() {
        let h = MinimizeWorstCase::new(2);
        assert_eq!(h.score(&table(&[3, 5, 1])), 3);
        assert_eq!(h.score(&table(&[7])), 0);
        assert_eq!(h.name(), "minmax2");
        assert_eq!(MinimizeWorstCase::new(0), MinimizeWorstCase::default());
    }

    #[test]
    fn average_prefers_even_split() {
        let h = MinimizeAverage;
        assert_eq!(h.score(&table(&[2, 2])), 8);
        assert_eq!(h.score(&table(&[3, 1])), 10);
        assert!(h.score(&table(&[2, 2])) < h.score(&table(&[3, 1])));
    }

    #[test]
    fn entropy_of_uniform_split() {
        let h = MaximizeEntropy::exact();
        assert!((h.entropy(&table(&[5, 5, 5, 5])) - 2.0).abs() < 1e-12);
        assert!(h.entropy(&table(&[10])).abs() < 1e-12);
        assert!(h.entropy(&table(&[])).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_modes_agree() {
        let exact = MaximizeEntropy::exact();
        let approx = MaximizeEntropy::approximate();
        for sizes in [
            &[1u32, 1, 1, 1][..],
            &[256, 308, 61, 0, 4, 222, 276, 27, 0, 0, 0, 44, 84, 0, 0, 2, 0, 0, 0, 0, 0, 1][..],
            &[1, 2, 3, 4, 5, 6][..],
            &[4097, 3][..],
        ] {
            let t = table(sizes);
            assert!((exact.entropy(&t) - approx.entropy(&t)).abs() < 1e-9);
            assert_eq!(exact.score(&t), approx.score(&t));
        }
    }

    #[test]
    fn entropy_score_prefers_more_information() {
        let h = MaximizeEntropy::approximate();
        assert!(h.score(&table(&[2, 2, 2])) < h.score(&table(&[4, 1, 1])));
        assert_eq!(h.name(), "entropy-approx");
        assert_eq!(MaximizeEntropy::exact().name(), "entropy");
    }

    #[test]
    fn partitions_prefers_more_buckets() {
        let h = MaximizePartitions;
        assert_eq!(h.score(&table(&[1, 0, 1, 1])), Reverse(3));
        assert!(h.score(&table(&[1, 1, 1])) < h.score(&table(&[2, 1])));
    }
}
