//! Strategy trees
//!
//! A strategy tree records the guess a strategy makes in every reachable
//! game state. Walking it from the root with the feedback for a secret
//! replays the game for that secret, so depth statistics over the whole
//! universe come straight out of the tree.

use super::options::{BreakerOptions, choose_guess};
use super::strategy::Strategy;
use crate::core::{Codeword, Engine, Feedback};
use crate::equivalence::EquivalenceFilter;
use rayon::prelude::*;
use std::fmt;

/// Options for [`build_strategy_tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    pub breaker: BreakerOptions,
    /// Build sibling subtrees on the rayon pool
    pub parallel: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            breaker: BreakerOptions::default(),
            parallel: true,
        }
    }
}

/// Reasons a tree cannot be completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The strategy offered no guess
    NoGuess { depth: usize, remaining: usize },
    /// The guess leaves every candidate in one imperfect bucket
    NoProgress {
        guess: Codeword,
        depth: usize,
        remaining: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuess { depth, remaining } => {
                write!(f, "No guess at depth {depth} with {remaining} candidates left")
            }
            Self::NoProgress {
                guess,
                depth,
                remaining,
            } => write!(
                f,
                "Guess {guess} at depth {depth} does not split {remaining} candidates"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

/// One game state: the guess made there and where each feedback leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyNode {
    guess: Codeword,
    solves: bool,
    children: Vec<(Feedback, StrategyNode)>,
}

impl StrategyNode {
    #[must_use]
    pub const fn guess(&self) -> Codeword {
        self.guess
    }

    /// Whether the guess is itself one of the remaining candidates
    #[must_use]
    pub const fn solves(&self) -> bool {
        self.solves
    }

    /// Follow-up states in feedback order, excluding the perfect score
    #[must_use]
    pub fn children(&self) -> &[(Feedback, StrategyNode)] {
        &self.children
    }

    /// Subtree reached after `feedback`
    #[must_use]
    pub fn child(&self, feedback: Feedback) -> Option<&Self> {
        self.children
            .binary_search_by_key(&feedback, |(fb, _)| *fb)
            .ok()
            .map(|i| &self.children[i].1)
    }

    /// Secrets identified at each depth, with this node at depth 1
    ///
    /// The histogram sums to the number of candidates the node was built for.
    #[must_use]
    pub fn depth_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![usize::from(self.solves)];
        for (_, child) in &self.children {
            let below = child.depth_histogram();
            if histogram.len() < below.len() + 1 {
                histogram.resize(below.len() + 1, 0);
            }
            for (depth, count) in below.into_iter().enumerate() {
                histogram[depth + 1] += count;
            }
        }
        histogram
    }

    fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }
}

/// Complete decision tree of one strategy over the whole universe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTree {
    root: StrategyNode,
    histogram: Vec<usize>,
}

impl StrategyTree {
    #[must_use]
    pub const fn root(&self) -> &StrategyNode {
        &self.root
    }

    /// Fill `buffer[d - 1]` with the number of secrets found after `d` guesses
    ///
    /// Depths beyond `buffer.len()` are added to the last entry. Returns the
    /// number of secrets accounted for, which equals the universe size.
    pub fn get_depth_info(&self, buffer: &mut [usize]) -> usize {
        buffer.fill(0);
        let Some(last) = buffer.len().checked_sub(1) else {
            return self.secret_count();
        };
        for (depth, &count) in self.histogram.iter().enumerate() {
            buffer[depth.min(last)] += count;
        }
        buffer.iter().sum()
    }

    /// Secrets covered by the tree
    #[must_use]
    pub fn secret_count(&self) -> usize {
        self.histogram.iter().sum()
    }

    /// Sum over every secret of the guesses needed to find it
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.histogram
            .iter()
            .enumerate()
            .map(|(depth, &count)| (depth + 1) * count)
            .sum()
    }

    /// Largest number of guesses any secret needs
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.histogram.len()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// The guesses played against `secret`, ending with the secret itself
    #[must_use]
    pub fn path(&self, engine: &Engine, secret: &Codeword) -> Vec<Codeword> {
        let mut path = Vec::new();
        let mut node = Some(&self.root);
        while let Some(current) = node {
            path.push(current.guess);
            let feedback = engine.compare(secret, &current.guess);
            if feedback.is_perfect(engine.rules()) {
                break;
            }
            node = current.child(feedback);
        }
        path
    }
}

struct Builder<'a, S: ?Sized> {
    engine: &'a Engine,
    strategy: &'a S,
    options: TreeOptions,
}

/// Build the complete decision tree of `strategy`
///
/// `filter` is the unconstrained filter for the root; every branch works on
/// its own clone.
///
/// # Errors
/// Returns `TreeError` if the strategy gets stuck in some state. This does
/// not happen for the strategies in this crate.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Engine, Rules};
/// use mastermind_solver::equivalence::ConstraintEquivalenceFilter;
/// use mastermind_solver::solver::{StrategyType, TreeOptions, build_strategy_tree};
///
/// let engine = Engine::new(Rules::new(3, 3, false).unwrap());
/// let strategy = StrategyType::from_name("minmax").unwrap();
/// let filter = ConstraintEquivalenceFilter::new(&engine);
///
/// let tree = build_strategy_tree(&engine, &strategy, filter, &TreeOptions::default()).unwrap();
/// let mut depths = [0; 4];
/// assert_eq!(tree.get_depth_info(&mut depths), 6);
/// ```
pub fn build_strategy_tree<S, F>(
    engine: &Engine,
    strategy: &S,
    filter: F,
    options: &TreeOptions,
) -> Result<StrategyTree, TreeError>
where
    S: Strategy + ?Sized,
    F: EquivalenceFilter,
{
    log::info!("building strategy tree for {} on {}", strategy.name(), engine.rules());
    let builder = Builder {
        engine,
        strategy,
        options: *options,
    };

    let root = builder
        .build(engine.universe(), filter, 1)
        .inspect_err(|e| log::warn!("{}: {e}", strategy.name()))?;
    let histogram = root.depth_histogram();
    debug_assert_eq!(histogram.iter().sum::<usize>(), engine.universe().len());

    let tree = StrategyTree { root, histogram };
    log::info!(
        "strategy tree for {} complete: {} nodes, {} guesses",
        strategy.name(),
        tree.node_count(),
        tree.total_guesses()
    );
    Ok(tree)
}

impl<S: Strategy + ?Sized> Builder<'_, S> {
    fn build<F: EquivalenceFilter>(
        &self,
        candidates: &[Codeword],
        filter: F,
        depth: usize,
    ) -> Result<StrategyNode, TreeError> {
        let guess = choose_guess(
            self.engine,
            self.strategy,
            &filter,
            candidates,
            self.options.breaker,
        )
        .ok_or(TreeError::NoGuess {
            depth,
            remaining: candidates.len(),
        })?;

        let rules = self.engine.rules();
        let mut buckets: Vec<Vec<Codeword>> =
            vec![Vec::new(); usize::from(Feedback::max_value(rules)) + 1];
        for candidate in candidates {
            let feedback = self.engine.compare(candidate, &guess);
            buckets[usize::from(feedback.value())].push(*candidate);
        }

        let perfect = Feedback::perfect(rules);
        let solves = !buckets[usize::from(perfect.value())].is_empty();
        let parts: Vec<(Feedback, Vec<Codeword>)> = buckets
            .into_iter()
            .enumerate()
            .map(|(value, part)| (Feedback::from_value(value as u8), part))
            .filter(|(feedback, part)| *feedback != perfect && !part.is_empty())
            .collect();

        if parts.iter().any(|(_, part)| part.len() == candidates.len()) {
            return Err(TreeError::NoProgress {
                guess,
                depth,
                remaining: candidates.len(),
            });
        }

        let expand = |(feedback, part): (Feedback, Vec<Codeword>)| {
            let mut branch = filter.clone();
            branch.add_constraint(&guess, feedback, &part);
            self.build(&part, branch, depth + 1)
                .map(|child| (feedback, child))
        };
        let children = if self.options.parallel {
            parts.into_par_iter().map(expand).collect::<Result<Vec<_>, _>>()?
        } else {
            parts.into_iter().map(expand).collect::<Result<Vec<_>, _>>()?
        };

        Ok(StrategyNode {
            guess,
            solves,
            children,
        })
    }
}
