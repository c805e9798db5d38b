//! Game rules
//!
//! Rules fix the codeword length, the alphabet size and whether a symbol may
//! appear more than once in a codeword.

use std::fmt;

/// Maximum supported codeword length
pub const MAX_PEGS: usize = 6;

/// Maximum supported alphabet size
pub const MAX_COLORS: usize = 10;

/// Immutable game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pegs: usize,
    colors: usize,
    repeatable: bool,
}

/// Error type for invalid rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    PegsOutOfRange(usize),
    ColorsOutOfRange(usize),
    TooFewColors { pegs: usize, colors: usize },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PegsOutOfRange(pegs) => {
                write!(f, "Number of pegs must be between 1 and {MAX_PEGS}, got {pegs}")
            }
            Self::ColorsOutOfRange(colors) => {
                write!(
                    f,
                    "Number of colors must be between 1 and {MAX_COLORS}, got {colors}"
                )
            }
            Self::TooFewColors { pegs, colors } => write!(
                f,
                "Without repetition at least {pegs} colors are needed, got {colors}"
            ),
        }
    }
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Create a new set of rules
    ///
    /// # Errors
    /// Returns `RulesError` if:
    /// - `pegs` is not in `1..=MAX_PEGS`
    /// - `colors` is not in `1..=MAX_COLORS`
    /// - repetition is disallowed and `colors < pegs`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::new(4, 6, true).unwrap();
    /// assert_eq!(rules.size(), 1296);
    ///
    /// assert!(Rules::new(4, 3, false).is_err());
    /// ```
    pub const fn new(pegs: usize, colors: usize, repeatable: bool) -> Result<Self, RulesError> {
        if pegs == 0 || pegs > MAX_PEGS {
            return Err(RulesError::PegsOutOfRange(pegs));
        }
        if colors == 0 || colors > MAX_COLORS {
            return Err(RulesError::ColorsOutOfRange(colors));
        }
        if !repeatable && colors < pegs {
            return Err(RulesError::TooFewColors { pegs, colors });
        }
        Ok(Self {
            pegs,
            colors,
            repeatable,
        })
    }

    /// Codeword length
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> usize {
        self.pegs
    }

    /// Alphabet size
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    /// Whether a color may appear more than once in a codeword
    #[inline]
    #[must_use]
    pub const fn repeatable(&self) -> bool {
        self.repeatable
    }

    /// Number of codewords allowed by these rules
    ///
    /// `colors^pegs` with repetition, `colors!/(colors-pegs)!` without.
    #[must_use]
    pub const fn size(&self) -> usize {
        if self.repeatable {
            self.colors.pow(self.pegs as u32)
        } else {
            arrangements(self.colors, self.pegs)
        }
    }
}

/// Number of ordered selections of `k` items out of `n`
#[must_use]
pub(crate) const fn arrangements(n: usize, k: usize) -> usize {
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result *= n - i;
        i += 1;
    }
    result
}

impl Default for Rules {
    /// Classic Mastermind: 4 pegs, 6 colors, repetition allowed
    fn default() -> Self {
        Self {
            pegs: 4,
            colors: 6,
            repeatable: true,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p{}c{}{}",
            self.pegs,
            self.colors,
            if self.repeatable { 'r' } else { 'n' }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_creation_valid() {
        let rules = Rules::new(4, 6, true).unwrap();
        assert_eq!(rules.pegs(), 4);
        assert_eq!(rules.colors(), 6);
        assert!(rules.repeatable());
    }

    #[test]
    fn rules_size_with_repetition() {
        assert_eq!(Rules::new(4, 6, true).unwrap().size(), 1296);
        assert_eq!(Rules::new(5, 8, true).unwrap().size(), 32768);
        assert_eq!(Rules::new(1, 1, true).unwrap().size(), 1);
    }

    #[test]
    fn rules_size_without_repetition() {
        assert_eq!(Rules::new(4, 6, false).unwrap().size(), 360);
        assert_eq!(Rules::new(4, 10, false).unwrap().size(), 5040);
        assert_eq!(Rules::new(3, 3, false).unwrap().size(), 6);
    }

    #[test]
    fn rules_invalid_pegs() {
        assert_eq!(Rules::new(0, 6, true), Err(RulesError::PegsOutOfRange(0)));
        assert_eq!(
            Rules::new(MAX_PEGS + 1, 6, true),
            Err(RulesError::PegsOutOfRange(MAX_PEGS + 1))
        );
    }

    #[test]
    fn rules_invalid_colors() {
        assert_eq!(Rules::new(4, 0, true), Err(RulesError::ColorsOutOfRange(0)));
        assert_eq!(
            Rules::new(4, MAX_COLORS + 1, true),
            Err(RulesError::ColorsOutOfRange(MAX_COLORS + 1))
        );
    }

    #[test]
    fn rules_too_few_colors_without_repetition() {
        assert_eq!(
            Rules::new(5, 4, false),
            Err(RulesError::TooFewColors { pegs: 5, colors: 4 })
        );
        // Same configuration is fine when repetition is allowed
        assert!(Rules::new(5, 4, true).is_ok());
    }

    #[test]
    fn rules_display() {
        assert_eq!(Rules::new(4, 6, true).unwrap().to_string(), "p4c6r");
        assert_eq!(Rules::new(4, 10, false).unwrap().to_string(), "p4c10n");
    }

    #[test]
    fn rules_default_is_classic() {
        assert_eq!(Rules::default(), Rules::new(4, 6, true).unwrap());
    }
}
