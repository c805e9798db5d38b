//! Codeword representation
//!
//! A Codeword stores its symbols inline together with a per-color count table,
//! so it is `Copy` and feedback can be computed without allocating.

use super::rules::{MAX_COLORS, MAX_PEGS, Rules};
use std::fmt;

/// A fixed-length sequence of color indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codeword {
    pegs: [u8; MAX_PEGS],
    len: u8,
    counts: [u8; MAX_COLORS],
}

/// Error type for invalid codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodewordError {
    InvalidLength { expected: usize, got: usize },
    InvalidColor(char),
    RepeatedColor(u8),
}

impl fmt::Display for CodewordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Codeword must have exactly {expected} pegs, got {got}")
            }
            Self::InvalidColor(ch) => write!(f, "Invalid color '{ch}'"),
            Self::RepeatedColor(color) => {
                write!(f, "Color {color} appears more than once but repetition is disabled")
            }
        }
    }
}

impl std::error::Error for CodewordError {}

impl Codeword {
    /// Build a codeword from color indices
    ///
    /// The caller guarantees `colors.len() <= MAX_PEGS` and every color
    /// is below `MAX_COLORS`; use [`Codeword::parse`] for untrusted input.
    ///
    /// # Panics
    /// Panics if the length or a color is out of range.
    #[must_use]
    pub fn from_colors(colors: &[u8]) -> Self {
        assert!(colors.len() <= MAX_PEGS, "too many pegs");
        let mut pegs = [0u8; MAX_PEGS];
        let mut counts = [0u8; MAX_COLORS];
        for (slot, &color) in pegs.iter_mut().zip(colors) {
            *slot = color;
            counts[usize::from(color)] += 1;
        }
        Self {
            pegs,
            len: colors.len() as u8,
            counts,
        }
    }

    /// Parse a codeword such as `"0123"` under the given rules
    ///
    /// Each character is one color; digits `0-9` map to colors 0 through 9.
    ///
    /// # Errors
    /// Returns `CodewordError` if:
    /// - The length differs from `rules.pegs()`
    /// - A character is not a color allowed by the rules
    /// - A color repeats while repetition is disabled
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Codeword, Rules};
    ///
    /// let rules = Rules::new(4, 6, false).unwrap();
    /// let code = Codeword::parse("0123", &rules).unwrap();
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Codeword::parse("0126", &rules).is_err()); // color 6 out of range
    /// assert!(Codeword::parse("0012", &rules).is_err()); // repeated color
    /// ```
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, CodewordError> {
        let chars: Vec<char> = text.trim().chars().collect();
        if chars.len() != rules.pegs() {
            return Err(CodewordError::InvalidLength {
                expected: rules.pegs(),
                got: chars.len(),
            });
        }

        let mut colors = Vec::with_capacity(chars.len());
        for ch in chars {
            let color = ch
                .to_digit(10)
                .filter(|&d| (d as usize) < rules.colors())
                .ok_or(CodewordError::InvalidColor(ch))?;
            colors.push(color as u8);
        }

        let code = Self::from_colors(&colors);
        if !rules.repeatable()
            && let Some(color) = (0..rules.colors() as u8).find(|&c| code.count(c) > 1)
        {
            return Err(CodewordError::RepeatedColor(color));
        }
        Ok(code)
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this codeword has no pegs
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The colors on each peg
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..self.len()]
    }

    /// The color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= MAX_PEGS`
    #[inline]
    #[must_use]
    pub const fn peg(&self, position: usize) -> u8 {
        self.pegs[position]
    }

    /// How many times a color appears
    #[inline]
    #[must_use]
    pub const fn count(&self, color: u8) -> u8 {
        self.counts[color as usize]
    }

    /// Whether a color appears at least once
    #[inline]
    #[must_use]
    pub const fn contains(&self, color: u8) -> bool {
        self.counts[color as usize] > 0
    }

    /// Per-color occurrence counts
    #[inline]
    #[must_use]
    pub(crate) const fn counts(&self) -> &[u8; MAX_COLORS] {
        &self.counts
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in self.pegs() {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
