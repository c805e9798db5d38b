//! Codeword permutations
//!
//! A permutation rearranges the pegs of a codeword and then relabels its
//! colors. The color relabeling is partial: colors never constrained so far
//! stay unmapped and may later be sent to any unmapped target.

use crate::core::{Codeword, MAX_COLORS, MAX_PEGS, Rules};
use std::fmt;

/// Peg permutation plus partial color map
///
/// Applying it to a codeword `c` gives `color[c[peg[i]]]` at position `i`.
/// The defined part of the color map is always injective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordPermutation {
    pegs: usize,
    peg: [u8; MAX_PEGS],
    color: [Option<u8>; MAX_COLORS],
}

impl CodewordPermutation {
    /// Identity peg permutation with a fully unmapped color map
    #[must_use]
    pub fn identity(rules: &Rules) -> Self {
        let mut peg = [0u8; MAX_PEGS];
        for (i, slot) in peg.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            pegs: rules.pegs(),
            peg,
            color: [None; MAX_COLORS],
        }
    }

    /// Every peg permutation, each paired with an unmapped color map
    ///
    /// Permutations are produced in lexicographic order, identity first.
    #[must_use]
    pub fn all_peg_permutations(rules: &Rules) -> Vec<Self> {
        let n = rules.pegs();
        let mut current = Self::identity(rules);
        let mut out = vec![current];
        while next_permutation(&mut current.peg[..n]) {
            out.push(current);
        }
        out
    }

    /// Source position for each target position
    #[inline]
    #[must_use]
    pub fn peg_map(&self) -> &[u8] {
        &self.peg[..self.pegs]
    }

    /// Image of a color, or `None` while it is unmapped
    #[inline]
    #[must_use]
    pub const fn color_of(&self, color: u8) -> Option<u8> {
        self.color[color as usize]
    }

    /// Whether pegs are left in place and every mapped color maps to itself
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.peg_map().iter().enumerate().all(|(i, &p)| usize::from(p) == i)
            && self
                .color
                .iter()
                .enumerate()
                .all(|(c, target)| target.is_none_or(|t| usize::from(t) == c))
    }

    /// Rearrange pegs without touching colors
    #[must_use]
    pub fn permute_pegs(&self, code: &Codeword) -> Codeword {
        let mut colors = [0u8; MAX_PEGS];
        for (slot, &source) in colors.iter_mut().zip(self.peg_map()) {
            *slot = code.peg(usize::from(source));
        }
        Codeword::from_colors(&colors[..self.pegs])
    }

    /// Apply the full permutation
    ///
    /// Returns `None` if `code` uses a color the map leaves undefined.
    #[must_use]
    pub fn permute(&self, code: &Codeword) -> Option<Codeword> {
        let mut colors = [0u8; MAX_PEGS];
        for (slot, &source) in colors.iter_mut().zip(self.peg_map()) {
            *slot = self.color_of(code.peg(usize::from(source)))?;
        }
        Some(Codeword::from_colors(&colors[..self.pegs]))
    }

    /// Define the image of an unmapped color
    ///
    /// # Panics
    /// Panics in debug mode if `color` is already mapped.
    #[inline]
    pub fn map_color(&mut self, color: u8, target: u8) {
        debug_assert!(self.color[usize::from(color)].is_none());
        self.color[usize::from(color)] = Some(target);
    }

    /// Extend the color map so that `guess` maps onto itself
    ///
    /// Returns `false` when no extension exists, i.e. some color would need
    /// two different images. The map may be partially extended in that case;
    /// callers discard the permutation.
    pub fn fix(&mut self, guess: &Codeword) -> bool {
        let permuted = self.permute_pegs(guess);
        for (&source, &target) in permuted.pegs().iter().zip(guess.pegs()) {
            match self.color[usize::from(source)] {
                None => self.color[usize::from(source)] = Some(target),
                Some(image) if image == target => {}
                Some(_) => return false,
            }
        }
        true
    }
}

impl fmt::Display for CodewordPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in self.peg_map() {
            write!(f, "{p}")?;
        }
        write!(f, "|")?;
        for target in &self.color {
            match target {
                Some(t) => write!(f, "{t}")?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

/// Advance `items` to the next lexicographic permutation
///
/// Returns `false` (leaving `items` sorted ascending) after the last one.
fn next_permutation(items: &mut [u8]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        items.reverse();
        return false;
    };
    let value = items[pivot];
    let successor = items
        .iter()
        .rposition(|&x| x > value)
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Rules {
        Rules::new(4, 6, true).unwrap()
    }

    #[test]
    fn next_permutation_enumerates_all() {
        let mut items = [0u8, 1, 2];
        let mut seen = vec![items];
        while next_permutation(&mut items) {
            seen.push(items);
        }
        assert_eq!(
            seen,
            vec![[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]
        );
        assert_eq!(items, [0, 1, 2]);
    }

    #[test]
    fn all_peg_permutations_count() {
        assert_eq!(CodewordPermutation::all_peg_permutations(&rules()).len(), 24);
        let one = Rules::new(1, 3, true).unwrap();
        assert_eq!(CodewordPermutation::all_peg_permutations(&one).len(), 1);
    }

    #[test]
    fn first_permutation_is_identity() {
        let all = CodewordPermutation::all_peg_permutations(&rules());
        assert!(all[0].is_identity());
        assert!(all[1..].iter().all(|p| !p.is_identity()));
    }

    #[test]
    fn permute_pegs_rearranges() {
        let all = CodewordPermutation::all_peg_permutations(&rules());
        // Last permutation reverses the pegs
        let reverse = all.last().unwrap();
        assert_eq!(reverse.peg_map(), &[3, 2, 1, 0]);

        let code = Codeword::from_colors(&[0, 1, 2, 5]);
        assert_eq!(reverse.permute_pegs(&code).to_string(), "5210");
    }

    #[test]
    fn permute_requires_mapped_colors() {
        let mut p = CodewordPermutation::identity(&rules());
        let code = Codeword::from_colors(&[0, 0, 1, 1]);
        assert_eq!(p.permute(&code), None);

        p.map_color(0, 3);
        p.map_color(1, 4);
        assert_eq!(p.permute(&code), Some(Codeword::from_colors(&[3, 3, 4, 4])));
    }

    #[test]
    fn fix_identity_maps_colors_to_themselves() {
        let mut p = CodewordPermutation::identity(&rules());
        let guess = Codeword::from_colors(&[0, 0, 1, 2]);
        assert!(p.fix(&guess));
        assert_eq!(p.color_of(0), Some(0));
        assert_eq!(p.color_of(1), Some(1));
        assert_eq!(p.color_of(2), Some(2));
        assert_eq!(p.color_of(3), None);
        assert!(p.is_identity());
    }

    #[test]
    fn fix_swaps_colors_for_swapped_pegs() {
        // Swap the two halves: 0011 -> 1100, so 0 <-> 1 restores the guess
        let all = CodewordPermutation::all_peg_permutations(&rules());
        let mut p = *all
            .iter()
            .find(|p| p.peg_map() == [2, 3, 0, 1])
            .unwrap();
        let guess = Codeword::from_colors(&[0, 0, 1, 1]);
        assert!(p.fix(&guess));
        assert_eq!(p.color_of(0), Some(1));
        assert_eq!(p.color_of(1), Some(0));
        assert_eq!(p.permute(&guess), Some(guess));
    }

    #[test]
    fn fix_fails_when_color_needs_two_images() {
        // Swapping pegs 0 and 2 would need both 0 -> 0 and 0 -> 1
        let all = CodewordPermutation::all_peg_permutations(&rules());
        let mut p = *all
            .iter()
            .find(|p| p.peg_map() == [1, 0, 2, 3])
            .unwrap();
        let guess = Codeword::from_colors(&[0, 0, 1, 2]);
        assert!(p.fix(&guess)); // swapping two equal pegs is harmless

        let mut q = *all
            .iter()
            .find(|p| p.peg_map() == [2, 1, 0, 3])
            .unwrap();
        assert!(!q.fix(&guess));
    }

    #[test]
    fn display_shows_pegs_and_colors() {
        let mut p = CodewordPermutation::identity(&rules());
        p.map_color(1, 2);
        assert_eq!(p.to_string(), "0123|-2--------");
    }
}
