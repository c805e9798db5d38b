//! Symmetry reduction
//!
//! Two guesses are equivalent when some peg permutation combined with a
//! relabeling of not-yet-distinguished colors maps one onto the other.
//! Searching one representative per class loses nothing.

mod filter;
mod permutation;

pub use filter::{ConstraintEquivalenceFilter, EquivalenceFilter, IdentityFilter};
pub use permutation::CodewordPermutation;
