//! Core domain types for Mastermind
//!
//! Rules, codewords, feedback and the engine that ties them together.
//! Everything here is deterministic and read-only once constructed.

mod codeword;
mod engine;
mod feedback;
mod rules;

pub use codeword::{Codeword, CodewordError};
pub use engine::{Engine, compare};
pub use feedback::{Feedback, FeedbackFrequencyTable, FeedbackList};
pub use rules::{MAX_COLORS, MAX_PEGS, Rules, RulesError};
