//! Mastermind Solver
//!
//! Builds complete Mastermind strategy trees for several partition
//! heuristics, keeping the search small by only considering one guess per
//! symmetry class.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Codeword, Engine, Rules};
//!
//! let engine = Engine::new(Rules::new(4, 6, true).unwrap());
//! let secret = Codeword::parse("0123", engine.rules()).unwrap();
//! let guess = Codeword::parse("1032", engine.rules()).unwrap();
//!
//! println!("Feedback: {}", engine.compare(&secret, &guess));
//! ```

// Core domain types
pub mod core;

// Symmetry reduction of guesses
pub mod equivalence;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
