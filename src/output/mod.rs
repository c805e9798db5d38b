//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_canonical, print_game_settings, print_options, print_simulation, print_solve_result,
    print_tree_reports,
};
