//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format a feedback as key pegs
///
/// `●` for each exact match, `○` for each color-only match, `·` for the rest.
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pegs: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = pegs.saturating_sub(exact + partial);

    let mut result = String::with_capacity(pegs * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(partial));
    result.push_str(&"·".repeat(empty));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a depth count, with `-` for empty buckets
#[must_use]
pub fn depth_cell(count: usize) -> String {
    if count > 0 {
        format!("{count:4}")
    } else {
        "   -".to_string()
    }
}
