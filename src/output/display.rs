//! Display functions for command results

use super::formatters::{create_progress_bar, depth_cell, feedback_pegs};
use crate::commands::{
    CanonicalExpansion, REPORT_DEPTH, RoundOutcome, SimulationResult, SolveResult, TreeReport,
};
use crate::core::Rules;
use crate::solver::{BreakerOptions, BreakerState};
use colored::Colorize;

/// Larger canonical lists are elided at the last level
const CANONICAL_LIST_LIMIT: usize = 20;

const COLUMN_WIDTH: usize = 12;

/// Print the game settings block
pub fn print_game_settings(rules: &Rules) {
    println!("\n{}", "Game Settings".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Number of pegs:      {}", rules.pegs());
    println!("  Number of colors:    {}", rules.colors());
    println!("  Color repeatable:    {}", rules.repeatable());
    println!("  Number of codewords: {}", rules.size());
}

/// Print the guess selection options block
pub fn print_options(options: &BreakerOptions, symmetry: bool) {
    println!("\n{}", "Options".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Optimize obvious guess: {}", options.optimize_obvious);
    println!("  Guess possibility only: {}", options.possibility_only);
    println!("  Symmetry reduction:     {symmetry}");
}

/// Print the strategy tree comparison table
pub fn print_tree_reports(reports: &[TreeReport]) {
    println!("\n{}", "Frequency Table".bright_cyan().bold());
    println!("{}", "─".repeat(98).cyan());

    let mut header = format!("{:>15}: {:>6} {:>6}", "Strategy", "Total", "Avg");
    for depth in 1..REPORT_DEPTH {
        header.push_str(&format!(" {depth:>4}"));
    }
    header.push_str(&format!(" {:>4} {:>8}", format!(">{}", REPORT_DEPTH - 1), "Time"));
    println!("{}", header.bold());

    let best = reports.iter().map(|r| r.total_guesses).min().unwrap_or(0);
    for report in reports {
        let total = format!("{:6}", report.total_guesses);
        let total = if report.total_guesses == best {
            total.green().bold()
        } else {
            total.normal()
        };
        let cells: Vec<String> = report.depths.iter().map(|&c| depth_cell(c)).collect();
        println!(
            "{:>15}: {} {:6.3} {} {:7.2}s",
            report.name,
            total,
            report.average(),
            cells.join(" "),
            report.duration.as_secs_f64()
        );
    }

    println!("\n📈 {}", "Depth Distribution".bright_cyan().bold());
    for report in reports {
        println!("  {}", report.name.bright_yellow());
        let max_count = report.depths.iter().copied().max().unwrap_or(1);
        for (i, &count) in report.depths.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            let pct = count as f64 / report.secrets.max(1) as f64 * 100.0;
            println!(
                "    {:>2}: {} {count:6} ({pct:5.1}%)",
                i + 1,
                bar.green()
            );
        }
        println!(
            "    max depth {}, {} tree nodes",
            report.max_depth, report.nodes
        );
    }
}

/// Print a side-by-side simulation
pub fn print_simulation(result: &SimulationResult, rules: &Rules) {
    println!(
        "\n🎯 Secret: {}",
        result.secret.to_string().bright_yellow().bold()
    );

    let mut header = " # ".to_string();
    for run in &result.runs {
        header.push_str(&format!("{:<width$}", run.name, width = COLUMN_WIDTH));
    }
    println!("\n{}", header.bold());
    println!("{}", "-".repeat(3 + COLUMN_WIDTH * result.runs.len()));

    for round in 0..result.round_count() {
        let mut line = format!("{:2} ", round + 1);
        for run in &result.runs {
            let cell = match run.rounds.get(round) {
                Some(RoundOutcome::Guess {
                    guess, feedback, ..
                }) => {
                    let text = format!("{guess}:{feedback}");
                    let padded = format!("{text:<width$}", width = COLUMN_WIDTH);
                    if feedback.is_perfect(rules) {
                        padded.green().bold().to_string()
                    } else {
                        padded
                    }
                }
                Some(RoundOutcome::Fail) => {
                    format!("{:<width$}", "FAIL", width = COLUMN_WIDTH)
                        .red()
                        .bold()
                        .to_string()
                }
                None => " ".repeat(COLUMN_WIDTH),
            };
            line.push_str(&cell);
        }
        println!("{}", line.trim_end());
    }

    println!();
    for run in &result.runs {
        let status = match run.state {
            BreakerState::Solved => format!("solved in {}", run.guesses()).green(),
            BreakerState::Failed => "failed".red(),
            BreakerState::Active => "unfinished".yellow(),
        };
        println!("  {:<15} {status}", run.name);
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, rules: &Rules, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess,
            feedback_pegs(step.feedback, rules.pegs()),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Guess pool: {} canonical", step.pool_size);

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print a canonical guess expansion
pub fn print_canonical(expansion: &CanonicalExpansion) {
    print_canonical_level(expansion, 0);
    println!(
        "\nCanonical guesses at the last level: {}",
        expansion.leaf_count().to_string().bright_yellow().bold()
    );
}

fn print_canonical_level(expansion: &CanonicalExpansion, level: usize) {
    let indent = "  ".repeat(level);
    if expansion.children.is_empty() {
        let count = format!("[{level}:{}]", expansion.guesses.len());
        if expansion.guesses.len() > CANONICAL_LIST_LIMIT {
            println!("{indent}{} ...", count.cyan());
        } else {
            let list: Vec<String> = expansion.guesses.iter().map(ToString::to_string).collect();
            println!("{indent}{} {}", count.cyan(), list.join(" "));
        }
        return;
    }

    for (i, (guess, child)) in expansion.guesses.iter().zip(&expansion.children).enumerate() {
        println!("{indent}{} {}", format!("[{level}:{i}]").cyan(), guess.to_string().bold());
        print_canonical_level(child, level + 1);
    }
}
