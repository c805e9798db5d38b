//! Mastermind Solver - CLI
//!
//! Compares guessing strategies over complete strategy trees and plays
//! individual games.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, compare_strategies, expand_canonical, random_secret, simulate, solve_secret,
    },
    core::{Codeword, Engine, Rules},
    equivalence::{ConstraintEquivalenceFilter, EquivalenceFilter, IdentityFilter},
    output::{
        print_canonical, print_game_settings, print_options, print_simulation, print_solve_result,
        print_tree_reports,
    },
    solver::{BreakerOptions, STRATEGY_NAMES, StrategyType, TreeOptions},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind strategy explorer with symmetry reduction",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a codeword
    #[arg(short, long, global = true, default_value = "4")]
    pegs: usize,

    /// Number of colors
    #[arg(short, long, global = true, default_value = "6")]
    colors: usize,

    /// Forbid repeated colors in a codeword
    #[arg(long, global = true)]
    no_repeat: bool,

    /// Skip scoring when the answer is obvious
    #[arg(long, global = true)]
    obvious: bool,

    /// Only guess codewords that could still be the secret
    #[arg(long, global = true)]
    possibility_only: bool,

    /// Comma-separated strategies: simple, minmax, minavg, entropy, entropy-approx, parts
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Disable symmetry reduction of guesses
    #[arg(long, global = true)]
    no_symmetry: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full strategy tree of each strategy and compare them (default)
    Tree {
        /// Build subtrees on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Play one secret with every strategy side by side
    Simulate {
        /// Secret such as 0123 (random if omitted)
        secret: Option<String>,

        /// Stop after this many rounds
        #[arg(short = 'n', long, default_value = "10")]
        max_rounds: usize,
    },

    /// Solve one secret with the first selected strategy
    Solve {
        /// Secret such as 0123 (random if omitted)
        secret: Option<String>,

        /// Show candidate counts and entropy per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// List canonical guesses, expanding each level below the first
    Canonical {
        /// Number of levels to expand
        #[arg(short, long, default_value = "1")]
        levels: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let rules =
        Rules::new(cli.pegs, cli.colors, !cli.no_repeat).context("Invalid game rules")?;
    let engine = Engine::new(rules);

    let options = BreakerOptions {
        optimize_obvious: cli.obvious,
        possibility_only: cli.possibility_only,
    };
    let strategies = parse_strategies(cli.strategy.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tree { sequential: false });

    if cli.no_symmetry {
        run_command(command, &engine, &strategies, options, &IdentityFilter, false)
    } else {
        let filter = ConstraintEquivalenceFilter::new(&engine);
        run_command(command, &engine, &strategies, options, &filter, true)
    }
}

/// Resolve the `--strategy` list, defaulting to every strategy
fn parse_strategies(list: Option<&str>) -> Result<Vec<StrategyType>> {
    let Some(list) = list else {
        return Ok(StrategyType::all());
    };
    let strategies = list
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| {
            StrategyType::from_name(name).ok_or_else(|| {
                anyhow!(
                    "Unknown strategy '{}', expected one of: {}",
                    name.trim(),
                    STRATEGY_NAMES.join(", ")
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if strategies.is_empty() {
        return Err(anyhow!("No strategy selected"));
    }
    Ok(strategies)
}

fn run_command<F: EquivalenceFilter>(
    command: Commands,
    engine: &Engine,
    strategies: &[StrategyType],
    options: BreakerOptions,
    filter: &F,
    symmetry: bool,
) -> Result<()> {
    match command {
        Commands::Tree { sequential } => {
            run_tree_command(engine, strategies, options, filter, symmetry, !sequential)
        }
        Commands::Simulate { secret, max_rounds } => {
            let secret = resolve_secret(engine, secret.as_deref())?;
            print_game_settings(engine.rules());
            let result = simulate(engine, strategies, filter, options, secret, max_rounds);
            print_simulation(&result, engine.rules());
            Ok(())
        }
        Commands::Solve { secret, verbose } => {
            let secret = resolve_secret(engine, secret.as_deref())?;
            let strategy = strategies
                .first()
                .ok_or_else(|| anyhow!("No strategy selected"))?;
            let result = solve_secret(
                engine,
                strategy,
                filter.clone(),
                options,
                &SolveConfig::new(secret),
            );
            print_solve_result(&result, engine.rules(), verbose);
            Ok(())
        }
        Commands::Canonical { levels } => {
            print_game_settings(engine.rules());
            println!();
            let expansion = expand_canonical(engine, filter, levels);
            print_canonical(&expansion);
            Ok(())
        }
    }
}

fn run_tree_command<F: EquivalenceFilter>(
    engine: &Engine,
    strategies: &[StrategyType],
    options: BreakerOptions,
    filter: &F,
    symmetry: bool,
    parallel: bool,
) -> Result<()> {
    print_game_settings(engine.rules());
    print_options(&options, symmetry);

    let tree_options = TreeOptions {
        breaker: options,
        parallel,
    };
    let reports = compare_strategies(engine, strategies, filter, &tree_options)
        .context("Strategy tree construction failed")?;
    print_tree_reports(&reports);
    Ok(())
}

/// Parse the secret argument or pick one at random
fn resolve_secret(engine: &Engine, text: Option<&str>) -> Result<Codeword> {
    match text {
        Some(text) => Codeword::parse(text, engine.rules())
            .with_context(|| format!("Invalid secret '{text}'")),
        None => random_secret(engine).ok_or_else(|| anyhow!("Empty codeword universe")),
    }
}
