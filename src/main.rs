//! Mastermind - CLI
//!
//! Play Mastermind against the computer, let the engine assist with a game
//! played elsewhere, or measure the engine on known secrets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::{LevelFilter, debug};
use mastermind::{
    commands::{
        DEFAULT_MAX_TURNS, GameConfig, Role, SolveConfig, analyze_code, print_test_all_statistics,
        run_assist, run_benchmark, run_play, run_test_all, solve_code,
    },
    core::CODE_SPACE_SIZE,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with a minimax code-breaking engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of turns the code breaker gets
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS, value_parser = parse_max_turns)]
    max_turns: usize,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer (default)
    Play {
        /// Skip the role prompt for the first game
        #[arg(short, long, value_enum)]
        role: Option<Role>,
    },

    /// Get guess suggestions for a game played elsewhere
    Assist,

    /// Let the engine break a specific secret
    Solve {
        /// The secret code, e.g. 3456
        secret: String,

        /// Show candidate counts and worst-case scores per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze how a guess splits all possible secrets
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark the engine on random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the engine against every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse a turn limit, which must allow at least one guess
fn parse_max_turns(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(turns) => Ok(turns),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    debug!("Max turns: {}", cli.max_turns);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { role: None });

    match command {
        Commands::Play { role } => run_play(
            role,
            &GameConfig {
                max_turns: cli.max_turns,
            },
        ),
        Commands::Assist => run_assist(cli.max_turns),
        Commands::Solve { secret, details } => {
            let config = SolveConfig {
                secret,
                max_turns: cli.max_turns,
            };
            let result = solve_code(&config)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { code } => {
            let result = analyze_code(&code)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random secrets...");
            let result = run_benchmark(count, seed, cli.max_turns)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Engine Test ");
            println!("{}", "═".repeat(70));
            println!(
                "\nTesting against {} possible secrets",
                limit.map_or(CODE_SPACE_SIZE, |n| n.min(CODE_SPACE_SIZE))
            );
            println!("Max turns: {}\n", cli.max_turns);

            let stats = run_test_all(limit, cli.max_turns)?;
            print_test_all_statistics(&stats, cli.max_turns);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_turns_must_be_positive() {
        assert_eq!(parse_max_turns("12"), Ok(12));
        assert_eq!(parse_max_turns("1"), Ok(1));
        assert!(parse_max_turns("0").is_err());
        assert!(parse_max_turns("-3").is_err());
        assert!(parse_max_turns("many").is_err());
    }

    #[test]
    fn cli_rejects_zero_turns() {
        assert!(Cli::try_parse_from(["mastermind", "--max-turns", "0", "assist"]).is_err());

        let cli = Cli::try_parse_from(["mastermind", "solve", "3456", "--max-turns", "5"]).unwrap();
        assert_eq!(cli.max_turns, 5);

        let cli = Cli::try_parse_from(["mastermind"]).unwrap();
        assert_eq!(cli.max_turns, DEFAULT_MAX_TURNS);
    }
}
