//! Display functions for command results

use super::formatters::{clue_pegs, code_cells, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, details: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let (pegs, _) = clue_pegs(step.clues);
        println!(
            "\nTurn {:2}: {}|  {} {}",
            i + 1,
            code_cells(step.guess),
            step.clues,
            pegs
        );

        if details {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Worst case: {score} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} turns!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} turns", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of code analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CODE ANALYSIS:".bright_cyan().bold(),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Rank:        #{} by worst case", result.rank);

    println!("\n📈 {}", "Response groups:".bright_cyan().bold());
    for &(value, size) in &result.groups {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        println!("   {value:+2}: {} {size:4}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut turns: Vec<usize> = result.distribution.keys().copied().collect();
    turns.sort_unstable();
    for turn_count in turns {
        let count = result.distribution[&turn_count];
        let pct = (count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turn_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
