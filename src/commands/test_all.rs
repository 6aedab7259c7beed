//! Test all secrets - comprehensive engine evaluation
//!
//! Runs the engine against every code in the space and collects statistics.

use super::solve::solve_secret;
use crate::core::Code;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: Vec<Code>,
    pub turn_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub hardest: Vec<(Code, usize)>,
    pub second_guess_used: FxHashMap<Code, usize>,
}

/// Run the engine on every secret in enumeration order
///
/// `limit` restricts the run to the first N codes.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or the engine
/// reports an inconsistent clue state.
pub fn run_test_all(limit: Option<usize>, max_turns: usize) -> Result<TestAllStatistics> {
    let secrets: Vec<Code> = Code::all()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let results = collect_results(&secrets, max_turns, Some(&pb))?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&results))
}

fn collect_results(
    secrets: &[Code],
    max_turns: usize,
    pb: Option<&ProgressBar>,
) -> Result<Vec<SecretTestResult>> {
    let mut results: Vec<SecretTestResult> = Vec::with_capacity(secrets.len());

    for (idx, &secret) in secrets.iter().enumerate() {
        let start = Instant::now();
        let outcome = solve_secret(secret, max_turns)?;

        results.push(SecretTestResult {
            secret,
            guesses: outcome.steps.iter().map(|step| step.guess).collect(),
            success: outcome.success,
            duration: start.elapsed(),
        });

        if let Some(pb) = pb {
            if idx % 10 == 0 {
                let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
                if !solved.is_empty() {
                    let avg = solved.iter().map(|r| r.guesses.len()).sum::<usize>() as f64
                        / solved.len() as f64;
                    pb.set_message(format!("Avg: {avg:.2}"));
                }
            }
            pb.inc(1);
        }
    }

    Ok(results)
}

fn summarize(results: &[SecretTestResult]) -> TestAllStatistics {
    let total_time = results.iter().map(|r| r.duration).sum();

    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let failed: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret)
        .collect();
    if !failed.is_empty() {
        info!("{} secrets were not solved", failed.len());
    }

    let mut turn_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut second_guess_used: FxHashMap<Code, usize> = FxHashMap::default();
    for result in results {
        if result.success {
            *turn_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }
        if let Some(&second) = result.guesses.get(1) {
            *second_guess_used.entry(second).or_insert(0) += 1;
        }
    }

    let total_turns: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_turns = if solved.is_empty() {
        0.0
    } else {
        total_turns as f64 / solved.len() as f64
    };

    let max_turns = solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0);
    let min_turns = solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0);

    let mut hardest: Vec<(Code, usize)> = solved
        .iter()
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest.sort_by_key(|&(secret, turns)| (std::cmp::Reverse(turns), secret));
    hardest.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed,
        turn_distribution,
        total_time,
        average_turns,
        max_turns,
        min_turns,
        hardest,
        second_guess_used,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics, max_turns: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Not solved in {max_turns}:    {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average turns:        {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = *stats.turn_distribution.values().max().unwrap_or(&1);
    for turns in 1..=max_turns {
        let count = stats.turn_distribution.get(&turns).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {turns:2} turns: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, turns) in stats.hardest.iter().take(5) {
            println!("  {} ({turns} turns)", secret.to_string().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for secret in stats.failed.iter().take(10) {
            println!("  {}", secret.to_string().red());
        }
        if stats.failed.len() > 10 {
            println!("  ... and {} more", stats.failed.len() - 10);
        }
    }

    println!("\n🎯 Second Guess Usage");
    let mut second_guesses: Vec<(Code, usize)> = stats
        .second_guess_used
        .iter()
        .map(|(&code, &count)| (code, count))
        .collect();
    second_guesses.sort_by_key(|&(code, count)| (std::cmp::Reverse(count), code));

    for (code, count) in second_guesses.iter().take(5) {
        let percentage = *count as f64 / total * 100.0;
        println!("  {code}: {count} times ({percentage:.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_run_covers_first_codes() {
        let secrets: Vec<Code> = Code::all().into_iter().take(4).collect();
        let results = collect_results(&secrets, 12, None).unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].secret.to_string(), "1111");
        for result in &results {
            if result.success {
                assert_eq!(result.guesses.last(), Some(&result.secret));
            }
            assert!(result.guesses.len() <= 12);
        }
    }

    #[test]
    fn summary_counts_add_up() {
        let secrets: Vec<Code> = ["1122", "1234", "3456", "2525"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let results = collect_results(&secrets, 12, None).unwrap();
        let stats = summarize(&results);

        assert_eq!(stats.total_secrets, 4);
        assert_eq!(stats.solved + stats.failed.len(), 4);
        assert_eq!(stats.turn_distribution.values().sum::<usize>(), stats.solved);
        assert_eq!(stats.min_turns, 1);
        assert!(stats.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn second_guess_tracks_opening_response() {
        let secrets: Vec<Code> = ["3456", "4356"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let results = collect_results(&secrets, 12, None).unwrap();
        let stats = summarize(&results);

        // Both secrets give all-absent clues for the opening
        assert_eq!(stats.second_guess_used.get(&"1233".parse().unwrap()), Some(&2));
    }

    #[test]
    fn empty_summary() {
        let stats = summarize(&[]);

        assert_eq!(stats.total_secrets, 0);
        assert!(stats.average_turns.abs() < f64::EPSILON);
        assert!(stats.hardest.is_empty());
    }
}
