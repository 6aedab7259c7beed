//! Code analysis command
//!
//! Scores a code against the full code space the way the engine would.

use crate::core::Code;
use crate::solver::minimax::{calculate_max_group, response_groups};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Result of analyzing a code
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    pub worst_case: usize,
    /// (response value, group size), ordered by response value
    pub groups: Vec<(i8, usize)>,
    pub expected_remaining: f64,
    /// 1-based position of the code when all codes are ordered by score,
    /// then by enumeration order
    pub rank: usize,
}

/// Analyze a code against the full 1296-code space
///
/// # Errors
///
/// Returns an error if the code is not four digits in 1..=6.
pub fn analyze_code(code: &str) -> Result<AnalysisResult> {
    let code: Code = code
        .parse()
        .with_context(|| format!("Invalid code '{code}'"))?;

    let all = Code::all();
    Ok(analyze_against(code, &all))
}

/// Analyze a code against an arbitrary ordered candidate set
#[must_use]
pub fn analyze_against(code: Code, candidates: &[Code]) -> AnalysisResult {
    let mut groups: Vec<(i8, usize)> = response_groups(code, candidates).into_iter().collect();
    groups.sort_unstable_by_key(|&(value, _)| value);

    let total_candidates = candidates.len();
    let worst_case = groups.iter().map(|&(_, size)| size).max().unwrap_or(0);
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        groups
            .iter()
            .map(|&(_, size)| (size * size) as f64)
            .sum::<f64>()
            / total_candidates as f64
    };

    let position = candidates.iter().position(|&c| c == code);
    let better = candidates
        .par_iter()
        .enumerate()
        .filter(|&(index, &other)| {
            let score = calculate_max_group(other, candidates);
            score < worst_case
                || (score == worst_case && position.is_some_and(|p| index < p))
        })
        .count();

    AnalysisResult {
        code,
        total_candidates,
        worst_case,
        groups,
        expected_remaining,
        rank: better + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening() {
        let result = analyze_code("1122").unwrap();

        assert_eq!(result.code, Code::OPENING);
        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 400);
        assert_eq!(
            result.groups.iter().map(|&(_, size)| size).sum::<usize>(),
            1296
        );
        assert!(result.groups.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn analyze_invalid_code() {
        assert!(analyze_code("7777").is_err());
        assert!(analyze_code("12345").is_err());
    }

    #[test]
    fn expected_remaining_bounds() {
        let result = analyze_code("1234").unwrap();

        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case as f64);
    }

    #[test]
    fn best_code_ranks_first() {
        let candidates: Vec<Code> = Code::all().into_iter().take(50).collect();
        let (best, score) = crate::solver::minimax::select_best_guess(&candidates).unwrap();

        let result = analyze_against(best, &candidates);
        assert_eq!(result.rank, 1);
        assert_eq!(result.worst_case, score);
    }

    #[test]
    fn empty_candidates() {
        let result = analyze_against(Code::OPENING, &[]);

        assert_eq!(result.worst_case, 0);
        assert!(result.groups.is_empty());
        assert_eq!(result.rank, 1);
    }
}
