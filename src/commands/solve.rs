//! Secret solving command
//!
//! Runs a fresh engine against a known secret and records every step.

use crate::core::{ClueSequence, Code};
use crate::solver::GuessingEngine;
use crate::solver::minimax::calculate_max_group;
use anyhow::{Context, Result};

/// Default number of turns a code breaker gets
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
}

/// A single turn of the solution
pub struct GuessStep {
    pub guess: Code,
    pub clues: ClueSequence,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Worst-case group size of the guess; `None` for the opening
    pub score: Option<usize>,
}

/// Solve the secret named in `config`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The engine reports an inconsistent clue state
pub fn solve_code(config: &SolveConfig) -> Result<SolveResult> {
    let secret: Code = config
        .secret
        .parse()
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    solve_secret(secret, config.max_turns)
}

/// Play a fresh engine against `secret` for up to `max_turns` turns
///
/// # Errors
///
/// Returns an error if the engine reports an inconsistent clue state, which
/// cannot happen when clues come from [`ClueSequence::evaluate`].
pub fn solve_secret(secret: Code, max_turns: usize) -> Result<SolveResult> {
    let mut engine = GuessingEngine::new();
    let mut clues: Option<ClueSequence> = None;
    let mut steps = Vec::new();

    for turn in 1..=max_turns {
        let candidates_before = engine.candidate_count();

        let guess = engine
            .guess(turn, clues.as_ref())
            .with_context(|| format!("Engine failed while solving {secret}"))?;

        let candidates_after = engine.candidate_count();
        let score = (turn > 1).then(|| calculate_max_group(guess, engine.candidates()));
        let feedback = ClueSequence::evaluate(guess, secret);

        steps.push(GuessStep {
            guess,
            clues: feedback,
            candidates_before,
            candidates_after,
            score,
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                steps,
                secret,
            });
        }

        clues = Some(feedback);
    }

    Ok(SolveResult {
        success: false,
        steps,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_worked_scenario() {
        let config = SolveConfig::new("3456".to_string());
        let result = solve_code(&config).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 11);
        assert_eq!(result.steps[0].guess, Code::OPENING);
        assert_eq!(result.steps[0].score, None);
        assert_eq!(result.steps[1].guess.to_string(), "1233");
        assert_eq!(result.steps[1].candidates_before, 1296);
        assert_eq!(result.steps[1].candidates_after, 1295);
        assert_eq!(result.steps[1].score, Some(297));
        assert!(result.steps.last().unwrap().clues.is_solved());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let result = solve_code(&SolveConfig::new("6543".to_string())).unwrap();

        assert!(result.success);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_opening_in_one() {
        let result = solve_code(&SolveConfig::new("1122".to_string())).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_code(&SolveConfig::new("1237".to_string())).is_err());
        assert!(solve_code(&SolveConfig::new("abcd".to_string())).is_err());
        assert!(solve_code(&SolveConfig::new("12".to_string())).is_err());
    }

    #[test]
    fn solve_respects_turn_limit() {
        let mut config = SolveConfig::new("3456".to_string());
        config.max_turns = 3;

        let result = solve_code(&config).unwrap();
        assert!(!result.success);
        assert_eq!(result.steps.len(), 3);
    }
}
