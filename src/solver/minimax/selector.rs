//! Minimax guess selection
//!
//! Picks the candidate whose largest response group is smallest.

use super::calculator::calculate_max_group;
use crate::core::Code;
use rayon::prelude::*;

/// Select the candidate that minimizes the worst-case group size
///
/// Every candidate is scored against the whole candidate set (itself
/// included). Ties go to the candidate that comes first in `candidates`,
/// so the result does not depend on how the parallel work is scheduled.
///
/// Returns the selected code and its score, or `None` if `candidates` is
/// empty.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::select_best_guess;
///
/// let candidates: Vec<Code> = ["1111", "2222", "1212"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let (best, score) = select_best_guess(&candidates).unwrap();
/// assert!(candidates.contains(&best));
/// assert!(score <= candidates.len());
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Code]) -> Option<(Code, usize)> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (calculate_max_group(guess, candidates), index, guess))
        .min_by_key(|&(score, index, _)| (score, index))
        .map(|(score, _, guess)| (guess, score))
}
