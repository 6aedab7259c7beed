//! Worst-case group size calculation
//!
//! Given a guess and a set of candidates, groups the candidates by the
//! response value they would produce and reports the size of the largest
//! group.

use crate::core::{ClueSequence, Code};
use rustc_hash::FxHashMap;

/// Signed response value of `guess` tested against `answer`
///
/// Each position contributes +1 for an exact match, 0 if `answer` contains
/// the guessed symbol elsewhere, and -1 otherwise. The sum lies in -4..=4.
/// Distinct clue sequences can share a value, so this is coarser than a
/// full clue comparison.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::response_value;
///
/// let guess: Code = "1233".parse().unwrap();
/// let answer: Code = "3456".parse().unwrap();
/// assert_eq!(response_value(guess, answer), -2);
/// assert_eq!(response_value(answer, answer), 4);
/// ```
#[inline]
#[must_use]
pub fn response_value(guess: Code, answer: Code) -> i8 {
    ClueSequence::evaluate(guess, answer).signal_sum()
}

/// Calculate the largest response group for a guess
///
/// Returns the worst-case number of candidates that would remain if `guess`
/// were played and the most common response value came back. Returns 0 for
/// an empty candidate set.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::calculate_max_group;
///
/// let candidates: Vec<Code> = ["1234", "1243", "5566"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let guess: Code = "1234".parse().unwrap();
/// assert!(calculate_max_group(guess, &candidates) <= candidates.len());
/// ```
#[must_use]
pub fn calculate_max_group(guess: Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    response_groups(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Count candidates by the response value they produce with the guess
#[must_use]
pub fn response_groups(guess: Code, candidates: &[Code]) -> FxHashMap<i8, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(response_value(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn response_value_bounds() {
        let all = Code::all();
        let guess: Code = "1234".parse().unwrap();
        for &answer in &all {
            let value = response_value(guess, answer);
            assert!((-4..=4).contains(&value));
        }
    }

    #[test]
    fn response_value_per_position_signals() {
        let guess: Code = "1122".parse().unwrap();

        // All absent
        assert_eq!(response_value(guess, "3456".parse().unwrap()), -4);
        // X ? ? ? for 1122 against 1234
        assert_eq!(response_value(guess, "1234".parse().unwrap()), 1);
        // Identical codes
        assert_eq!(response_value(guess, guess), 4);
    }

    #[test]
    fn response_value_is_not_symmetric() {
        let a: Code = "1111".parse().unwrap();
        let b: Code = "1234".parse().unwrap();

        // 1111 vs 1234: X ? ? ? = 1
        assert_eq!(response_value(a, b), 1);
        // 1234 vs 1111: X . . . = -2
        assert_eq!(response_value(b, a), -2);
    }

    #[test]
    fn max_group_empty_candidates() {
        let guess: Code = "1122".parse().unwrap();
        assert_eq!(calculate_max_group(guess, &[]), 0);
    }

    #[test]
    fn max_group_single_candidate() {
        let guess: Code = "1122".parse().unwrap();
        assert_eq!(calculate_max_group(guess, &codes(&["3456"])), 1);
    }

    #[test]
    fn max_group_all_same_response() {
        // 6666 shares no symbols with any candidate
        let guess: Code = "6666".parse().unwrap();
        let candidates = codes(&["1111", "2222", "3333"]);
        assert_eq!(calculate_max_group(guess, &candidates), 3);
    }

    #[test]
    fn max_group_perfect_split() {
        let guess: Code = "1111".parse().unwrap();
        let candidates = codes(&["1111", "2222"]);
        assert_eq!(calculate_max_group(guess, &candidates), 1);
    }

    #[test]
    fn groups_sum_to_candidate_count() {
        let all = Code::all();
        let groups = response_groups(Code::OPENING, &all);

        assert_eq!(groups.values().sum::<usize>(), all.len());
        assert!(groups.keys().all(|v| (-4..=4).contains(v)));
    }

    #[test]
    fn opening_worst_case_over_full_space() {
        let all = Code::all();
        assert_eq!(calculate_max_group(Code::OPENING, &all), 400);
        assert_eq!(calculate_max_group("1234".parse().unwrap(), &all), 420);
        assert_eq!(calculate_max_group("1111".parse().unwrap(), &all), 625);
    }
}
