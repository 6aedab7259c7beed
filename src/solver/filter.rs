//! Candidate pruning from positional clues

use crate::core::{Clue, ClueSequence, Code};

/// Prune candidates using the clues observed for `reference`
///
/// For each position `i`, with `v` the symbol `reference` holds there:
/// - `ExactMatch` keeps candidates with `v` at position `i`
/// - `Present` keeps candidates containing `v` anywhere
/// - `Absent` keeps every candidate
///
/// Filtering happens in place and preserves the relative order of the
/// survivors.
///
/// # Examples
/// ```
/// use mastermind::core::{ClueSequence, Code};
/// use mastermind::solver::apply_clues;
///
/// let mut candidates = Code::all();
/// let clues: ClueSequence = "X...".parse().unwrap();
///
/// apply_clues(&mut candidates, Code::OPENING, &clues);
/// assert_eq!(candidates.len(), 216);
/// assert!(candidates.iter().all(|c| c.symbol_at(0) == 1));
/// ```
pub fn apply_clues(candidates: &mut Vec<Code>, reference: Code, clues: &ClueSequence) {
    for (position, &clue) in clues.clues().iter().enumerate() {
        let symbol = reference.symbol_at(position);

        match clue {
            Clue::ExactMatch => candidates.retain(|c| c.symbol_at(position) == symbol),
            Clue::Present => candidates.retain(|c| c.contains(symbol)),
            // Absent symbols are not used for pruning
            Clue::Absent => {}
        }
    }
}
