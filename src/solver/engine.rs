//! Stateful Mastermind guessing engine

use super::error::EngineError;
use super::filter::apply_clues;
use super::minimax::select_best_guess;
use crate::core::{ClueSequence, Code};
use log::debug;

/// Automated code breaker
///
/// Owns the candidate set and the previous guess for one game. Each call to
/// [`GuessingEngine::guess`] prunes the candidates with the clues for the
/// previous guess and picks the candidate with the smallest worst-case
/// response group.
#[derive(Debug, Clone)]
pub struct GuessingEngine {
    candidates: Vec<Code>,
    previous_guess: Code,
}

impl GuessingEngine {
    /// Create an engine for a new game
    ///
    /// Starts with all 1296 codes as candidates and the opening code as the
    /// previous guess.
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: Code::all(),
            previous_guess: Code::OPENING,
        }
    }

    /// Propose the guess for `turn`
    ///
    /// # Parameters
    /// - `turn`: 1-based turn number
    /// - `clues`: clues for the previous guess; ignored on turn 1
    ///
    /// Turn 1 always returns [`Code::OPENING`]. Later turns remove the
    /// previous guess from the candidates, prune with `clues`, and select the
    /// candidate whose largest response group is smallest, breaking ties by
    /// enumeration order.
    ///
    /// # Errors
    /// - `EngineError::MissingClues` if `turn > 1` and `clues` is `None`
    /// - `EngineError::InconsistentClueState` if pruning empties the
    ///   candidate set
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{ClueSequence, Code};
    /// use mastermind::solver::GuessingEngine;
    ///
    /// let secret: Code = "3456".parse().unwrap();
    /// let mut engine = GuessingEngine::new();
    ///
    /// let first = engine.guess(1, None).unwrap();
    /// assert_eq!(first, Code::OPENING);
    ///
    /// let clues = ClueSequence::evaluate(first, secret);
    /// let second = engine.guess(2, Some(&clues)).unwrap();
    /// assert_eq!(second.to_string(), "1233");
    /// assert_eq!(engine.candidate_count(), 1295);
    /// ```
    pub fn guess(
        &mut self,
        turn: usize,
        clues: Option<&ClueSequence>,
    ) -> Result<Code, EngineError> {
        if turn <= 1 {
            self.previous_guess = Code::OPENING;
            debug!("Turn {turn}: opening with {}", Code::OPENING);
            return Ok(Code::OPENING);
        }

        let clues = clues.ok_or(EngineError::MissingClues { turn })?;
        let previous = self.previous_guess;

        self.candidates.retain(|&c| c != previous);
        apply_clues(&mut self.candidates, previous, clues);
        debug!(
            "Turn {turn}: {previous} scored {clues}, {} candidates remain",
            self.candidates.len()
        );

        let (guess, score) = select_best_guess(&self.candidates)
            .ok_or(EngineError::InconsistentClueState { turn })?;
        debug!("Turn {turn}: selected {guess} (worst case {score})");

        self.previous_guess = guess;
        Ok(guess)
    }

    /// Codes still considered possible, in enumeration order
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The most recently proposed guess
    #[must_use]
    pub const fn previous_guess(&self) -> Code {
        self.previous_guess
    }
}

impl Default for GuessingEngine {
    fn default() -> Self {
        Self::new()
    }
}
