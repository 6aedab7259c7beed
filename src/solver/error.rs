use thiserror::Error;

/// Errors raised by the guessing engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Filtering left no candidate; the clues cannot belong to any code
    #[error("clues received on turn {turn} are inconsistent with every possible code")]
    InconsistentClueState { turn: usize },

    /// A turn after the opening was requested without clues for the previous guess
    #[error("turn {turn} requires clues for the previous guess")]
    MissingClues { turn: usize },
}
