//! Core domain types for Mastermind
//!
//! Codes, clues and the clue evaluator. Everything here is pure and
//! independent of the guessing engine.

mod clue;
mod code;

pub use clue::{Clue, ClueError, ClueSequence};
pub use code::{CODE_LENGTH, CODE_SPACE_SIZE, Code, CodeError, SYMBOL_COUNT};
