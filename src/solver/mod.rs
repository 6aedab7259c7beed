//! Mastermind guessing engine
//!
//! Candidate pruning, minimax-style scoring and the stateful engine that
//! ties them together.

mod engine;
mod error;
mod filter;
pub mod minimax;

pub use engine::GuessingEngine;
pub use error::EngineError;
pub use filter::apply_clues;
