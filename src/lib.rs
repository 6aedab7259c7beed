//! Mastermind
//!
//! A Mastermind game and code-breaking engine for the classic 4-position,
//! 6-colour variant. The engine narrows the 1296 possible codes with the
//! clues it receives and picks each guess by minimax over response groups.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{ClueSequence, Code};
//! use mastermind::solver::GuessingEngine;
//!
//! let secret: Code = "3456".parse().unwrap();
//! let mut engine = GuessingEngine::new();
//!
//! let opening = engine.guess(1, None).unwrap();
//! assert_eq!(opening.to_string(), "1122");
//!
//! let clues = ClueSequence::evaluate(opening, secret);
//! let next = engine.guess(2, Some(&clues)).unwrap();
//! assert_eq!(next.to_string(), "1233");
//! ```

// Core domain types
pub mod core;

// Guessing engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
