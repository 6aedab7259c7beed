//! Terminal output formatting
//!
//! Board rendering, coloured codes and clue pegs, and pretty-printing of
//! command results.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::render_board;
pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
