//! Minimax-style guess scoring
//!
//! Scores each candidate by the size of its largest response group and
//! selects the candidate with the smallest worst case.

mod calculator;
mod selector;

pub use calculator::{calculate_max_group, response_groups, response_value};
pub use selector::select_best_guess;
