//! Formatting utilities for terminal output

use crate::core::{Clue, ClueSequence, Code};
use colored::{ColoredString, Colorize};

/// Peg glyph used for clue markers
pub const PEG: &str = "\u{2022}";

/// Render a single symbol as a coloured cell like `   3   `
#[must_use]
pub fn symbol_cell(symbol: u8) -> ColoredString {
    let cell = format!("   {symbol}   ");
    match symbol {
        1 => cell.on_magenta(),
        2 => cell.on_cyan(),
        3 => cell.on_red(),
        4 => cell.on_blue(),
        5 => cell.on_green(),
        _ => cell.on_yellow(),
    }
    .bold()
}

/// Render a code as four coloured cells separated by `|`
#[must_use]
pub fn code_cells(code: Code) -> String {
    code.symbols()
        .iter()
        .map(|&s| format!("|{}", symbol_cell(s)))
        .collect()
}

/// Render clues as pegs: red for exact, plain for present, nothing for absent
///
/// Returns the rendered pegs and their count, so callers can pad the column
/// without measuring escape codes.
#[must_use]
pub fn clue_pegs(clues: ClueSequence) -> (String, usize) {
    let mut pegs = String::new();
    let mut count = 0;

    for &clue in clues.clues() {
        match clue {
            Clue::ExactMatch => pegs.push_str(&PEG.red().to_string()),
            Clue::Present => pegs.push_str(PEG),
            Clue::Absent => continue,
        }
        count += 1;
    }

    (pegs, count)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
