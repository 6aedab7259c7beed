//! Game board rendering

use super::formatters::{clue_pegs, code_cells};
use crate::core::{ClueSequence, Code};

const RULE: &str = "|====================================================|";
const DIVIDER: &str = "|----------------------------------------------------|";
const BLANK_CELLS: &str = "|       |       |       |       ||           |";

/// Render the board: played turns with their clues, then blank rows up to
/// `max_turns`
#[must_use]
pub fn render_board(history: &[(Code, ClueSequence)], max_turns: usize) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "| Turn ||           Guesses             ||   Clues   |".to_string(),
        RULE.to_string(),
    ];

    for (i, &(guess, clues)) in history.iter().enumerate() {
        let (pegs, count) = clue_pegs(clues);
        let padding = " ".repeat(4 - count);
        lines.push(format!(
            "|  {:<3} |{}||   {pegs}{padding}    |",
            i + 1,
            code_cells(guess)
        ));
        lines.push(DIVIDER.to_string());
    }

    for turn in history.len() + 1..=max_turns {
        lines.push(format!("|  {turn:<3} |{BLANK_CELLS}"));
        lines.push(DIVIDER.to_string());
    }

    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
