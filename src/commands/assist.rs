//! Assisted solving mode
//!
//! The engine suggests guesses for a game played elsewhere and the user
//! types back the clues each guess received.

use super::input::{ask_yes_no, get_user_input};
use crate::core::{ClueSequence, Code};
use crate::solver::GuessingEngine;
use anyhow::Result;
use colored::Colorize;

enum Feedback {
    Clues(ClueSequence),
    Undo,
    New,
    Quit,
}

/// Run the assisted solving mode
///
/// # Errors
///
/// Returns an error if reading input fails or stdin is closed.
#[allow(clippy::too_many_lines)] // Interactive loop with undo and restart handling
pub fn run_assist(max_turns: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Mastermind Solver - Assisted Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a guess each turn. Play it, then enter one clue per position:\n");
    println!("  - X for the right colour in the right spot");
    println!("  - ? for a colour that is in the code somewhere else");
    println!("  - . for a colour that is not in the code");
    println!("  - Or type 'win' if the guess was right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last clues\n");

    let mut engine = GuessingEngine::new();
    let mut history: Vec<(Code, ClueSequence)> = Vec::new();
    // Engine state before each suggestion, for undo
    let mut undo_stack: Vec<GuessingEngine> = Vec::new();

    loop {
        let turn = history.len() + 1;
        undo_stack.push(engine.clone());

        let guess = match engine.guess(turn, history.last().map(|(_, clues)| clues)) {
            Ok(guess) => guess,
            Err(e) => {
                println!("\n❌ {e}. Your clues may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match get_user_input("Command")?.to_lowercase().as_str() {
                    "undo" | "u" => {
                        undo(&mut engine, &mut history, &mut undo_stack);
                    }
                    "new" | "n" => restart(&mut engine, &mut history, &mut undo_stack),
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => restore(&mut engine, &mut undo_stack),
                }
                continue;
            }
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining",
            engine.candidate_count()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}\n", guess.to_string().bright_white().bold());

        if engine.candidate_count() <= 10 {
            println!("Remaining candidates:");
            for candidate in engine.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter clues (X/?/., 'win', or command)")?;
            if let Some(feedback) = parse_feedback(&input) {
                break feedback;
            }
            println!("❌ Invalid clues! Use four of X/?/., e.g. 'X?..', or 'win'\n");
        };

        match feedback {
            Feedback::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Feedback::New => {
                restart(&mut engine, &mut history, &mut undo_stack);
                println!("\n🔄 New game started!\n");
            }
            Feedback::Undo => {
                if undo(&mut engine, &mut history, &mut undo_stack) {
                    println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Feedback::Clues(clues) => {
                history.push((guess, clues));

                if clues.is_solved() || history.len() >= max_turns {
                    print_summary(&history, clues.is_solved());
                    if !ask_yes_no("Play again? (yes/no)")? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    restart(&mut engine, &mut history, &mut undo_stack);
                    println!("\n🔄 New game started!\n");
                }
            }
        }
    }
}

fn parse_feedback(input: &str) -> Option<Feedback> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Feedback::Quit),
        "new" | "n" => Some(Feedback::New),
        "undo" | "u" => Some(Feedback::Undo),
        "win" | "correct" | "yes" | "solved" => Some(Feedback::Clues(ClueSequence::SOLVED)),
        _ => input.parse().ok().map(Feedback::Clues),
    }
}

/// Put back the snapshot taken before the current suggestion
fn restore(engine: &mut GuessingEngine, undo_stack: &mut Vec<GuessingEngine>) {
    if let Some(previous) = undo_stack.pop() {
        *engine = previous;
    }
}

/// Forget the last clues entered and rewind the engine to before the guess
/// they belonged to
///
/// Expects the snapshot for the current suggestion on top of the stack.
/// Returns `false` if there was nothing to undo.
fn undo(
    engine: &mut GuessingEngine,
    history: &mut Vec<(Code, ClueSequence)>,
    undo_stack: &mut Vec<GuessingEngine>,
) -> bool {
    restore(engine, undo_stack);
    if history.pop().is_none() {
        return false;
    }

    restore(engine, undo_stack);
    true
}

fn restart(
    engine: &mut GuessingEngine,
    history: &mut Vec<(Code, ClueSequence)>,
    undo_stack: &mut Vec<GuessingEngine>,
) {
    *engine = GuessingEngine::new();
    history.clear();
    undo_stack.clear();
}

fn headline(solved: bool) -> &'static str {
    if solved {
        "           🎉  M A S T E R M I N D   S O L V E D !  🎉           "
    } else {
        "                ⏳  O U T   O F   T U R N S  ⏳                 "
    }
}

fn outcome_line(turns: usize, solved: bool) -> String {
    let noun = if turns == 1 { "guess" } else { "guesses" };
    if solved {
        format!("Solution found in {turns} {noun}")
    } else {
        format!("No solution after {turns} {noun}")
    }
}

/// Print the end-of-game banner and the guess history
fn print_summary(history: &[(Code, ClueSequence)], solved: bool) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    if solved {
        println!("{}", headline(solved).bright_green().bold());
    } else {
        println!("{}", headline(solved).bright_yellow().bold());
    }
    println!("{}", "═".repeat(70).bright_cyan());

    println!("\n  {}", outcome_line(history.len(), solved));

    println!("\n  Guess history:");
    for (i, (guess, clues)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            clues
        );
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}
