//! Human vs computer game loop
//!
//! The human either breaks a random secret or sets a secret for the engine
//! to break. Either way the board is redrawn after every turn.

use super::input::{ask_yes_no, get_user_input};
use super::solve::DEFAULT_MAX_TURNS;
use crate::core::{ClueSequence, Code};
use crate::output::render_board;
use crate::solver::GuessingEngine;
use anyhow::Result;
use colored::Colorize;
use log::{debug, warn};

/// Which side the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Role {
    /// Break a secret set by the computer
    Breaker,
    /// Set a secret for the computer to break
    Maker,
}

impl Role {
    fn from_choice(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Breaker),
            "2" => Some(Self::Maker),
            _ => None,
        }
    }
}

/// Configuration for an interactive game
pub struct GameConfig {
    pub max_turns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// State of a single game
pub struct Game {
    secret: Code,
    history: Vec<(Code, ClueSequence)>,
    max_turns: usize,
}

impl Game {
    #[must_use]
    pub const fn new(secret: Code, max_turns: usize) -> Self {
        Self {
            secret,
            history: Vec::new(),
            max_turns,
        }
    }

    /// Score a guess against the secret and log it on the board
    pub fn record_guess(&mut self, guess: Code) -> ClueSequence {
        let clues = ClueSequence::evaluate(guess, self.secret);
        self.history.push((guess, clues));
        clues
    }

    /// Number of the turn about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|(_, clues)| clues.is_solved())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_solved() || self.history.len() >= self.max_turns
    }

    /// Clues for the most recent guess
    #[must_use]
    pub fn last_clues(&self) -> Option<&ClueSequence> {
        self.history.last().map(|(_, clues)| clues)
    }

    #[must_use]
    pub fn history(&self) -> &[(Code, ClueSequence)] {
        &self.history
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }
}

/// Run interactive games until the player stops
///
/// # Errors
///
/// Returns an error if reading input fails or stdin is closed.
pub fn run_play(role: Option<Role>, config: &GameConfig) -> Result<()> {
    print_welcome(config.max_turns);

    let mut role = match role {
        Some(role) => role,
        None => prompt_role()?,
    };

    loop {
        match role {
            Role::Breaker => play_breaker(config)?,
            Role::Maker => play_maker(config)?,
        }

        if !ask_yes_no("\nWould you like to play again? Enter 'y' for yes or 'n' for no")? {
            println!("Ok, see you next time!");
            return Ok(());
        }
        role = prompt_role()?;
    }
}

fn play_breaker(config: &GameConfig) -> Result<()> {
    let mut game = Game::new(Code::random(&mut rand::rng()), config.max_turns);
    debug!("Secret drawn: {}", game.secret());

    println!(
        "When prompted, enter your guess as four digits representing the colours, e.g. 1234."
    );
    println!(
        "The secret code has been set, you now have {} attempts to break the code, good luck!",
        game.max_turns()
    );

    while !game.is_over() {
        let guess = prompt_code(&format!("\nPlease enter guess number {}", game.turn()))?;
        game.record_guess(guess);
        print!("{}", render_board(game.history(), game.max_turns()));
    }

    if game.is_solved() {
        println!("{}", "Congratulations, you won the game!!".green().bold());
    } else {
        println!(
            "Sorry, you're out of turns, the correct code was {}. Better luck next time!!",
            game.secret().to_string().bright_yellow().bold()
        );
    }

    Ok(())
}

fn play_maker(config: &GameConfig) -> Result<()> {
    let secret = prompt_code("Please set the secret code")?;
    let mut game = Game::new(secret, config.max_turns);
    let mut engine = GuessingEngine::new();

    while !game.is_over() {
        let turn = game.turn();
        println!("\nGuess number {turn}:");

        let guess = match engine.guess(turn, game.last_clues()) {
            Ok(guess) => guess,
            Err(e) => {
                warn!("Engine gave up on turn {turn}: {e}");
                println!("{}", format!("The computer is stuck: {e}").red());
                return Ok(());
            }
        };

        println!("{guess}");
        game.record_guess(guess);
        print!("{}", render_board(game.history(), game.max_turns()));
    }

    if game.is_solved() {
        println!("{}", "The computer broke your code, hard luck!".red().bold());
    } else {
        println!(
            "{}",
            "Congratulations, your code beat the computer!".green().bold()
        );
    }

    Ok(())
}

/// Prompt until a valid code is entered
fn prompt_code(prompt: &str) -> Result<Code> {
    loop {
        match get_user_input(prompt)?.parse::<Code>() {
            Ok(code) => return Ok(code),
            Err(e) => println!("That code is not valid ({e}), please try again"),
        }
    }
}

fn prompt_role() -> Result<Role> {
    loop {
        let input = get_user_input(
            "Please enter '1' if you would like to be the code breaker or '2' if you would like to be the code maker",
        )?;
        if let Some(role) = Role::from_choice(&input) {
            return Ok(role);
        }
        println!("Sorry, I didn't quite catch that!");
    }
}

fn print_welcome(max_turns: usize) {
    println!(
        "\n                         *** {} ***\n",
        "Welcome to Mastermind!".underline()
    );
    println!("Mastermind is a code-breaking game for two players. In this case, you and the computer.\n");
    println!("You can be the code maker or the code breaker. As the code maker, you define the code");
    println!("that the computer will then attempt to break. As the code breaker, the computer sets");
    println!("the code, which you then have to break within {max_turns} attempts!\n");
    println!("After each attempt, the code breaker is given clues as follows:");
    println!(
        "{} - the correct colour is selected and it is in the right spot.",
        "\u{2022}".red()
    );
    println!("\u{2022} - the correct colour is selected but it is in the wrong spot.\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn new_game_starts_at_turn_one() {
        let game = Game::new(code("3456"), 12);

        assert_eq!(game.turn(), 1);
        assert!(!game.is_over());
        assert!(!game.is_solved());
        assert!(game.last_clues().is_none());
    }

    #[test]
    fn record_guess_scores_against_secret() {
        let mut game = Game::new(code("3456"), 12);
        let clues = game.record_guess(code("1233"));

        assert_eq!(clues.to_string(), "..??");
        assert_eq!(game.last_clues(), Some(&clues));
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn game_ends_when_solved() {
        let mut game = Game::new(code("3456"), 12);
        game.record_guess(code("1122"));
        game.record_guess(code("3456"));

        assert!(game.is_solved());
        assert!(game.is_over());
    }

    #[test]
    fn game_ends_when_out_of_turns() {
        let mut game = Game::new(code("3456"), 2);
        game.record_guess(code("1122"));
        assert!(!game.is_over());

        game.record_guess(code("1233"));
        assert!(game.is_over());
        assert!(!game.is_solved());
    }

    #[test]
    fn engine_breaks_code_through_game() {
        let mut game = Game::new(code("1234"), 12);
        let mut engine = GuessingEngine::new();

        while !game.is_over() {
            let guess = engine.guess(game.turn(), game.last_clues()).unwrap();
            game.record_guess(guess);
        }

        assert!(game.is_solved());
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn role_choices() {
        assert_eq!(Role::from_choice("1"), Some(Role::Breaker));
        assert_eq!(Role::from_choice("2"), Some(Role::Maker));
        assert_eq!(Role::from_choice("3"), None);
    }

    #[test]
    fn default_config_uses_twelve_turns() {
        assert_eq!(GameConfig::default().max_turns, 12);
    }
}
