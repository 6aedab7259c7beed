//! Positional clue evaluation
//!
//! Every position of a guess receives one of three clues:
//! - `ExactMatch`: the symbol is in the secret at this position
//! - `Present`: the symbol occurs somewhere else in the secret
//! - `Absent`: the symbol does not occur in the secret at all
//!
//! Unlike classic black/white peg scoring, clues stay aligned to the guess
//! positions and duplicate symbols are not counted against each other.

use super::{CODE_LENGTH, Code};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    ExactMatch,
    Present,
    Absent,
}

impl Clue {
    /// Signed signal used when summing clues into a response value
    ///
    /// `ExactMatch` is +1, `Present` is 0 and `Absent` is -1.
    #[inline]
    #[must_use]
    pub const fn signal(self) -> i8 {
        match self {
            Self::ExactMatch => 1,
            Self::Present => 0,
            Self::Absent => -1,
        }
    }

    /// Compact ASCII form: `X`, `?` or `.`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::ExactMatch => 'X',
            Self::Present => '?',
            Self::Absent => '.',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' | 'B' | 'b' => Some(Self::ExactMatch),
            '?' | 'O' | 'o' | 'W' | 'w' => Some(Self::Present),
            '.' | '-' | '_' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for unparseable clue strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("Clue sequence must have exactly 4 clues, got {0}")]
    InvalidLength(usize),
    #[error("Unknown clue character '{0}' (use X for exact, ? for present, . for absent)")]
    InvalidCharacter(char),
}

/// The four clues produced by evaluating a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueSequence([Clue; CODE_LENGTH]);

impl ClueSequence {
    /// All positions matched exactly
    pub const SOLVED: Self = Self([Clue::ExactMatch; CODE_LENGTH]);

    #[must_use]
    pub const fn new(clues: [Clue; CODE_LENGTH]) -> Self {
        Self(clues)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Position `i` is `ExactMatch` if `guess[i] == secret[i]`, otherwise
    /// `Present` if the secret contains `guess[i]` anywhere, otherwise
    /// `Absent`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Clue, ClueSequence, Code};
    ///
    /// let guess: Code = "1122".parse().unwrap();
    /// let secret: Code = "3456".parse().unwrap();
    /// let clues = ClueSequence::evaluate(guess, secret);
    ///
    /// assert_eq!(clues.clues(), &[Clue::Absent; 4]);
    /// assert_eq!(clues.to_string(), "....");
    /// ```
    #[must_use]
    pub fn evaluate(guess: Code, secret: Code) -> Self {
        Self(std::array::from_fn(|i| {
            let symbol = guess.symbol_at(i);
            if symbol == secret.symbol_at(i) {
                Clue::ExactMatch
            } else if secret.contains(symbol) {
                Clue::Present
            } else {
                Clue::Absent
            }
        }))
    }

    /// Get the clues as an array
    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &[Clue; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position matched exactly
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Count positions carrying the given clue
    #[must_use]
    pub fn count(self, clue: Clue) -> usize {
        self.0.iter().filter(|&&c| c == clue).count()
    }

    /// Sum of the per-position signals, in -4..=4
    #[inline]
    #[must_use]
    pub fn signal_sum(self) -> i8 {
        self.0.iter().map(|c| c.signal()).sum()
    }
}

impl FromStr for ClueSequence {
    type Err = ClueError;

    /// Parse a clue string like "X?.." or "xo--"
    ///
    /// Accepts:
    /// - 'X'/'x'/'B'/'b' for an exact match
    /// - '?'/'O'/'o'/'W'/'w' for present
    /// - '.'/'-'/'_' for absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if len != CODE_LENGTH {
            return Err(ClueError::InvalidLength(len));
        }

        let mut clues = [Clue::Absent; CODE_LENGTH];
        for (slot, ch) in clues.iter_mut().zip(trimmed.chars()) {
            *slot = Clue::from_char(ch).ok_or(ClueError::InvalidCharacter(ch))?;
        }

        Ok(Self(clues))
    }
}

impl fmt::Display for ClueSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in self.0 {
            write!(f, "{}", clue.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn evaluate_all_absent() {
        let clues = ClueSequence::evaluate(code("1122"), code("3456"));
        assert_eq!(clues.count(Clue::Absent), 4);
        assert_eq!(clues.signal_sum(), -4);
        assert!(!clues.is_solved());
    }

    #[test]
    fn evaluate_exact_match() {
        let clues = ClueSequence::evaluate(code("3456"), code("3456"));
        assert_eq!(clues, ClueSequence::SOLVED);
        assert!(clues.is_solved());
        assert_eq!(clues.signal_sum(), 4);
    }

    #[test]
    fn evaluate_present_is_not_consumed_by_duplicates() {
        // Both 1s in the guess are reported present even though the secret
        // holds a single 1
        let clues = ClueSequence::evaluate(code("1156"), code("2341"));
        assert_eq!(clues.to_string(), "??..");

        let clues = ClueSequence::evaluate(code("1111"), code("1234"));
        assert_eq!(clues.to_string(), "X???");
    }

    #[test]
    fn evaluate_mixed() {
        let clues = ClueSequence::evaluate(code("1233"), code("3456"));
        assert_eq!(
            clues.clues(),
            &[Clue::Absent, Clue::Absent, Clue::Present, Clue::Present]
        );

        let clues = ClueSequence::evaluate(code("1122"), code("1234"));
        assert_eq!(clues.to_string(), "X???");
    }

    #[test]
    fn clue_signals() {
        assert_eq!(Clue::ExactMatch.signal(), 1);
        assert_eq!(Clue::Present.signal(), 0);
        assert_eq!(Clue::Absent.signal(), -1);
    }

    #[test]
    fn parse_valid() {
        let a: ClueSequence = "X?..".parse().unwrap();
        let b: ClueSequence = "xo--".parse().unwrap();
        let c: ClueSequence = "bw__".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(
            a.clues(),
            &[Clue::ExactMatch, Clue::Present, Clue::Absent, Clue::Absent]
        );
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            "X?.".parse::<ClueSequence>(),
            Err(ClueError::InvalidLength(3))
        );
        assert_eq!(
            "X?...".parse::<ClueSequence>(),
            Err(ClueError::InvalidLength(5))
        );
        assert_eq!(
            "X?.Z".parse::<ClueSequence>(),
            Err(ClueError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let clues = ClueSequence::evaluate(code("2432"), code("3456"));
        let parsed: ClueSequence = clues.to_string().parse().unwrap();
        assert_eq!(parsed, clues);
    }
}
