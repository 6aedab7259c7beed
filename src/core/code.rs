//! Mastermind code representation
//!
//! A Code is an ordered sequence of four symbols, each in 1..=6, where every
//! symbol stands for one of the six peg colours.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct symbols (colours)
pub const SYMBOL_COUNT: u8 = 6;

/// Size of the full code space (6^4)
pub const CODE_SPACE_SIZE: usize = 1296;

/// A four-symbol Mastermind code
///
/// The derived ordering is lexicographic over the symbols, which is the same
/// order [`Code::all`] enumerates the code space in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly 4 digits, got {0}")]
    InvalidLength(usize),
    #[error("Code contains a non-digit character '{0}'")]
    NonDigit(char),
    #[error("Symbol {0} is out of range, expected 1-6")]
    SymbolOutOfRange(u8),
}

impl Code {
    /// Fixed opening guess used on turn 1
    pub const OPENING: Self = Self([1, 1, 2, 2]);

    /// Create a code from four symbols
    ///
    /// # Errors
    /// Returns `CodeError::SymbolOutOfRange` if any symbol is outside 1..=6.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new([3, 4, 5, 6]).unwrap();
    /// assert_eq!(code.to_string(), "3456");
    ///
    /// assert!(Code::new([0, 1, 2, 3]).is_err());
    /// assert!(Code::new([1, 2, 3, 7]).is_err());
    /// ```
    pub fn new(symbols: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&bad) = symbols
            .iter()
            .find(|&&s| !(1..=SYMBOL_COUNT).contains(&s))
        {
            return Err(CodeError::SymbolOutOfRange(bad));
        }

        Ok(Self(symbols))
    }

    /// Enumerate the full code space in lexicographic order
    ///
    /// Symbols ascend from 1 to 6 with the most significant position first,
    /// so the result starts `1111, 1112, ..., 1116, 1121` and ends at `6666`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CODE_SPACE_SIZE};
    ///
    /// let all = Code::all();
    /// assert_eq!(all.len(), CODE_SPACE_SIZE);
    /// assert_eq!(all[0].to_string(), "1111");
    /// assert_eq!(all[1].to_string(), "1112");
    /// assert_eq!(all[CODE_SPACE_SIZE - 1].to_string(), "6666");
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(CODE_SPACE_SIZE);

        for a in 1..=SYMBOL_COUNT {
            for b in 1..=SYMBOL_COUNT {
                for c in 1..=SYMBOL_COUNT {
                    for d in 1..=SYMBOL_COUNT {
                        codes.push(Self([a, b, c, d]));
                    }
                }
            }
        }

        codes
    }

    /// Generate a uniformly random code
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| rng.random_range(1..=SYMBOL_COUNT)))
    }

    /// Get the symbols as an array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the symbol occurs anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.0.contains(&symbol)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code from a string of four digits like "1122"
    ///
    /// Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(trimmed.chars()) {
            let digit = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))?;
            *slot = digit as u8;
        }

        Self::new(symbols)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new([1, 2, 3, 4]).unwrap();
        assert_eq!(code.symbols(), &[1, 2, 3, 4]);
        assert_eq!(code.symbol_at(0), 1);
        assert_eq!(code.symbol_at(3), 4);
    }

    #[test]
    fn code_creation_out_of_range() {
        assert_eq!(
            Code::new([1, 2, 0, 4]),
            Err(CodeError::SymbolOutOfRange(0))
        );
        assert_eq!(
            Code::new([7, 2, 3, 4]),
            Err(CodeError::SymbolOutOfRange(7))
        );
    }

    #[test]
    fn parse_valid() {
        let code: Code = "3456".parse().unwrap();
        assert_eq!(code, Code::new([3, 4, 5, 6]).unwrap());

        let padded: Code = "  1122\n".parse().unwrap();
        assert_eq!(padded, Code::OPENING);
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!("123".parse::<Code>(), Err(CodeError::InvalidLength(3)));
        assert_eq!("12345".parse::<Code>(), Err(CodeError::InvalidLength(5)));
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn parse_invalid_characters() {
        assert_eq!("12a4".parse::<Code>(), Err(CodeError::NonDigit('a')));
        assert_eq!("1 34".parse::<Code>(), Err(CodeError::NonDigit(' ')));
        assert_eq!("1274".parse::<Code>(), Err(CodeError::SymbolOutOfRange(7)));
        assert_eq!("0123".parse::<Code>(), Err(CodeError::SymbolOutOfRange(0)));
    }

    #[test]
    fn display_matches_parse() {
        for text in ["1111", "1122", "3456", "6666"] {
            let code: Code = text.parse().unwrap();
            assert_eq!(code.to_string(), text);
        }
    }

    #[test]
    fn contains_symbol() {
        let code = Code::new([3, 4, 5, 6]).unwrap();
        assert!(code.contains(3));
        assert!(code.contains(6));
        assert!(!code.contains(1));
        assert!(!code.contains(2));
    }

    #[test]
    fn all_codes_enumerated_in_order() {
        let all = Code::all();
        assert_eq!(all.len(), CODE_SPACE_SIZE);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[6].to_string(), "1121");
        assert_eq!(all[36].to_string(), "1211");
        assert_eq!(all[216].to_string(), "2111");
    }

    #[test]
    fn opening_is_in_code_space() {
        assert!(Code::all().contains(&Code::OPENING));
        assert_eq!(Code::OPENING.to_string(), "1122");
    }

    #[test]
    fn random_codes_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = Code::random(&mut rng);
            assert!(Code::new(*code.symbols()).is_ok());
        }
    }

    #[test]
    fn random_codes_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(Code::random(&mut a), Code::random(&mut b));
        }
    }
}
