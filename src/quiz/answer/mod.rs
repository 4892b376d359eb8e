use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::quiz::error::QuizError;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref ANSWER_SYMBOL_REGEX: Regex = Regex::new("^(?:OPTION )?([ABCD1234])$").unwrap();
}

pub const OPTION_COUNT: usize = 4;

pub type OptionTexts = [String; OPTION_COUNT];

/// Position of an option within a question, 1 (A) through 4 (D).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Ordinal(u8);

impl Ordinal {
    pub fn new(value: u8) -> Result<Ordinal, QuizError> {
        if value >= 1 && value as usize <= OPTION_COUNT {
            Ok(Ordinal(value))
        } else {
            Err(QuizError::InvalidOrdinal(value))
        }
    }

    pub fn all() -> impl Iterator<Item = Ordinal> {
        (1..=OPTION_COUNT as u8).map(Ordinal)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn letter(self) -> char {
        (b'A' + self.0 - 1) as char
    }

    fn from_symbol(symbol: char) -> Option<Ordinal> {
        match symbol {
            'A' | '1' => Some(Ordinal(1)),
            'B' | '2' => Some(Ordinal(2)),
            'C' | '3' => Some(Ordinal(3)),
            'D' | '4' => Some(Ordinal(4)),
            _ => None,
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Resolves an answer to the option it designates.
///
/// When `options` is given, the trimmed answer is first compared (case-sensitively)
/// against each trimmed option text, in order. Failing that, the answer is matched
/// against the letter and number symbols: `B`, `2`, `Option B` and `Option 2` all
/// designate the second option, regardless of case.
///
/// Returns `None` for empty or unresolvable answers. Callers must never treat two
/// `None`s as equal.
pub fn encode(answer: &str, options: Option<&OptionTexts>) -> Option<Ordinal> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    if let Some(options) = options {
        let text_match = Ordinal::all().find(|ordinal| answer == options[ordinal.index()].trim());
        if text_match.is_some() {
            return text_match;
        }
    }

    let symbol = answer.to_uppercase();
    ANSWER_SYMBOL_REGEX
        .captures(&symbol)
        .and_then(|captures| captures[1].chars().next())
        .and_then(Ordinal::from_symbol)
}

pub fn decode(ordinal: u8) -> Result<char, QuizError> {
    Ordinal::new(ordinal).map(Ordinal::letter)
}
