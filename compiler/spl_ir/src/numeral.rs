//! Roman numerals naming acts and scenes.
//!
//! Acts and scenes are declared as `Act IV:` / `Scene XII:` and addressed by
//! gotos as `scene XII`. Matching is by numeric value, so `scene xii` and
//! `Scene XII` name the same scene.

use std::fmt;

use crate::Span;

/// A parsed Roman numeral and where it was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Numeral {
    pub value: u32,
    pub span: Span,
}

/// Why a word is not a Roman numeral.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumeralError {
    Empty,
    InvalidDigit(char),
    /// Digits are valid but not in canonical order (`IIII`, `IC`, `VX`).
    NonCanonical(String),
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::Empty => write!(f, "empty roman numeral"),
            NumeralError::InvalidDigit(c) => write!(f, "'{c}' is not a roman numeral digit"),
            NumeralError::NonCanonical(s) => write!(f, "'{s}' is not a canonical roman numeral"),
        }
    }
}

impl std::error::Error for NumeralError {}

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn digit_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

impl Numeral {
    pub fn new(value: u32, span: Span) -> Self {
        Numeral { value, span }
    }

    /// Parse `text` (case-insensitive) as a canonical Roman numeral.
    pub fn parse(text: &str, span: Span) -> Result<Self, NumeralError> {
        if text.is_empty() {
            return Err(NumeralError::Empty);
        }
        let mut total: u32 = 0;
        let mut previous: u32 = 0;
        for c in text.chars().rev() {
            let value = digit_value(c).ok_or(NumeralError::InvalidDigit(c))?;
            if value < previous {
                total = total.saturating_sub(value);
            } else {
                total = total.saturating_add(value);
                previous = value;
            }
        }
        if total == 0 || to_roman(total) != text.to_ascii_uppercase() {
            return Err(NumeralError::NonCanonical(text.to_string()));
        }
        Ok(Numeral { value: total, span })
    }
}

/// Canonical uppercase Roman spelling of `value`.
pub fn to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for (weight, digits) in TABLE {
        while value >= weight {
            out.push_str(digits);
            value -= weight;
        }
    }
    out
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_roman(self.value))
    }
}
