//! Normalized character names.
//!
//! A play may write "Lady Capulet", "lady  capulet" or "LADY\nCAPULET"; all
//! three address the same character. [`CharacterName`] stores the canonical
//! spelling: words separated by single spaces, each capitalized.

use std::fmt;

/// Canonical identity of a character.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterName(String);

impl CharacterName {
    /// Normalize `raw` into canonical form.
    pub fn new(raw: &str) -> Self {
        let mut canonical = String::with_capacity(raw.len());
        for word in raw.split_whitespace() {
            if !canonical.is_empty() {
                canonical.push(' ');
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                canonical.extend(first.to_uppercase());
                canonical.extend(chars.flat_map(char::to_lowercase));
            }
        }
        CharacterName(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CharacterName {
    fn from(raw: &str) -> Self {
        CharacterName::new(raw)
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
