//! Grammar rules.
//!
//! Each module extends [`Parser`] with the productions for one layer of the
//! play:
//!
//! - [`play`]: title, dramatis personae, acts and scenes
//! - [`event`]: stage directions and character lines
//! - [`sentence`]: statements and questions
//! - [`expr`]: values and comparatives

mod event;
mod expr;
mod play;
mod sentence;

use spl_ir::{CharacterName, Numeral};
use spl_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A Roman numeral word such as `IV`.
    pub(crate) fn numeral(&mut self, rule: &'static str) -> Result<Numeral, ParseError> {
        let token = self.cursor.current();
        let Some(text) = self.cursor.word_at(0) else {
            self.cursor.note_expected("roman numeral");
            return Err(self.cursor.error(rule));
        };
        match Numeral::parse(text, token.span) {
            Ok(numeral) => {
                self.cursor.advance();
                Ok(numeral)
            }
            Err(err) => {
                let mut error = self.cursor.error(rule);
                error.expected = vec![format!("roman numeral ({err})")];
                Err(error)
            }
        }
    }

    /// `A`, `A and B`, `A, B and C`, `A, B, and C`.
    pub(crate) fn character_list(&mut self) -> Result<Vec<CharacterName>, ParseError> {
        let (first, _) = self.cursor.character()?;
        let mut names = vec![first];
        loop {
            if self.cursor.eat_kind(TokenKind::Comma) {
                let last = self.cursor.eat_word("and");
                names.push(self.cursor.character()?.0);
                if last {
                    break;
                }
            } else if self.cursor.eat_word("and") {
                names.push(self.cursor.character()?.0);
                break;
            } else {
                break;
            }
        }
        Ok(names)
    }
}
