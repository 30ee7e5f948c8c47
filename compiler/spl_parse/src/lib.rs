//! Parser for SPL.
//!
//! Turns play text into the [`spl_ir`] tree. Besides whole plays, single
//! events, sentences, questions and expressions can be parsed on their own;
//! the interpreter uses those entry points for ad hoc execution from a REPL
//! or debugger.
//!
//! The grammar is LL(k) over words: every alternative is chosen by looking at
//! the next few words, so there is no backtracking. When nothing matches,
//! the error lists every alternative that was tried at the failing position.

mod cursor;
mod grammar;

use std::fmt;

use spl_ir::{Event, Expr, Play, Question, Sentence, Span};

use crate::cursor::Cursor;

/// A syntax error with the set of tokens that would have been accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Grammar rule being parsed when the error was detected.
    pub rule: &'static str,
    /// Location of the offending token.
    pub span: Span,
    /// Text of the offending token (empty at end of input).
    pub found: String,
    /// Sorted, deduplicated descriptions of what was expected instead.
    pub expected: Vec<String>,
}

impl ParseError {
    /// The expected set rendered as `a, b or c`.
    pub fn expected_list(&self) -> String {
        match self.expected.as_slice() {
            [] => String::from("something else"),
            [only] => only.clone(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = if self.found.is_empty() {
            "end of input"
        } else {
            self.found.as_str()
        };
        write!(
            f,
            "failed to parse {}: expected {}, found '{found}'",
            self.rule,
            self.expected_list()
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse a complete play.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_play(source: &str) -> Result<Play, ParseError> {
    let mut parser = Parser::new(source);
    let play = parser.play()?;
    parser.cursor.expect_eof("play")?;
    tracing::debug!(acts = play.acts.len(), personae = play.personae.len(), "parsed play");
    Ok(play)
}

/// Parse one event: a line (`Juliet: ...`) or a stage direction.
pub fn parse_event(source: &str) -> Result<Event, ParseError> {
    let mut parser = Parser::new(source);
    let event = parser.event()?;
    parser.cursor.expect_eof("event")?;
    Ok(event)
}

/// Parse one sentence, including its terminating punctuation.
pub fn parse_sentence(source: &str) -> Result<Sentence, ParseError> {
    let mut parser = Parser::new(source);
    let sentence = parser.sentence()?;
    parser.cursor.expect_eof("sentence")?;
    Ok(sentence)
}

/// Parse a question such as `Are you better than nothing?`.
pub fn parse_question(source: &str) -> Result<Question, ParseError> {
    let mut parser = Parser::new(source);
    let question = parser.question()?;
    parser.cursor.eat_terminator();
    parser.cursor.expect_eof("question")?;
    Ok(question)
}

/// Parse a value such as `the sum of thyself and a pig`. A trailing `.`,
/// `!` or `?` is accepted.
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(source);
    let expr = parser.value()?;
    parser.cursor.eat_terminator();
    parser.cursor.expect_eof("value")?;
    Ok(expr)
}

/// Recursive descent parser; grammar rules live in [`grammar`].
pub(crate) struct Parser<'src> {
    pub(crate) cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }
}
