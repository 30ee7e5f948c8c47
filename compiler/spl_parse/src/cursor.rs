//! Token cursor with word-level lookahead.
//!
//! Besides stepping through tokens, the cursor keeps the "expected" set for
//! the furthest position reached: every `check_*` that fails records what it
//! was looking for, and [`Cursor::error`] reports all of them.

use spl_ir::{CharacterName, Span};
use spl_lexer::{lex, vocab, Token, TokenKind};

use crate::ParseError;

pub(crate) struct Cursor<'src> {
    source: &'src str,
    /// Always ends with a single `Eof` token.
    tokens: Vec<Token>,
    pos: usize,
    expected: Vec<&'static str>,
    expected_pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            source,
            tokens: lex(source),
            pos: 0,
            expected: Vec::new(),
            expected_pos: 0,
        }
    }

    /// The token `n` ahead of the current one, saturating at `Eof`.
    pub(crate) fn peek(&self, n: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + n).min(last)]
    }

    pub(crate) fn current(&self) -> Token {
        self.peek(0)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos == 0 {
            Span::point(0)
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    /// Span from `start` through the most recently consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    pub(crate) fn text(&self, span: Span) -> &'src str {
        span.slice(self.source).unwrap_or("")
    }

    /// The word `n` tokens ahead, if that token is a word.
    pub(crate) fn word_at(&self, n: usize) -> Option<&'src str> {
        let token = self.peek(n);
        (token.kind == TokenKind::Word).then(|| token.text(self.source))
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Record that `what` would have been accepted here.
    pub(crate) fn note_expected(&mut self, what: &'static str) {
        if self.pos != self.expected_pos {
            self.expected.clear();
            self.expected_pos = self.pos;
        }
        self.expected.push(what);
    }

    pub(crate) fn check_kind(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            true
        } else {
            self.note_expected(kind.describe());
            false
        }
    }

    pub(crate) fn eat_kind(&mut self, kind: TokenKind) -> bool {
        let matched = self.check_kind(kind);
        if matched {
            self.advance();
        }
        matched
    }

    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        rule: &'static str,
    ) -> Result<Span, ParseError> {
        if self.check_kind(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.error(rule))
        }
    }

    /// Whether the current token is `word` (case-insensitive).
    pub(crate) fn check_word(&mut self, word: &'static str) -> bool {
        if self.word_at(0).is_some_and(|w| w.eq_ignore_ascii_case(word)) {
            true
        } else {
            self.note_expected(word);
            false
        }
    }

    pub(crate) fn eat_word(&mut self, word: &'static str) -> bool {
        let matched = self.check_word(word);
        if matched {
            self.advance();
        }
        matched
    }

    pub(crate) fn expect_word(
        &mut self,
        word: &'static str,
        rule: &'static str,
    ) -> Result<Span, ParseError> {
        if self.check_word(word) {
            Ok(self.advance().span)
        } else {
            Err(self.error(rule))
        }
    }

    /// Expect each word of `phrase` in turn; returns the covering span.
    pub(crate) fn expect_phrase(
        &mut self,
        phrase: &[&'static str],
        rule: &'static str,
    ) -> Result<Span, ParseError> {
        let start = self.current_span();
        for word in phrase {
            self.expect_word(word, rule)?;
        }
        Ok(self.span_from(start))
    }

    /// Whether the current word is in `list` (single-word entries only).
    pub(crate) fn check_in(&mut self, list: &[&str], label: &'static str) -> bool {
        if self.word_at(0).is_some_and(|w| vocab::contains(list, w)) {
            true
        } else {
            self.note_expected(label);
            false
        }
    }

    pub(crate) fn check_in_adjectives(&mut self) -> bool {
        if self.word_at(0).is_some_and(vocab::is_adjective) {
            true
        } else {
            self.note_expected("adjective");
            false
        }
    }

    /// Length in words of the longest `list` entry starting here.
    pub(crate) fn match_phrase(&mut self, list: &[&str], label: &'static str) -> Option<usize> {
        let found = vocab::longest_match(list, |i| self.word_at(i));
        if found.is_none() {
            self.note_expected(label);
        }
        found
    }

    /// Consume `count` tokens, returning the span they cover.
    pub(crate) fn consume(&mut self, count: usize) -> Span {
        let start = self.current_span();
        for _ in 0..count {
            self.advance();
        }
        self.span_from(start)
    }

    /// Whether the upcoming words are exactly `phrase`. Records nothing.
    pub(crate) fn at_phrase(&self, phrase: &[&str]) -> bool {
        phrase
            .iter()
            .enumerate()
            .all(|(i, part)| self.word_at(i).is_some_and(|w| w.eq_ignore_ascii_case(part)))
    }

    /// Length in words of the character name starting at the current token.
    pub(crate) fn character_len(&self) -> Option<usize> {
        vocab::longest_match(vocab::CHARACTERS, |i| self.word_at(i))
    }

    /// Whether a character name starts at the current token.
    pub(crate) fn at_character(&self) -> bool {
        self.character_len().is_some()
    }

    /// Parse a character name from the roster vocabulary.
    pub(crate) fn character(&mut self) -> Result<(CharacterName, Span), ParseError> {
        let Some(words) = self.match_phrase(vocab::CHARACTERS, "character name") else {
            return Err(self.error("character"));
        };
        let span = self.consume(words);
        Ok((CharacterName::new(self.text(span)), span))
    }

    /// Consume free text up to (not including) the next `.`, `!` or `?`.
    pub(crate) fn free_text(&mut self) -> String {
        let start = self.current_span();
        let mut consumed = false;
        while !self.current().kind.is_terminator() && self.current().kind != TokenKind::Eof {
            self.advance();
            consumed = true;
        }
        if consumed {
            let span = self.span_from(start);
            self.text(span).split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            String::new()
        }
    }

    pub(crate) fn eat_terminator(&mut self) -> bool {
        if self.current().kind.is_terminator() {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_terminator(&mut self, rule: &'static str) -> Result<Span, ParseError> {
        if self.eat_terminator() {
            Ok(self.previous_span())
        } else {
            self.note_expected("'.'");
            self.note_expected("'!'");
            self.note_expected("'?'");
            Err(self.error(rule))
        }
    }

    pub(crate) fn expect_eof(&mut self, rule: &'static str) -> Result<(), ParseError> {
        if self.check_kind(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.error(rule))
        }
    }

    /// Build an error at the current token from the recorded expectations.
    pub(crate) fn error(&self, rule: &'static str) -> ParseError {
        let token = self.current();
        let mut expected: Vec<String> = if self.expected_pos == self.pos {
            self.expected.iter().map(|s| (*s).to_string()).collect()
        } else {
            Vec::new()
        };
        expected.sort();
        expected.dedup();
        ParseError {
            rule,
            span: token.span,
            found: token.text(self.source).to_string(),
            expected,
        }
    }
}
