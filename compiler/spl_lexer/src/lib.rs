//! Lexer for SPL using logos.
//!
//! SPL has almost no punctuation-level syntax: a play is English words
//! separated by `.`, `,`, `!`, `?`, `:` and the `[`/`]` brackets around stage
//! directions. The lexer only splits the text into those pieces; deciding
//! whether a word is a noun, an adjective or a character name is the job of
//! the [`vocab`] tables, consulted by the parser.

pub mod vocab;

use logos::Logos;
use spl_ir::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[A-Za-z][A-Za-z'\-]*")]
    Word,
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[token("!")]
    Exclamation,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[regex(r"[^ \t\r\n\fA-Za-z.,!?:\[\]]+")]
    Symbol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Period,
    Comma,
    Exclamation,
    Question,
    Colon,
    LBracket,
    RBracket,
    /// Digits, dashes and anything else that only appears in free text.
    Symbol,
    Eof,
}

impl TokenKind {
    /// How the token is named in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Period => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Exclamation => "'!'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Symbol => "symbol",
            TokenKind::Eof => "end of input",
        }
    }

    /// `.`, `!` and `?` end sentences and free-text descriptions.
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            TokenKind::Period | TokenKind::Exclamation | TokenKind::Question
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The token's text within `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source).unwrap_or("")
    }
}

/// Split `source` into tokens, always ending with a single `Eof`.
///
/// Sources larger than `u32::MAX` bytes are truncated at the first token
/// that no longer fits a [`Span`].
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let Ok(span) = Span::try_from_range(logos.span()) else {
            break;
        };
        let kind = match result {
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::Symbol,
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    tokens
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Word => TokenKind::Word,
        RawToken::Period => TokenKind::Period,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Exclamation => TokenKind::Exclamation,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Symbol => TokenKind::Symbol,
    }
}

#[cfg(test)]
mod tests;
