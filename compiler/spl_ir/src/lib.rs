//! SPL IR - the play as the interpreter sees it.
//!
//! This crate holds the data every other SPL crate agrees on:
//! - [`Span`]: byte ranges into the play's source text
//! - [`CharacterName`]: case- and whitespace-normalized character identity
//! - [`Numeral`]: Roman numerals naming acts and scenes
//! - [`ast`]: the act → scene → event tree, sentences and expressions
//!
//! Nothing here executes; the tree is produced by `spl_parse` (or built by
//! hand) and consumed by `spl_eval`.

pub mod ast;
mod name;
mod numeral;
mod span;

pub use ast::{
    Act, BinaryOp, Comparative, Event, EventKind, Expr, ExprKind, InputKind, Line, OutputKind,
    Persona, Play, Polarity, Question, Scene, Sentence, SentenceKind, Sign, UnaryOp,
};
pub use name::CharacterName;
pub use numeral::{to_roman, Numeral, NumeralError};
pub use span::{Span, SpanError};
