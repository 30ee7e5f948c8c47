//! Runtime errors.
//!
//! Every failure the engine can raise is an [`EvalErrorKind`]. Errors are
//! built with the `#[cold]` factory functions below and enriched while they
//! unwind:
//!
//! - the evaluator and dispatcher attach the span of the innermost node being
//!   executed ([`EvalError::with_span`]);
//! - the interpreter attaches a snapshot of the stage
//!   ([`EvalError::with_snapshot`]).
//!
//! Both fields are first-writer-wins, so outer layers never overwrite the
//! more precise context recorded closer to the failure.

use std::fmt;

use num_bigint::BigInt;
use spl_ir::{to_roman, CharacterName, Span};
use spl_parse::ParseError;

use crate::Stage;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Stage membership
    #[error("{name} is not on stage")]
    NotOnStage { name: CharacterName },
    #[error("{name} is already on stage")]
    AlreadyOnStage { name: CharacterName },
    #[error("{name} is not in the dramatis personae")]
    UnknownCharacter { name: CharacterName },
    #[error("{speaker} must be on stage with exactly one other character, but there are {others}")]
    AmbiguousTarget { speaker: CharacterName, others: usize },

    // Stacks
    #[error("{name} tried to pop from an empty stack")]
    EmptyStack { name: CharacterName },

    // Arithmetic
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Cannot take the {operation} of a negative number: {operand}")]
    NegativeOperand {
        operation: &'static str,
        operand: BigInt,
    },

    // I/O
    #[error("Invalid character code: {code}")]
    InvalidCharacterCode { code: BigInt },
    #[error("No numeric input was given: {text:?}")]
    InvalidInput { text: String },
    #[error("I/O failure: {message}")]
    Io { message: String },

    // Control flow and structure
    #[error("Scene {} does not exist in act {}", roman(.scene), roman(.act))]
    UnknownScene { scene: u32, act: u32 },
    #[error("{}", duplicate_message(.numeral, .act))]
    DuplicateNumeral {
        numeral: u32,
        /// The enclosing act for a duplicate scene; `None` for a duplicate act.
        act: Option<u32>,
    },
}

fn roman(value: &u32) -> String {
    to_roman(*value)
}

fn duplicate_message(numeral: &u32, act: &Option<u32>) -> String {
    match act {
        None => format!("Act numeral {} is not unique", to_roman(*numeral)),
        Some(act) => format!(
            "Scene numeral {} is not unique in act {}",
            to_roman(*numeral),
            to_roman(*act)
        ),
    }
}

/// A runtime error with the context gathered while it unwound.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost node being executed when the error was detected.
    pub span: Option<Span>,
    /// Stage state at the time of failure.
    pub snapshot: Option<Box<Stage>>,
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            snapshot: None,
        }
    }

    /// Record `span` unless a more precise one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Record the state of `stage` unless a snapshot is already present.
    #[must_use]
    pub fn with_snapshot(mut self, stage: &Stage) -> Self {
        if self.snapshot.is_none() {
            self.snapshot = Some(Box::new(stage.clone()));
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

/// Any failure surfaced by the interpreter's public API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl Error {
    /// Where in the source the failure was detected.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(err) => Some(err.span),
            Error::Runtime(err) => err.span,
        }
    }

    /// The runtime error kind, if this is not a syntax error.
    pub fn kind(&self) -> Option<&EvalErrorKind> {
        match self {
            Error::Parse(_) => None,
            Error::Runtime(err) => Some(&err.kind),
        }
    }
}

// Stage membership

#[cold]
pub fn not_on_stage(name: &CharacterName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotOnStage { name: name.clone() })
}

#[cold]
pub fn already_on_stage(name: &CharacterName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyOnStage { name: name.clone() })
}

#[cold]
pub fn unknown_character(name: &CharacterName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownCharacter { name: name.clone() })
}

#[cold]
pub fn ambiguous_target(speaker: &CharacterName, others: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousTarget {
        speaker: speaker.clone(),
        others,
    })
}

#[cold]
pub fn empty_stack(name: &CharacterName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyStack { name: name.clone() })
}

// Arithmetic

#[cold]
pub fn divide_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivideByZero)
}

#[cold]
pub fn negative_operand(operation: &'static str, operand: &BigInt) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeOperand {
        operation,
        operand: operand.clone(),
    })
}

// I/O

#[cold]
pub fn invalid_character_code(code: &BigInt) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCharacterCode { code: code.clone() })
}

#[cold]
pub fn invalid_input(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidInput {
        text: text.to_string(),
    })
}

#[cold]
pub fn io_error(err: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Io {
        message: err.to_string(),
    })
}

// Control flow and structure

#[cold]
pub fn unknown_scene(scene: u32, act: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownScene { scene, act })
}

#[cold]
pub fn duplicate_numeral(numeral: u32, act: Option<u32>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateNumeral { numeral, act })
}

#[cfg(test)]
mod tests;
