//! The play syntax tree.
//!
//! A [`Play`] is acts → scenes → events. Events are the executable units;
//! a [`Line`] event carries the sentences one character speaks, and
//! sentences carry [`Expr`] trees.
//!
//! Every node is a closed enum matched exhaustively by the evaluator, so a
//! new sentence or expression form is a compile error until it is handled.

use num_bigint::BigInt;

use crate::{CharacterName, Numeral, Span};

/// A whole program.
#[derive(Clone, Debug, PartialEq)]
pub struct Play {
    pub title: String,
    /// The dramatis personae, in declaration order.
    pub personae: Vec<Persona>,
    pub acts: Vec<Act>,
    pub span: Span,
}

/// One roster entry: `Romeo, a young man.`
#[derive(Clone, Debug, PartialEq)]
pub struct Persona {
    pub name: CharacterName,
    pub description: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Act {
    pub numeral: Numeral,
    pub description: String,
    pub scenes: Vec<Scene>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub numeral: Numeral,
    pub description: String,
    pub events: Vec<Event>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    Line(Line),
    /// `[Enter Romeo and Juliet]`
    Entrance(Vec<CharacterName>),
    /// `[Exeunt Romeo and Juliet]`, or `[Exeunt]` (`None`) to clear the stage.
    Exeunt(Option<Vec<CharacterName>>),
    /// `[Exit Romeo]`
    Exit(CharacterName),
    /// `[A pause]`: hands control to the driver.
    Breakpoint,
}

impl EventKind {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Line(_) => "line",
            EventKind::Entrance(_) => "entrance",
            EventKind::Exeunt(_) => "exeunt",
            EventKind::Exit(_) => "exit",
            EventKind::Breakpoint => "breakpoint",
        }
    }
}

/// `Juliet: sentence sentence ...`
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub speaker: CharacterName,
    pub speaker_span: Span,
    pub sentences: Vec<Sentence>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
    pub kind: SentenceKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SentenceKind {
    /// `You are as good as <expr>.` sets the addressee's value.
    Assignment(Expr),
    /// `Are you better than <expr>?` sets the global boolean.
    Question(Question),
    /// `[If so,|If not,] let us return to scene <numeral>.`
    Goto {
        condition: Option<Polarity>,
        destination: Numeral,
    },
    Output(OutputKind),
    Input(InputKind),
    /// `Remember <expr>.` pushes onto the addressee's stack.
    Push(Expr),
    /// `Recall ...` pops the addressee's stack.
    Pop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub first: Expr,
    pub comparative: Comparative,
    pub second: Expr,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparative {
    Greater,
    Less,
    Equal,
}

impl Comparative {
    /// Whether `first <comparative> second` holds.
    pub fn holds<T: Ord>(self, first: &T, second: &T) -> bool {
        match self {
            Comparative::Greater => first > second,
            Comparative::Less => first < second,
            Comparative::Equal => first == second,
        }
    }
}

/// Which global-boolean value a conditional goto fires on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// `If so,`
    Positive,
    /// `If not,`
    Negative,
}

impl Polarity {
    pub fn matches(self, flag: bool) -> bool {
        match self {
            Polarity::Positive => flag,
            Polarity::Negative => !flag,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// `Open your heart!`
    Number,
    /// `Speak your mind!`
    Character,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// `Listen to your heart!`
    Number,
    /// `Open your mind!`
    Character,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `me`, `myself`: the speaker's value.
    FirstPerson,
    /// `you`, `thyself`: the addressee's value.
    SecondPerson,
    /// A character addressed by name; needs no stage presence.
    Character(CharacterName),
    /// `a big big cat` = sign × 2^adjectives.
    NounPhrase { sign: Sign, adjectives: u32 },
    /// `nothing`, `zero`
    Nothing,
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A folded constant subtree. Never produced by the parser.
    Constant(BigInt),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Cube,
    Factorial,
    Square,
    SquareRoot,
    Twice,
}

impl UnaryOp {
    /// The phrase that introduces this operation.
    pub fn phrase(self) -> &'static str {
        match self {
            UnaryOp::Cube => "the cube of",
            UnaryOp::Factorial => "the factorial of",
            UnaryOp::Square => "the square of",
            UnaryOp::SquareRoot => "the square root of",
            UnaryOp::Twice => "twice",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Difference,
    Product,
    Quotient,
    Remainder,
    Sum,
}

impl BinaryOp {
    /// The phrase that introduces this operation.
    pub fn phrase(self) -> &'static str {
        match self {
            BinaryOp::Difference => "the difference between",
            BinaryOp::Product => "the product of",
            BinaryOp::Quotient => "the quotient between",
            BinaryOp::Remainder => "the remainder of the quotient between",
            BinaryOp::Sum => "the sum of",
        }
    }
}
