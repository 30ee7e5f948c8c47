//! Values and comparatives.

use spl_ir::{BinaryOp, Comparative, Expr, ExprKind, Sign, Span, UnaryOp};
use spl_lexer::vocab;
use spl_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Operator phrases, longest first so `the square root of` wins over
/// `the square of`.
const UNARY: [(&[&str], UnaryOp); 5] = [
    (&["the", "square", "root", "of"], UnaryOp::SquareRoot),
    (&["the", "cube", "of"], UnaryOp::Cube),
    (&["the", "factorial", "of"], UnaryOp::Factorial),
    (&["the", "square", "of"], UnaryOp::Square),
    (&["twice"], UnaryOp::Twice),
];

const BINARY: [(&[&str], BinaryOp); 5] = [
    (
        &["the", "remainder", "of", "the", "quotient", "between"],
        BinaryOp::Remainder,
    ),
    (&["the", "difference", "between"], BinaryOp::Difference),
    (&["the", "product", "of"], BinaryOp::Product),
    (&["the", "quotient", "between"], BinaryOp::Quotient),
    (&["the", "sum", "of"], BinaryOp::Sum),
];

impl Parser<'_> {
    /// Any value. Nesting depth is bounded only by the stack guard.
    pub(crate) fn value(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.value_inner())
    }

    fn value_inner(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();

        // Names first: some begin with `the`.
        if self.cursor.at_character() {
            let (name, span) = self.cursor.character()?;
            return Ok(Expr::new(ExprKind::Character(name), span));
        }

        for (phrase, op) in BINARY {
            if self.cursor.at_phrase(phrase) {
                self.cursor.consume(phrase.len());
                let left = self.value()?;
                self.cursor.expect_word("and", "binary operation")?;
                let right = self.value()?;
                let kind = ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                };
                return Ok(Expr::new(kind, self.cursor.span_from(start)));
            }
        }

        for (phrase, op) in UNARY {
            if self.cursor.at_phrase(phrase) {
                self.cursor.consume(phrase.len());
                let operand = self.value()?;
                let kind = ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                };
                return Ok(Expr::new(kind, self.cursor.span_from(start)));
            }
        }

        let Some(word) = self.cursor.word_at(0) else {
            self.cursor.note_expected("value");
            return Err(self.cursor.error("value"));
        };
        if vocab::contains(vocab::FIRST_PERSON, word) {
            let span = self.cursor.consume(1);
            return Ok(Expr::new(ExprKind::FirstPerson, span));
        }
        if vocab::contains(vocab::SECOND_PERSON, word) {
            let span = self.cursor.consume(1);
            return Ok(Expr::new(ExprKind::SecondPerson, span));
        }
        if word.eq_ignore_ascii_case("nothing") || word.eq_ignore_ascii_case("zero") {
            let span = self.cursor.consume(1);
            return Ok(Expr::new(ExprKind::Nothing, span));
        }

        self.noun_phrase()
    }

    /// `[article|possessive] adjective* noun`
    fn noun_phrase(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let determiner = |w: &str| {
            vocab::contains(vocab::ARTICLES, w) || vocab::contains(vocab::POSSESSIVES, w)
        };
        if self.cursor.word_at(0).is_some_and(determiner) {
            self.cursor.advance();
        }

        let mut adjectives: u32 = 0;
        loop {
            if let Some(len) = self.cursor.match_phrase(vocab::POSITIVE_NOUNS, "noun") {
                return Ok(self.finish_noun(start, len, Sign::Positive, adjectives));
            }
            if let Some(len) = self.cursor.match_phrase(vocab::NEUTRAL_NOUNS, "noun") {
                return Ok(self.finish_noun(start, len, Sign::Positive, adjectives));
            }
            if let Some(len) = self.cursor.match_phrase(vocab::NEGATIVE_NOUNS, "noun") {
                return Ok(self.finish_noun(start, len, Sign::Negative, adjectives));
            }
            if self.cursor.word_at(0).is_some_and(vocab::is_adjective) {
                self.cursor.advance();
                adjectives = adjectives.saturating_add(1);
            } else {
                self.cursor.note_expected("adjective");
                self.cursor.note_expected("value");
                return Err(self.cursor.error("value"));
            }
        }
    }

    fn finish_noun(
        &mut self,
        start: Span,
        words: usize,
        sign: Sign,
        adjectives: u32,
    ) -> Expr {
        self.cursor.consume(words);
        Expr::new(
            ExprKind::NounPhrase { sign, adjectives },
            self.cursor.span_from(start),
        )
    }

    /// `as ADJ as`, `better than`, `more ADJ than`, `less ADJ than`, ...
    pub(crate) fn comparative(&mut self) -> Result<Comparative, ParseError> {
        if self.cursor.eat_word("as") {
            if !self.cursor.check_in_adjectives() {
                return Err(self.cursor.error("comparative"));
            }
            self.cursor.advance();
            self.cursor.expect_word("as", "comparative")?;
            return Ok(Comparative::Equal);
        }

        let comparative = if self.cursor.check_in(vocab::POSITIVE_COMPARATIVES, "comparative") {
            self.cursor.advance();
            Comparative::Greater
        } else if self.cursor.check_in(vocab::NEGATIVE_COMPARATIVES, "comparative") {
            self.cursor.advance();
            Comparative::Less
        } else if self.cursor.eat_word("more") {
            self.more_or_less(Comparative::Greater, Comparative::Less)?
        } else if self.cursor.eat_word("less") {
            self.more_or_less(Comparative::Less, Comparative::Greater)?
        } else {
            return Err(self.cursor.error("comparative"));
        };
        self.cursor.expect_word("than", "comparative")?;
        Ok(comparative)
    }

    /// The adjective after `more`/`less`; a negative adjective flips the sense.
    fn more_or_less(
        &mut self,
        plain: Comparative,
        negated: Comparative,
    ) -> Result<Comparative, ParseError> {
        if !self.cursor.check_in_adjectives() {
            return Err(self.cursor.error("comparative"));
        }
        let negative = self
            .cursor
            .word_at(0)
            .is_some_and(|w| vocab::contains(vocab::NEGATIVE_ADJECTIVES, w));
        self.cursor.advance();
        Ok(if negative { negated } else { plain })
    }
}
