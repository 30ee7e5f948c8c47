//! Sentences: statements ending in `.`/`!` and questions ending in `?`.

use spl_ir::{InputKind, OutputKind, Polarity, Question, Sentence, SentenceKind};
use spl_lexer::{vocab, TokenKind};

use crate::{ParseError, Parser};

/// Words that open a non-assignment, non-question sentence.
const STATEMENT_STARTERS: &[&str] = &[
    "if", "let", "we", "open", "speak", "listen", "remember", "recall",
];

impl Parser<'_> {
    /// Whether the current word can open a sentence. Lines run until this
    /// stops holding.
    pub(crate) fn at_sentence_start(&self) -> bool {
        self.cursor.word_at(0).is_some_and(|w| {
            vocab::contains(vocab::SECOND_PERSON_SUBJECTS, w)
                || vocab::contains(vocab::BE, w)
                || vocab::contains(STATEMENT_STARTERS, w)
        })
    }

    pub(crate) fn sentence(&mut self) -> Result<Sentence, ParseError> {
        let start = self.cursor.current_span();

        if self.cursor.check_in(vocab::BE, "question") {
            let question = self.question()?;
            self.cursor.expect_kind(TokenKind::Question, "question")?;
            return Ok(Sentence {
                kind: SentenceKind::Question(question),
                span: self.cursor.span_from(start),
            });
        }

        let kind = self.statement()?;
        if !self.cursor.eat_kind(TokenKind::Period) && !self.cursor.eat_kind(TokenKind::Exclamation) {
            return Err(self.cursor.error("sentence"));
        }
        Ok(Sentence {
            kind,
            span: self.cursor.span_from(start),
        })
    }

    fn statement(&mut self) -> Result<SentenceKind, ParseError> {
        if self.cursor.check_in(vocab::SECOND_PERSON_SUBJECTS, "you") {
            return self.assignment();
        }
        if self.cursor.check_word("if")
            || self.cursor.check_word("let")
            || self.cursor.check_word("we")
        {
            return self.goto();
        }
        if self.cursor.eat_word("open") {
            self.second_person_possessive("output")?;
            if self.cursor.eat_word("heart") {
                return Ok(SentenceKind::Output(OutputKind::Number));
            }
            self.cursor.expect_word("mind", "input")?;
            return Ok(SentenceKind::Input(InputKind::Character));
        }
        if self.cursor.eat_word("speak") {
            self.second_person_possessive("output")?;
            self.cursor.expect_word("mind", "output")?;
            return Ok(SentenceKind::Output(OutputKind::Character));
        }
        if self.cursor.eat_word("listen") {
            self.cursor.expect_word("to", "input")?;
            self.second_person_possessive("input")?;
            self.cursor.expect_word("heart", "input")?;
            return Ok(SentenceKind::Input(InputKind::Number));
        }
        if self.cursor.eat_word("remember") {
            return Ok(SentenceKind::Push(self.value()?));
        }
        if self.cursor.eat_word("recall") {
            // Whatever follows is flavor text.
            self.cursor.free_text();
            return Ok(SentenceKind::Pop);
        }
        Err(self.cursor.error("sentence"))
    }

    /// `You [are] [as ADJ as] value`
    fn assignment(&mut self) -> Result<SentenceKind, ParseError> {
        self.cursor.advance();
        if self.cursor.check_in(vocab::BE, "be") {
            self.cursor.advance();
        }
        if self.cursor.eat_word("as") {
            if !self.cursor.check_in_adjectives() {
                return Err(self.cursor.error("assignment"));
            }
            self.cursor.advance();
            self.cursor.expect_word("as", "assignment")?;
        }
        Ok(SentenceKind::Assignment(self.value()?))
    }

    /// `[If so,|If not,] let us|we shall|we must return|proceed to scene N`
    fn goto(&mut self) -> Result<SentenceKind, ParseError> {
        let condition = if self.cursor.eat_word("if") {
            let polarity = if self.cursor.eat_word("so") {
                Polarity::Positive
            } else if self.cursor.eat_word("not") {
                Polarity::Negative
            } else {
                return Err(self.cursor.error("goto"));
            };
            self.cursor.expect_kind(TokenKind::Comma, "goto")?;
            Some(polarity)
        } else {
            None
        };

        if self.cursor.eat_word("let") {
            self.cursor.expect_word("us", "goto")?;
        } else {
            self.cursor.expect_word("we", "goto")?;
            if !self.cursor.eat_word("shall") && !self.cursor.eat_word("must") {
                return Err(self.cursor.error("goto"));
            }
        }
        if !self.cursor.eat_word("return") && !self.cursor.eat_word("proceed") {
            return Err(self.cursor.error("goto"));
        }
        self.cursor.expect_phrase(&["to", "scene"], "goto")?;
        let destination = self.numeral("goto")?;
        Ok(SentenceKind::Goto {
            condition,
            destination,
        })
    }

    fn second_person_possessive(&mut self, rule: &'static str) -> Result<(), ParseError> {
        if self.cursor.eat_word("your") || self.cursor.eat_word("thy") {
            Ok(())
        } else {
            Err(self.cursor.error(rule))
        }
    }

    /// `Am|Are|Art|Is value comparative value`, without the `?`.
    pub(crate) fn question(&mut self) -> Result<Question, ParseError> {
        let start = self.cursor.current_span();
        if !self.cursor.check_in(vocab::BE, "question") {
            return Err(self.cursor.error("question"));
        }
        self.cursor.advance();
        let first = self.value()?;
        let comparative = self.comparative()?;
        let second = self.value()?;
        Ok(Question {
            first,
            comparative,
            second,
            span: self.cursor.span_from(start),
        })
    }
}
