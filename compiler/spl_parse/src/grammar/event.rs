//! Events: stage directions in brackets and character lines.

use spl_ir::{Event, EventKind, Line};
use spl_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whether the current token can open an event.
    pub(crate) fn at_event_start(&self) -> bool {
        self.cursor.current().kind == TokenKind::LBracket || self.cursor.at_character()
    }

    pub(crate) fn event(&mut self) -> Result<Event, ParseError> {
        let start = self.cursor.current_span();
        let kind = if self.cursor.eat_kind(TokenKind::LBracket) {
            let kind = self.stage_direction()?;
            self.cursor.expect_kind(TokenKind::RBracket, "stage direction")?;
            kind
        } else if self.cursor.at_character() {
            EventKind::Line(self.line()?)
        } else {
            self.cursor.note_expected("character name");
            return Err(self.cursor.error("event"));
        };
        Ok(Event {
            kind,
            span: self.cursor.span_from(start),
        })
    }

    fn stage_direction(&mut self) -> Result<EventKind, ParseError> {
        if self.cursor.eat_word("enter") {
            return Ok(EventKind::Entrance(self.character_list()?));
        }
        if self.cursor.eat_word("exit") {
            return Ok(EventKind::Exit(self.cursor.character()?.0));
        }
        if self.cursor.eat_word("exeunt") {
            if self.cursor.at_character() {
                return Ok(EventKind::Exeunt(Some(self.character_list()?)));
            }
            return Ok(EventKind::Exeunt(None));
        }
        if self.cursor.eat_word("a") {
            self.cursor.expect_word("pause", "stage direction")?;
            return Ok(EventKind::Breakpoint);
        }
        Err(self.cursor.error("stage direction"))
    }

    /// `Name: sentence+`
    fn line(&mut self) -> Result<Line, ParseError> {
        let (speaker, speaker_span) = self.cursor.character()?;
        self.cursor.expect_kind(TokenKind::Colon, "line")?;
        let mut sentences = vec![self.sentence()?];
        while self.at_sentence_start() {
            sentences.push(self.sentence()?);
        }
        Ok(Line {
            speaker,
            speaker_span,
            sentences,
        })
    }
}
