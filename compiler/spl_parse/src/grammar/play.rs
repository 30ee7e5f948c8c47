//! Play structure: title, dramatis personae, acts, scenes.

use spl_ir::{Act, Persona, Play, Scene};
use spl_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn play(&mut self) -> Result<Play, ParseError> {
        let start = self.cursor.current_span();
        let title = self.cursor.free_text();
        self.cursor.expect_terminator("title")?;

        let mut personae = vec![self.persona()?];
        while self.at_persona() {
            personae.push(self.persona()?);
        }

        // A roster with no acts is a valid play for ad hoc execution.
        let mut acts = Vec::new();
        while self.cursor.check_word("act") {
            acts.push(self.act()?);
        }

        Ok(Play {
            title,
            personae,
            acts,
            span: self.cursor.span_from(start),
        })
    }

    /// A roster entry is a name directly followed by a comma.
    fn at_persona(&mut self) -> bool {
        match self.cursor.character_len() {
            Some(len) => self.cursor.peek(len).kind == TokenKind::Comma,
            None => {
                self.cursor.note_expected("character name");
                false
            }
        }
    }

    fn persona(&mut self) -> Result<Persona, ParseError> {
        let start = self.cursor.current_span();
        let (name, _) = self.cursor.character()?;
        self.cursor.expect_kind(TokenKind::Comma, "dramatis personae")?;
        let description = self.cursor.free_text();
        self.cursor.expect_terminator("dramatis personae")?;
        Ok(Persona {
            name,
            description,
            span: self.cursor.span_from(start),
        })
    }

    fn act(&mut self) -> Result<Act, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.expect_word("act", "act")?;
        let numeral = self.numeral("act")?;
        self.cursor.expect_kind(TokenKind::Colon, "act")?;
        let description = self.cursor.free_text();
        self.cursor.expect_terminator("act")?;

        let mut scenes = vec![self.scene()?];
        while self.cursor.check_word("scene") {
            scenes.push(self.scene()?);
        }

        Ok(Act {
            numeral,
            description,
            scenes,
            span: self.cursor.span_from(start),
        })
    }

    fn scene(&mut self) -> Result<Scene, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.expect_word("scene", "scene")?;
        let numeral = self.numeral("scene")?;
        self.cursor.expect_kind(TokenKind::Colon, "scene")?;
        let description = self.cursor.free_text();
        self.cursor.expect_terminator("scene")?;

        let mut events = Vec::new();
        while self.at_event_start() {
            events.push(self.event()?);
        }

        Ok(Scene {
            numeral,
            description,
            events,
            span: self.cursor.span_from(start),
        })
    }
}
