//! `InterpreterBuilder` for configuring input and output before a play is
//! loaded.

use std::io::Read;

use spl_ir::Play;

use super::Interpreter;
use crate::errors::EvalResult;
use crate::fold::fold_play;
use crate::io::{InputManager, OutputManager, OutputSink};
use crate::position::{Outline, PositionTracker};
use crate::settings::{InputStyle, OutputStyle, Settings};
use crate::{Error, Stage};

/// Builder for [`Interpreter`].
///
/// Defaults to line-buffered standard input and plain output on stdout.
#[derive(Default)]
pub struct InterpreterBuilder {
    input: Option<InputManager>,
    output_style: OutputStyle,
    sink: OutputSink,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific input device.
    #[must_use]
    pub fn input(mut self, input: InputManager) -> Self {
        self.input = Some(input);
        self
    }

    /// Use the standard-input device for `style`.
    #[must_use]
    pub fn input_style(self, style: InputStyle) -> Self {
        self.input(InputManager::from_style(style))
    }

    /// Read input lazily, one character at a time, from `reader`.
    #[must_use]
    pub fn reader(self, reader: impl Read + 'static) -> Self {
        self.input(InputManager::reader(reader))
    }

    #[must_use]
    pub fn output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }

    /// Capture output in memory instead of writing to stdout.
    #[must_use]
    pub fn capture_output(self) -> Self {
        self.sink(OutputSink::Buffer(String::new()))
    }

    /// Apply both styles. The input style selects a standard-input device.
    #[must_use]
    pub fn settings(self, settings: Settings) -> Self {
        self.input_style(settings.input_style)
            .output_style(settings.output_style)
    }

    /// Fold and validate `play`, then set up the stage.
    pub fn build(self, mut play: Play) -> EvalResult<Interpreter> {
        fold_play(&mut play);
        let outline = Outline::of(&play)?;
        let stage = Stage::new(play.personae.iter().map(|p| p.name.clone()));
        tracing::debug!(
            title = %play.title,
            characters = play.personae.len(),
            acts = play.acts.len(),
            "loaded play"
        );
        Ok(Interpreter {
            play,
            source: None,
            tracker: PositionTracker::new(outline),
            stage,
            input: self.input.unwrap_or_default(),
            output: OutputManager::new(self.output_style, self.sink),
        })
    }

    /// Parse `source` and build; the text is kept for showing events.
    pub fn build_from_source(self, source: &str) -> Result<Interpreter, Error> {
        let play = spl_parse::parse_play(source)?;
        let mut interpreter = self.build(play)?;
        interpreter.source = Some(source.to_string());
        Ok(interpreter)
    }
}
