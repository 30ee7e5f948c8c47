//! The interpreter session.
//!
//! An [`Interpreter`] owns one play and all of its runtime state. It can run
//! the play to completion, step through it one event at a time, or execute
//! fragments (events, sentences, questions, expressions) against the current
//! state without moving the position, which is what debuggers and REPLs
//! need.

mod builder;

use std::borrow::Cow;

use num_bigint::BigInt;
use spl_ir::{CharacterName, Event, Expr, Play, Question, Sentence};
use spl_parse::ParseError;

use crate::errors::EvalResult;
use crate::exec::{self, ExecContext, Flow};
use crate::fold;
use crate::io::{InputManager, OutputManager};
use crate::position::{Position, PositionTracker};
use crate::settings::{OutputStyle, Settings};
use crate::{Error, Stage};

pub use builder::InterpreterBuilder;

/// Result of one [`Interpreter::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// An event ran and the position advanced.
    Continued,
    /// A goto fired and the position moved to its scene.
    Jumped,
    /// A breakpoint was passed; the driver may pause now.
    Breakpoint,
    /// Nothing left to run.
    PlayOver,
}

/// A syntax fragment given either as text or as an already parsed node.
///
/// Text is parsed and folded on every call. Nodes are run as given, so a
/// node executed repeatedly should be folded once up front with
/// [`Node::fold`].
pub enum Fragment<'a, N> {
    Text(&'a str),
    Node(&'a N),
}

impl<'a, N> From<&'a str> for Fragment<'a, N> {
    fn from(text: &'a str) -> Self {
        Fragment::Text(text)
    }
}

/// Nodes that can be parsed on their own.
pub trait Node: Clone {
    fn parse(text: &str) -> Result<Self, ParseError>;

    /// Fold constant subexpressions in place. Folding is idempotent.
    fn fold(&mut self);
}

impl Node for Event {
    fn parse(text: &str) -> Result<Self, ParseError> {
        spl_parse::parse_event(text)
    }

    fn fold(&mut self) {
        fold::fold_event(self);
    }
}

impl Node for Sentence {
    fn parse(text: &str) -> Result<Self, ParseError> {
        spl_parse::parse_sentence(text)
    }

    fn fold(&mut self) {
        fold::fold_sentence(self);
    }
}

impl Node for Question {
    fn parse(text: &str) -> Result<Self, ParseError> {
        spl_parse::parse_question(text)
    }

    fn fold(&mut self) {
        fold::fold_expr(&mut self.first);
        fold::fold_expr(&mut self.second);
    }
}

impl Node for Expr {
    fn parse(text: &str) -> Result<Self, ParseError> {
        spl_parse::parse_expression(text)
    }

    fn fold(&mut self) {
        fold::fold_expr(self);
    }
}

macro_rules! fragment_from_node {
    ($($node:ty),*) => {
        $(
            impl<'a> From<&'a $node> for Fragment<'a, $node> {
                fn from(node: &'a $node) -> Self {
                    Fragment::Node(node)
                }
            }
        )*
    };
}

fragment_from_node!(Event, Sentence, Question, Expr);

impl<'a, N: Node> Fragment<'a, N> {
    /// Parse and fold text; borrow nodes as they are.
    fn resolve(self) -> Result<Cow<'a, N>, ParseError> {
        match self {
            Fragment::Text(text) => {
                let mut node = N::parse(text)?;
                node.fold();
                Ok(Cow::Owned(node))
            }
            Fragment::Node(node) => Ok(Cow::Borrowed(node)),
        }
    }
}

pub struct Interpreter {
    play: Play,
    /// Play text, when built from source; used to show events.
    source: Option<String>,
    tracker: PositionTracker,
    stage: Stage,
    input: InputManager,
    output: OutputManager,
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter").finish_non_exhaustive()
    }
}

fn event_at(play: &Play, position: Position) -> Option<&Event> {
    play.acts
        .get(position.act)?
        .scenes
        .get(position.scene)?
        .events
        .get(position.event)
}

impl Interpreter {
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Interpret `play` with standard input and output.
    pub fn new(play: Play) -> EvalResult<Self> {
        InterpreterBuilder::new().build(play)
    }

    /// Parse, fold and validate `source`, with standard input and output.
    pub fn from_source(source: &str) -> Result<Self, Error> {
        InterpreterBuilder::new().build_from_source(source)
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    pub fn play_over(&self) -> bool {
        self.tracker.play_over()
    }

    /// The event the next [`step`](Self::step) will run.
    pub fn next_event(&self) -> Option<&Event> {
        event_at(&self.play, self.tracker.position())
    }

    /// Source text of the next event, when built from source.
    pub fn next_event_text(&self) -> Option<&str> {
        let event = self.next_event()?;
        event.span.slice(self.source.as_deref()?)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            input_style: self.input.style(),
            output_style: self.output.style(),
        }
    }

    pub fn set_input(&mut self, input: InputManager) {
        self.input = input;
    }

    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn set_output_style(&mut self, style: OutputStyle) {
        self.output.set_style(style);
    }

    /// Output captured so far (empty when writing to stdout).
    pub fn output(&self) -> &str {
        self.output.output()
    }

    pub fn take_output(&mut self) -> String {
        self.output.take_output()
    }

    /// Run the next event and move the position. On error the position is
    /// left at the failing event.
    #[tracing::instrument(level = "trace", skip_all, fields(position = %self.tracker))]
    pub fn step(&mut self) -> EvalResult<Step> {
        let Some(event) = event_at(&self.play, self.tracker.position()) else {
            return Ok(Step::PlayOver);
        };

        if self.output.style().is_debug() {
            let text = self
                .source
                .as_deref()
                .and_then(|source| event.span.slice(source))
                .unwrap_or_else(|| event.kind.label());
            let (tracker, stage) = (&self.tracker, &self.stage);
            self.output
                .debug(|| format!("----------\nat {tracker}\n-----\n{text}\n-----\n{stage}----------"))
                .map_err(|e| e.with_snapshot(&self.stage))?;
        }

        let mut cx = ExecContext::new(&mut self.stage, &mut self.input, &mut self.output);
        let flow = cx
            .run_event(event)
            .map_err(|e| e.with_snapshot(&self.stage))?;

        match flow {
            Flow::Continue => {
                self.tracker.advance();
                Ok(Step::Continued)
            }
            Flow::Pause => {
                self.tracker.advance();
                Ok(Step::Breakpoint)
            }
            Flow::Jump(scene) => {
                self.tracker
                    .jump(&scene)
                    .map_err(|e| e.with_snapshot(&self.stage))?;
                Ok(Step::Jumped)
            }
        }
    }

    /// Step until the play is over, calling `on_pause` after every
    /// breakpoint.
    pub fn run(&mut self, mut on_pause: impl FnMut(&mut Self)) -> EvalResult<()> {
        tracing::debug!(title = %self.play.title, "running play");
        while !self.play_over() {
            if self.step()? == Step::Breakpoint {
                on_pause(self);
            }
        }
        Ok(())
    }

    /// Run an event against the current state without touching the
    /// position. A goto is reported as [`Flow::Jump`], not taken.
    pub fn run_event<'a>(&mut self, event: impl Into<Fragment<'a, Event>>) -> Result<Flow, Error> {
        let event = event.into().resolve()?;
        let mut cx = ExecContext::new(&mut self.stage, &mut self.input, &mut self.output);
        let flow = cx
            .run_event(&event)
            .map_err(|e| e.with_snapshot(&self.stage))?;
        Ok(flow)
    }

    /// Run a sentence spoken by `character` without touching the position.
    pub fn run_sentence<'a>(
        &mut self,
        sentence: impl Into<Fragment<'a, Sentence>>,
        character: &str,
    ) -> Result<Flow, Error> {
        let sentence = sentence.into().resolve()?;
        let speaker = CharacterName::new(character);
        self.stage
            .assert_on_stage(&speaker)
            .map_err(|e| e.with_span(sentence.span).with_snapshot(&self.stage))?;
        let mut cx = ExecContext::new(&mut self.stage, &mut self.input, &mut self.output);
        let flow = cx
            .run_sentence(&sentence, &speaker)
            .map_err(|e| e.with_snapshot(&self.stage))?;
        Ok(flow)
    }

    /// Value of an expression spoken by `character`.
    pub fn evaluate_expression<'a>(
        &self,
        expr: impl Into<Fragment<'a, Expr>>,
        character: &str,
    ) -> Result<BigInt, Error> {
        let expr = expr.into().resolve()?;
        let speaker = CharacterName::new(character);
        let value = exec::evaluate(&self.stage, &expr, &speaker)
            .map_err(|e| e.with_snapshot(&self.stage))?;
        Ok(value)
    }

    /// Answer a question asked by `character`. The global boolean is not
    /// changed.
    pub fn evaluate_question<'a>(
        &self,
        question: impl Into<Fragment<'a, Question>>,
        character: &str,
    ) -> Result<bool, Error> {
        let question = question.into().resolve()?;
        let speaker = CharacterName::new(character);
        let answer = exec::evaluate_question(&self.stage, &question, &speaker)
            .map_err(|e| e.with_snapshot(&self.stage))?;
        Ok(answer)
    }
}
