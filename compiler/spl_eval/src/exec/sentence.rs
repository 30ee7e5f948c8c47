//! Sentence dispatch.

use spl_ir::{CharacterName, InputKind, OutputKind, Sentence, SentenceKind};

use super::{evaluate, evaluate_question, ExecContext, Flow};
use crate::errors::EvalResult;

fn bool_word(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl ExecContext<'_> {
    /// Execute one sentence spoken by `speaker`. Evaluation happens before
    /// any mutation, so a failing sentence changes nothing.
    #[tracing::instrument(level = "trace", skip_all, fields(%speaker))]
    pub(crate) fn run_sentence(
        &mut self,
        sentence: &Sentence,
        speaker: &CharacterName,
    ) -> EvalResult<Flow> {
        self.sentence_kind(&sentence.kind, speaker)
            .map_err(|e| e.with_span(sentence.span))
    }

    fn sentence_kind(&mut self, kind: &SentenceKind, speaker: &CharacterName) -> EvalResult<Flow> {
        match kind {
            SentenceKind::Assignment(expr) => {
                let value = evaluate(self.stage, expr, speaker)?;
                let target = self.stage.opposite_mut(speaker)?;
                tracing::debug!(name = %target.name(), %value, "assign");
                target.set_value(value);
                let target = &*target;
                self.output
                    .narrate(|| format!("{} set to {}", target.name(), target.value()))?;
            }
            SentenceKind::Question(question) => {
                let result = evaluate_question(self.stage, question, speaker)?;
                tracing::debug!(result, "global boolean");
                self.stage.set_global_boolean(result);
                self.output
                    .narrate(|| format!("Setting global boolean to {}", bool_word(result)))?;
            }
            SentenceKind::Goto {
                condition,
                destination,
            } => {
                self.stage.assert_on_stage(speaker)?;
                let flag = self.stage.global_boolean();
                if condition.map_or(true, |polarity| polarity.matches(flag)) {
                    self.output
                        .narrate(|| format!("Jumping to Scene {destination}"))?;
                    return Ok(Flow::Jump(*destination));
                }
                self.output.narrate(|| {
                    format!(
                        "Not jumping to Scene {destination} because global boolean is {}",
                        bool_word(flag)
                    )
                })?;
            }
            SentenceKind::Output(kind) => {
                let target = self.stage.opposite(speaker)?;
                let value = self.stage.character(target)?.value().clone();
                self.output.narrate(|| format!("Outputting {target}"))?;
                match kind {
                    OutputKind::Number => self.output.output_number(&value)?,
                    OutputKind::Character => self.output.output_character(&value)?,
                }
            }
            SentenceKind::Input(kind) => {
                let target = self.stage.opposite(speaker)?.clone();
                let value = match kind {
                    InputKind::Number => self.input.consume_numeric_input()?,
                    InputKind::Character => self.input.consume_character_input()?,
                };
                self.output
                    .narrate(|| format!("Setting {target} to input value {value}"))?;
                tracing::debug!(name = %target, %value, "input");
                self.stage.character_mut(&target)?.set_value(value);
            }
            SentenceKind::Push(expr) => {
                let value = evaluate(self.stage, expr, speaker)?;
                let target = self.stage.opposite_mut(speaker)?;
                self.output
                    .narrate(|| format!("{} pushed {value}", target.name()))?;
                tracing::debug!(name = %target.name(), %value, "push");
                target.push(value);
            }
            SentenceKind::Pop => {
                let target = self.stage.opposite_mut(speaker)?;
                self.output
                    .narrate(|| format!("Popping stack of {}", target.name()))?;
                target.pop()?;
                tracing::debug!(name = %target.name(), value = %target.value(), "pop");
            }
        }
        Ok(Flow::Continue)
    }
}
