//! Event dispatch.

use spl_ir::{CharacterName, Event, EventKind, Line};

use super::{ExecContext, Flow};
use crate::errors::EvalResult;

fn name_list(names: &[CharacterName]) -> String {
    names
        .iter()
        .map(CharacterName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ExecContext<'_> {
    #[tracing::instrument(level = "trace", skip_all, fields(kind = event.kind.label()))]
    pub(crate) fn run_event(&mut self, event: &Event) -> EvalResult<Flow> {
        self.event_kind(&event.kind)
            .map_err(|e| e.with_span(event.span))
    }

    fn event_kind(&mut self, kind: &EventKind) -> EvalResult<Flow> {
        match kind {
            EventKind::Line(line) => return self.run_line(line),
            EventKind::Entrance(names) => {
                self.output
                    .narrate(|| format!("Enter {}", name_list(names)))?;
                self.stage.enter(names)?;
            }
            EventKind::Exeunt(Some(names)) => {
                self.output
                    .narrate(|| format!("Exeunt {}", name_list(names)))?;
                self.stage.exeunt(Some(names))?;
            }
            EventKind::Exeunt(None) => {
                self.output.narrate(|| String::from("Exeunt all"))?;
                self.stage.exeunt(None)?;
            }
            EventKind::Exit(name) => {
                self.output.narrate(|| format!("Exit {name}"))?;
                self.stage.exit(name)?;
            }
            EventKind::Breakpoint => return Ok(Flow::Pause),
        }
        Ok(Flow::Continue)
    }

    /// Run the sentences in order, stopping at the first goto that fires.
    /// Sentences that already ran keep their effects if a later one fails.
    fn run_line(&mut self, line: &Line) -> EvalResult<Flow> {
        self.stage
            .assert_on_stage(&line.speaker)
            .map_err(|e| e.with_span(line.speaker_span))?;
        for sentence in &line.sentences {
            let flow = self.run_sentence(sentence, &line.speaker)?;
            if flow != Flow::Continue {
                return Ok(flow);
            }
        }
        Ok(Flow::Continue)
    }
}
