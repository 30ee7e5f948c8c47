//! The act/scene/event cursor.
//!
//! The tracker works over an [`Outline`] of the play: act and scene numerals
//! and the event count of every scene. Its [`Position`] is always normalized:
//! it either addresses a real event or is the "play over" sentinel, where the
//! act index equals the number of acts. Empty scenes and empty acts are
//! skipped transparently.

use std::fmt;

use rustc_hash::FxHashSet;
use spl_ir::{to_roman, Numeral, Play};

use crate::errors::{duplicate_numeral, unknown_scene, EvalResult};

/// Indices into the play tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub act: usize,
    pub scene: usize,
    pub event: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ActOutline {
    numeral: u32,
    scenes: Vec<SceneOutline>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SceneOutline {
    numeral: u32,
    events: usize,
}

/// The shape of a play, validated for unique numerals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    acts: Vec<ActOutline>,
}

impl Outline {
    /// Fails with `DuplicateNumeral` at the second declaration of an act
    /// numeral, or of a scene numeral within one act.
    pub fn of(play: &Play) -> EvalResult<Self> {
        let mut acts = Vec::with_capacity(play.acts.len());
        let mut act_numerals = FxHashSet::default();
        for act in &play.acts {
            if !act_numerals.insert(act.numeral.value) {
                return Err(duplicate_numeral(act.numeral.value, None).with_span(act.numeral.span));
            }
            let mut scene_numerals = FxHashSet::default();
            let mut scenes = Vec::with_capacity(act.scenes.len());
            for scene in &act.scenes {
                if !scene_numerals.insert(scene.numeral.value) {
                    return Err(duplicate_numeral(scene.numeral.value, Some(act.numeral.value))
                        .with_span(scene.numeral.span));
                }
                scenes.push(SceneOutline {
                    numeral: scene.numeral.value,
                    events: scene.events.len(),
                });
            }
            acts.push(ActOutline {
                numeral: act.numeral.value,
                scenes,
            });
        }
        Ok(Outline { acts })
    }
}

pub struct PositionTracker {
    outline: Outline,
    position: Position,
}

impl PositionTracker {
    /// Start at the first real event of the play.
    pub fn new(outline: Outline) -> Self {
        let mut tracker = PositionTracker {
            outline,
            position: Position::default(),
        };
        tracker.normalize();
        tracker
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn play_over(&self) -> bool {
        self.position.act >= self.outline.acts.len()
    }

    /// Move to the next event. No-op once the play is over.
    pub fn advance(&mut self) {
        if self.play_over() {
            return;
        }
        self.position.event += 1;
        self.normalize();
    }

    /// Move to the first event of the scene numbered `numeral` in the
    /// current act. Scenes of other acts are never considered.
    pub fn jump(&mut self, numeral: &Numeral) -> EvalResult<()> {
        let Some(act) = self.outline.acts.get(self.position.act) else {
            return Err(unknown_scene(numeral.value, 0).with_span(numeral.span));
        };
        let Some(scene) = act.scenes.iter().position(|s| s.numeral == numeral.value) else {
            return Err(unknown_scene(numeral.value, act.numeral).with_span(numeral.span));
        };
        self.position.scene = scene;
        self.position.event = 0;
        self.normalize();
        tracing::debug!(position = %self, "jumped");
        Ok(())
    }

    /// Carry event overflow into scenes and scene overflow into acts until
    /// the position addresses an event or the play is over.
    fn normalize(&mut self) {
        let acts = &self.outline.acts;
        let pos = &mut self.position;
        while let Some(act) = acts.get(pos.act) {
            match act.scenes.get(pos.scene) {
                Some(scene) if pos.event < scene.events => return,
                Some(_) => {
                    pos.event = 0;
                    pos.scene += 1;
                }
                None => {
                    pos.event = 0;
                    pos.scene = 0;
                    pos.act += 1;
                }
            }
        }
    }

    /// Numerals of the current act and scene, if the play is not over.
    pub fn current_numerals(&self) -> Option<(u32, u32)> {
        let act = self.outline.acts.get(self.position.act)?;
        let scene = act.scenes.get(self.position.scene)?;
        Some((act.numeral, scene.numeral))
    }
}

/// `Act II, Scene III, event 4`, or `play over`.
impl fmt::Display for PositionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_numerals() {
            Some((act, scene)) => write!(
                f,
                "Act {}, Scene {}, event {}",
                to_roman(act),
                to_roman(scene),
                self.position.event + 1
            ),
            None => f.write_str("play over"),
        }
    }
}

#[cfg(test)]
mod tests;
