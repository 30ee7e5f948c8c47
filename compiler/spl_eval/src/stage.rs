//! Who is on stage, every character's state, and the global boolean.
//!
//! Characters are created once from the dramatis personae and never
//! removed; entrances and exits only move names between the on-stage and
//! off-stage sets. Operations that fail leave the stage untouched.

use std::fmt;

use rustc_hash::FxHashMap;
use spl_ir::CharacterName;

use crate::errors::{
    already_on_stage, ambiguous_target, not_on_stage, unknown_character, EvalResult,
};
use crate::Character;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stage {
    characters: FxHashMap<CharacterName, Character>,
    /// Declaration order, for display.
    roster: Vec<CharacterName>,
    /// Entrance order.
    on_stage: Vec<CharacterName>,
    global_boolean: bool,
}

impl Stage {
    /// A stage with every roster character off stage. Repeated names are
    /// collapsed to their first declaration.
    pub fn new(roster: impl IntoIterator<Item = CharacterName>) -> Self {
        let mut stage = Stage::default();
        for name in roster {
            if stage.characters.contains_key(&name) {
                tracing::warn!(%name, "character declared twice; keeping the first");
                continue;
            }
            stage
                .characters
                .insert(name.clone(), Character::new(name.clone()));
            stage.roster.push(name);
        }
        stage
    }

    pub fn character(&self, name: &CharacterName) -> EvalResult<&Character> {
        self.characters
            .get(name)
            .ok_or_else(|| unknown_character(name))
    }

    pub fn character_mut(&mut self, name: &CharacterName) -> EvalResult<&mut Character> {
        self.characters
            .get_mut(name)
            .ok_or_else(|| unknown_character(name))
    }

    /// Every character in declaration order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.roster.iter().filter_map(|name| self.characters.get(name))
    }

    /// On-stage names in entrance order.
    pub fn on_stage(&self) -> &[CharacterName] {
        &self.on_stage
    }

    pub fn is_on_stage(&self, name: &CharacterName) -> bool {
        self.on_stage.contains(name)
    }

    pub fn global_boolean(&self) -> bool {
        self.global_boolean
    }

    pub fn set_global_boolean(&mut self, value: bool) {
        self.global_boolean = value;
    }

    /// Bring every named character on stage.
    pub fn enter(&mut self, names: &[CharacterName]) -> EvalResult<()> {
        for (i, name) in names.iter().enumerate() {
            self.character(name)?;
            if self.is_on_stage(name) || names[..i].contains(name) {
                return Err(already_on_stage(name));
            }
        }
        self.on_stage.extend(names.iter().cloned());
        tracing::debug!(?names, "enter");
        Ok(())
    }

    /// Remove the named characters, or everyone when `names` is `None`.
    pub fn exeunt(&mut self, names: Option<&[CharacterName]>) -> EvalResult<()> {
        let Some(names) = names else {
            self.on_stage.clear();
            tracing::debug!("exeunt all");
            return Ok(());
        };
        for name in names {
            self.assert_on_stage(name)?;
        }
        self.on_stage.retain(|name| !names.contains(name));
        tracing::debug!(?names, "exeunt");
        Ok(())
    }

    pub fn exit(&mut self, name: &CharacterName) -> EvalResult<()> {
        self.assert_on_stage(name)?;
        self.on_stage.retain(|n| n != name);
        tracing::debug!(%name, "exit");
        Ok(())
    }

    pub fn assert_on_stage(&self, name: &CharacterName) -> EvalResult<()> {
        self.character(name)?;
        if self.is_on_stage(name) {
            Ok(())
        } else {
            Err(not_on_stage(name))
        }
    }

    /// The single other character on stage with `speaker`.
    pub fn opposite(&self, speaker: &CharacterName) -> EvalResult<&CharacterName> {
        self.assert_on_stage(speaker)?;
        let mut others = self.on_stage.iter().filter(|name| *name != speaker);
        match (others.next(), others.next()) {
            (Some(other), None) => Ok(other),
            _ => {
                let count = self.on_stage.len() - 1;
                Err(ambiguous_target(speaker, count))
            }
        }
    }

    /// The opposite character, for mutation.
    pub fn opposite_mut(&mut self, speaker: &CharacterName) -> EvalResult<&mut Character> {
        let other = self.opposite(speaker)?.clone();
        self.character_mut(&other)
    }
}

fn bool_word(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// ```text
/// global boolean = False
/// on stage:
///   Romeo = 0 ()
/// off stage:
///   Juliet = 3 (1)
/// ```
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "global boolean = {}", bool_word(self.global_boolean))?;
        writeln!(f, "on stage:")?;
        for name in &self.on_stage {
            if let Some(character) = self.characters.get(name) {
                writeln!(f, "  {name} = {character}")?;
            }
        }
        writeln!(f, "off stage:")?;
        for character in self.characters().filter(|c| !self.is_on_stage(c.name())) {
            writeln!(f, "  {} = {character}", character.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
