//! A character's register and stack.

use std::fmt;

use num_bigint::BigInt;
use spl_ir::CharacterName;

use crate::errors::{empty_stack, EvalResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    name: CharacterName,
    value: BigInt,
    /// Bottom first; the top of the stack is the last element.
    stack: Vec<BigInt>,
}

impl Character {
    pub fn new(name: CharacterName) -> Self {
        Character {
            name,
            value: BigInt::default(),
            stack: Vec::new(),
        }
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn set_value(&mut self, value: BigInt) {
        self.value = value;
    }

    /// The stack from bottom to top.
    pub fn stack(&self) -> &[BigInt] {
        &self.stack
    }

    pub fn push(&mut self, value: BigInt) {
        self.stack.push(value);
    }

    /// Pop the top of the stack into the register.
    pub fn pop(&mut self) -> EvalResult<()> {
        let Some(top) = self.stack.pop() else {
            return Err(empty_stack(&self.name));
        };
        self.value = top;
        Ok(())
    }
}

/// `value (top ... bottom)`
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.value)?;
        for (i, item) in self.stack.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests;
