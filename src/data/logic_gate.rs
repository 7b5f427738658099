use serde::{Deserialize, Serialize};

use crate::data::example::Example;
use crate::error::{PerceptronError, Result};

/// Widest truth table `truth_table` will build (65 536 rows).
pub const MAX_ARITY: usize = 16;

/// The n-ary logic gates used as training sets.
///
/// - `And` — 1 iff every input is 1.
/// - `Or`  — 1 iff at least one input is 1.
/// - `Xor` — 1 iff exactly one input is 1. For two inputs this is ordinary
///   XOR; for more it is the "one-hot" generalization. Either way it is not
///   linearly separable, so a single perceptron never fits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicGate {
    And,
    Or,
    Xor,
}

impl LogicGate {
    /// Demo order: AND, then OR, then XOR.
    pub const ALL: [LogicGate; 3] = [LogicGate::And, LogicGate::Or, LogicGate::Xor];

    pub fn name(&self) -> &'static str {
        match self {
            LogicGate::And => "AND",
            LogicGate::Or => "OR",
            LogicGate::Xor => "XOR",
        }
    }

    /// Gate output for a vector of bits.
    pub fn evaluate(&self, bits: &[bool]) -> u8 {
        let result = match self {
            LogicGate::And => bits.iter().all(|&b| b),
            LogicGate::Or => bits.iter().any(|&b| b),
            LogicGate::Xor => bits.iter().filter(|&&b| b).count() == 1,
        };
        u8::from(result)
    }

    /// Every `2^arity` input combination with its gate output, in ascending
    /// binary order with the most significant input first.
    pub fn truth_table(&self, arity: usize) -> Result<Vec<Example>> {
        if arity > MAX_ARITY {
            return Err(PerceptronError::InvalidArgument(format!(
                "truth table arity must be at most {MAX_ARITY}, got {arity}"
            )));
        }
        let rows = (0..1usize << arity)
            .map(|row| {
                let bits: Vec<bool> = (0..arity)
                    .map(|i| (row >> (arity - 1 - i)) & 1 == 1)
                    .collect();
                let input = bits.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
                Example::new(input, self.evaluate(&bits))
            })
            .collect();
        Ok(rows)
    }
}
