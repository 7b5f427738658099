use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::perceptron::perceptron::{validate_parameters, DEFAULT_LIMIT};

/// Construction and training parameters for a perceptron session.
///
/// Defaults reproduce the logic-gate demo: 4 inputs, learning rate 0.05,
/// threshold 0.5, at most 200 passes per training call. Missing JSON fields
/// fall back to these defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    pub dimensions: usize,
    pub learning_rate: f64,
    pub threshold: f64,
    pub limit: usize,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Hyperparams { dimensions: 4, learning_rate: 0.05, threshold: 0.5, limit: DEFAULT_LIMIT }
    }
}

impl Hyperparams {
    /// Parses and validates a JSON object such as `{"learning_rate": 0.1}`.
    pub fn from_json(json: &str) -> Result<Hyperparams> {
        let params: Hyperparams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Applies the same checks as `Perceptron::new`.
    pub fn validate(&self) -> Result<()> {
        validate_parameters(self.dimensions, self.learning_rate, self.threshold)
    }
}
