use serde::Serialize;

use crate::data::example::Example;
use crate::error::{PerceptronError, Result};
use crate::perceptron::hyperparams::Hyperparams;
use crate::train::loop_fn::{train_loop, TrainingOutcome};
use crate::train::train_config::TrainConfig;

/// Default number of training passes per `learn` call.
pub const DEFAULT_LIMIT: usize = 200;

/// A single-layer binary perceptron with a fixed output threshold and no bias.
///
/// The weight vector is the only mutable state. It starts at all zeros and is
/// updated in place by [`learn`](Perceptron::learn); calling `learn` again
/// continues from wherever the previous session left the weights.
#[derive(Debug, Clone, Serialize)]
pub struct Perceptron {
    weights: Vec<f64>,
    learning_rate: f64,
    threshold: f64,
}

impl Perceptron {
    /// Builds a perceptron with `dimensions` zero weights.
    pub fn new(dimensions: usize, learning_rate: f64, threshold: f64) -> Result<Perceptron> {
        validate_parameters(dimensions, learning_rate, threshold)?;
        Ok(Perceptron {
            weights: vec![0.0; dimensions],
            learning_rate,
            threshold,
        })
    }

    pub fn from_hyperparams(params: &Hyperparams) -> Result<Perceptron> {
        Perceptron::new(params.dimensions, params.learning_rate, params.threshold)
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns 1 when `input · weights` is strictly greater than the
    /// threshold, otherwise 0.
    pub fn output(&self, input: &[f64]) -> Result<u8> {
        self.check_dimensions(input)?;
        let activation: f64 = input.iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        Ok(if activation > self.threshold { 1 } else { 0 })
    }

    /// Counts the examples whose output differs from their label.
    /// Does not touch the weights; an empty set has zero errors.
    pub fn test(&self, examples: &[Example]) -> Result<usize> {
        let mut errors = 0;
        for example in examples {
            if self.output(&example.input)? != example.output {
                errors += 1;
            }
        }
        Ok(errors)
    }

    /// Trains until every example is classified correctly or `limit` passes
    /// have been made. Hitting the limit is not an error; check
    /// [`TrainingOutcome::converged`].
    pub fn learn(&mut self, examples: &[Example], limit: usize) -> Result<TrainingOutcome> {
        self.learn_with(examples, &TrainConfig::new(limit))
    }

    /// Same as [`learn`](Perceptron::learn) with a caller-built config, e.g.
    /// one carrying a progress channel.
    pub fn learn_with(&mut self, examples: &[Example], config: &TrainConfig) -> Result<TrainingOutcome> {
        train_loop(self, examples, config)
    }

    /// One online pass of the perceptron rule over `examples`, in order.
    ///
    /// Each example is evaluated against the weights as they stand after the
    /// previous example's correction:
    ///   w[i] += learning_rate * (desired - actual) * x[i]
    ///
    /// All inputs are length-checked before any weight is modified.
    pub fn train_pass(&mut self, examples: &[Example]) -> Result<()> {
        for example in examples {
            self.check_dimensions(&example.input)?;
        }
        for example in examples {
            let actual = self.output(&example.input)?;
            let delta = f64::from(example.output) - f64::from(actual);
            if delta == 0.0 {
                continue;
            }
            let step = self.learning_rate * delta;
            for (w, x) in self.weights.iter_mut().zip(example.input.iter()) {
                *w += step * x;
            }
        }
        Ok(())
    }

    pub(crate) fn check_dimensions(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        Ok(())
    }
}

/// Fails with `InvalidArgument` when `dimensions` is zero, the learning rate
/// is not strictly positive, or the threshold is not finite.
pub(crate) fn validate_parameters(dimensions: usize, learning_rate: f64, threshold: f64) -> Result<()> {
    if dimensions == 0 {
        return Err(PerceptronError::InvalidArgument(
            "dimensions must be at least 1".to_string(),
        ));
    }
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(PerceptronError::InvalidArgument(format!(
            "learning_rate must be a positive finite number, got {learning_rate}"
        )));
    }
    if !threshold.is_finite() {
        return Err(PerceptronError::InvalidArgument(format!(
            "threshold must be finite, got {threshold}"
        )));
    }
    Ok(())
}
