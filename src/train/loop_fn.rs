use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::data::example::Example;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Result of one `train_loop` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Passes made in this call (0 if the set was already classified).
    pub iterations: usize,
    /// Misclassified examples when the loop stopped.
    pub errors: usize,
    /// `true` iff `errors == 0`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` with the online perceptron rule until `examples` are
/// all classified correctly or `config.limit` passes have been made.
///
/// # Arguments
/// - `perceptron` — modified in place; existing weights are the starting point
/// - `examples`   — training set, visited in order on every pass
/// - `config`     — pass limit and optional progress channel
///
/// # Errors
/// `DimensionMismatch` if any example's input length differs from the weight
/// count. This is checked before the first pass, so the weights are left
/// untouched.
pub fn train_loop(
    perceptron: &mut Perceptron,
    examples: &[Example],
    config: &TrainConfig,
) -> Result<TrainingOutcome> {
    for example in examples {
        perceptron.check_dimensions(&example.input)?;
    }

    let mut iteration = 0;
    let mut errors = perceptron.test(examples)?;

    while errors != 0 && iteration < config.limit {
        perceptron.train_pass(examples)?;
        iteration += 1;
        errors = perceptron.test(examples)?;

        info!(
            target: "ferrite_perceptron::train",
            iteration,
            errors,
            limit = config.limit,
            "training iteration # {iteration}, errors found: {errors}"
        );

        if let Some(ref tx) = config.progress_tx {
            let stats = IterationStats {
                iteration,
                limit: config.limit,
                errors,
                examples: examples.len(),
            };
            if tx.send(stats).is_err() {
                debug!(target: "ferrite_perceptron::train", "progress receiver dropped");
            }
        }
    }

    Ok(TrainingOutcome {
        iterations: iteration,
        errors,
        converged: errors == 0,
    })
}
