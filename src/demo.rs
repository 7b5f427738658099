//! Logic-gate training session: one perceptron trained on several gates in
//! turn, keeping its weights between gates.

use std::sync::mpsc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data::logic_gate::LogicGate;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::train::iteration_stats::IterationStats;
use crate::train::loop_fn::TrainingOutcome;
use crate::train::train_config::TrainConfig;

/// Training result and post-training outputs for one gate.
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    pub gate: LogicGate,
    pub outcome: TrainingOutcome,
    /// Every truth-table input with the perceptron's output after training.
    pub outputs: Vec<(Vec<f64>, u8)>,
}

/// Trains `perceptron` on each gate's `arity`-input truth table in order and
/// records its outputs after each gate.
///
/// Weights carry over from one gate to the next. When `progress` is given,
/// every pass of every gate is reported on it.
pub fn run_session(
    perceptron: &mut Perceptron,
    gates: &[LogicGate],
    arity: usize,
    limit: usize,
    progress: Option<mpsc::Sender<IterationStats>>,
) -> Result<Vec<GateReport>> {
    let mut reports = Vec::with_capacity(gates.len());

    for &gate in gates {
        let table = gate.truth_table(arity)?;
        debug!(gate = gate.name(), rows = table.len(), "training perceptron");

        let mut config = TrainConfig::new(limit);
        if let Some(ref tx) = progress {
            config = config.with_progress(tx.clone());
        }
        let outcome = perceptron.learn_with(&table, &config)?;
        if !outcome.converged {
            warn!(
                gate = gate.name(),
                iterations = outcome.iterations,
                errors = outcome.errors,
                "training stopped at the iteration limit without converging"
            );
        }

        let outputs = table
            .into_iter()
            .map(|example| {
                let out = perceptron.output(&example.input)?;
                Ok((example.input, out))
            })
            .collect::<Result<Vec<_>>>()?;

        reports.push(GateReport { gate, outcome, outputs });
    }

    Ok(reports)
}

/// Formats an input vector the way the console demo prints it: `[1,0,1,1]`.
pub fn format_input(input: &[f64]) -> String {
    let parts: Vec<String> = input.iter().map(|x| x.to_string()).collect();
    format!("[{}]", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_binary_inputs_without_decimals() {
        assert_eq!(format_input(&[1.0, 0.0, 1.0, 1.0]), "[1,0,1,1]");
        assert_eq!(format_input(&[0.5]), "[0.5]");
        assert_eq!(format_input(&[]), "[]");
    }

    #[test]
    fn session_reports_every_gate_in_order() {
        let mut p = Perceptron::new(4, 0.05, 0.5).unwrap();
        let reports = run_session(&mut p, &LogicGate::ALL, 4, 200, None).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports.iter().map(|r| r.gate).collect::<Vec<_>>(), LogicGate::ALL.to_vec());
        assert!(reports[0].outcome.converged);
        assert!(reports[1].outcome.converged);
        assert!(!reports[2].outcome.converged);
        assert_eq!(reports[2].outcome.iterations, 200);
        assert!(reports.iter().all(|r| r.outputs.len() == 16));
    }

    #[test]
    fn converged_gate_outputs_match_its_truth_table() {
        let mut p = Perceptron::new(4, 0.05, 0.5).unwrap();
        let reports = run_session(&mut p, &[LogicGate::Or], 4, 200, None).unwrap();
        let table = LogicGate::Or.truth_table(4).unwrap();
        for ((input, out), example) in reports[0].outputs.iter().zip(table.iter()) {
            assert_eq!(input, &example.input);
            assert_eq!(*out, example.output);
        }
    }

    #[test]
    fn progress_spans_all_gates() {
        let mut p = Perceptron::new(4, 0.05, 0.5).unwrap();
        let (tx, rx) = mpsc::channel();
        let reports = run_session(&mut p, &LogicGate::ALL, 4, 200, Some(tx)).unwrap();
        let total: usize = reports.iter().map(|r| r.outcome.iterations).sum();
        assert_eq!(rx.iter().count(), total);
    }
}
