// Trains one 4-input perceptron on AND, then OR, then XOR, reusing the
// weights between gates, and prints progress and outputs for each.
// Set RUST_LOG=info (or debug) to see the structured training log as well.
use std::sync::mpsc;

use ferrite_perceptron::demo::{format_input, run_session};
use ferrite_perceptron::{Hyperparams, LogicGate, Perceptron};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = Hyperparams::default();
    let mut perceptron = Perceptron::from_hyperparams(&params)?;

    for (i, gate) in LogicGate::ALL.into_iter().enumerate() {
        if i > 0 {
            println!("\n");
        }
        println!("Training perceptron for logic {}\n", gate.name());

        let (tx, rx) = mpsc::channel();
        let reports = run_session(&mut perceptron, &[gate], params.dimensions, params.limit, Some(tx))?;
        for stats in rx.iter() {
            println!("training iteration # {}, errors found: {}", stats.iteration, stats.errors);
        }

        println!();
        for report in &reports {
            for (input, output) in &report.outputs {
                println!("output for {}: {}", format_input(input), output);
            }
        }
    }

    Ok(())
}
