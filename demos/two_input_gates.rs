use ferrite_perceptron::{LogicGate, Perceptron, DEFAULT_LIMIT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for gate in LogicGate::ALL {
        // Fresh weights for every gate, unlike the 4-input session binary.
        let mut perceptron = Perceptron::new(2, 0.1, 0.5)?;
        let table = gate.truth_table(2)?;
        let outcome = perceptron.learn(&table, DEFAULT_LIMIT)?;

        println!(
            "{}: {} after {} iterations ({} errors), weights = {:?}",
            gate.name(),
            if outcome.converged { "converged" } else { "gave up" },
            outcome.iterations,
            outcome.errors,
            perceptron.weights(),
        );
        for example in &table {
            println!("  Input: {:?} -> Output: {}", example.input, perceptron.output(&example.input)?);
        }
    }
    Ok(())
}
