use std::sync::mpsc;

use ferrite_perceptron::{
    parse_examples, Example, Hyperparams, LogicGate, Perceptron, PerceptronError, TrainConfig,
    DEFAULT_LIMIT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gate_perceptron() -> Perceptron {
    Perceptron::from_hyperparams(&Hyperparams::default()).unwrap()
}

#[test]
fn and_scenario_separates_all_ones_from_three_ones() {
    let mut p = gate_perceptron();
    let table = LogicGate::And.truth_table(4).unwrap();
    p.learn(&table, DEFAULT_LIMIT).unwrap();

    assert_eq!(p.test(&table).unwrap(), 0);
    assert_eq!(p.output(&[1.0, 1.0, 1.0, 1.0]).unwrap(), 1);
    assert_eq!(p.output(&[1.0, 1.0, 1.0, 0.0]).unwrap(), 0);
}

#[test]
fn linearly_separable_gates_converge_from_fresh_weights() {
    for (gate, passes) in [(LogicGate::And, 3), (LogicGate::Or, 8)] {
        let mut p = gate_perceptron();
        let table = gate.truth_table(4).unwrap();
        let outcome = p.learn(&table, DEFAULT_LIMIT).unwrap();
        assert!(outcome.converged, "{} should converge", gate.name());
        assert_eq!(outcome.iterations, passes, "{}", gate.name());
        assert_eq!(p.test(&table).unwrap(), 0);
    }
}

#[test]
fn xor_stops_at_exactly_the_limit() {
    let mut p = gate_perceptron();
    let table = LogicGate::Xor.truth_table(4).unwrap();
    let (tx, rx) = mpsc::channel();
    let outcome = p.learn_with(&table, &TrainConfig::new(DEFAULT_LIMIT).with_progress(tx)).unwrap();

    assert_eq!(outcome.iterations, 200);
    assert!(outcome.errors > 0);
    assert_eq!(p.test(&table).unwrap(), outcome.errors);

    let records: Vec<_> = rx.iter().collect();
    assert_eq!(records.len(), 200);
    assert_eq!(records.last().unwrap().iteration, 200);
    assert!(records.iter().all(|r| r.errors > 0));
}

#[test]
fn chained_session_reuses_weights_across_gates() {
    let mut p = gate_perceptron();

    let and = p.learn(&LogicGate::And.truth_table(4).unwrap(), DEFAULT_LIMIT).unwrap();
    let after_and = p.weights().to_vec();
    assert!(and.converged);

    // Starting from the AND weights takes one pass fewer than from zero.
    let or = p.learn(&LogicGate::Or.truth_table(4).unwrap(), DEFAULT_LIMIT).unwrap();
    assert!(or.converged);
    assert_eq!(or.iterations, 7);
    assert_ne!(p.weights(), after_and.as_slice());

    let xor = p.learn(&LogicGate::Xor.truth_table(4).unwrap(), DEFAULT_LIMIT).unwrap();
    assert!(!xor.converged);
    assert_eq!(xor.iterations, 200);
}

#[test]
fn learning_again_on_a_fitted_set_is_a_no_op() {
    let mut p = gate_perceptron();
    let table = LogicGate::Or.truth_table(4).unwrap();
    p.learn(&table, DEFAULT_LIMIT).unwrap();
    let fitted = p.weights().to_vec();

    let outcome = p.learn(&table, DEFAULT_LIMIT).unwrap();
    assert_eq!(outcome.iterations, 0);
    assert_eq!(p.weights(), fitted.as_slice());
}

#[test]
fn output_and_test_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut p = gate_perceptron();
    p.learn(&LogicGate::And.truth_table(4).unwrap(), DEFAULT_LIMIT).unwrap();

    let examples: Vec<Example> = (0..64)
        .map(|_| {
            let input = (0..4).map(|_| rng.gen_range(-1.0..2.0)).collect();
            Example::new(input, rng.gen_range(0..=1))
        })
        .collect();

    let mut mismatches = 0;
    for example in &examples {
        let first = p.output(&example.input).unwrap();
        assert_eq!(first, p.output(&example.input).unwrap());
        if first != example.output {
            mismatches += 1;
        }
    }
    assert_eq!(p.test(&examples).unwrap(), mismatches);
    assert_eq!(p.test(&examples).unwrap(), mismatches);
}

#[test]
fn one_pass_moves_at_least_one_weight() {
    let mut p = gate_perceptron();
    let table = LogicGate::Xor.truth_table(4).unwrap();
    assert!(p.test(&table).unwrap() > 0);

    let before = p.weights().to_vec();
    p.train_pass(&table).unwrap();
    assert!(p.weights().iter().zip(before.iter()).any(|(a, b)| a != b));
}

#[test]
fn wrong_input_length_is_rejected_everywhere() {
    let mut p = gate_perceptron();
    let short = vec![Example::new(vec![1.0, 1.0, 1.0], 1)];

    assert!(matches!(
        p.output(&[1.0, 1.0, 1.0]),
        Err(PerceptronError::DimensionMismatch { expected: 4, actual: 3 })
    ));
    assert!(matches!(
        p.output(&[1.0, 1.0, 1.0, 1.0, 1.0]),
        Err(PerceptronError::DimensionMismatch { expected: 4, actual: 5 })
    ));
    assert!(matches!(p.test(&short), Err(PerceptronError::DimensionMismatch { .. })));
    assert!(matches!(p.learn(&short, DEFAULT_LIMIT), Err(PerceptronError::DimensionMismatch { .. })));
    assert_eq!(p.weights(), &[0.0; 4]);
}

#[test]
fn trains_on_a_parsed_json_training_set() {
    let examples = parse_examples(
        r#"[
            {"input": [0, 0], "output": 0},
            {"input": [0, 1], "output": 1},
            {"input": [1, 0], "output": 1},
            {"input": [1, 1], "output": 1}
        ]"#,
    ).unwrap();
    let mut p = Perceptron::new(2, 0.1, 0.5).unwrap();
    let outcome = p.learn(&examples, DEFAULT_LIMIT).unwrap();
    assert!(outcome.converged);
    assert_eq!(p.output(&[0.0, 0.0]).unwrap(), 0);
    assert_eq!(p.output(&[1.0, 1.0]).unwrap(), 1);
}
