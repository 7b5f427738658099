pub mod error;
pub mod data;
pub mod perceptron;
pub mod train;
pub mod demo;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use data::example::{parse_examples, Example};
pub use data::logic_gate::LogicGate;
pub use perceptron::hyperparams::Hyperparams;
pub use perceptron::perceptron::{Perceptron, DEFAULT_LIMIT};
pub use train::iteration_stats::IterationStats;
pub use train::loop_fn::{train_loop, TrainingOutcome};
pub use train::train_config::TrainConfig;
