pub mod hyperparams;
pub mod perceptron;

pub use hyperparams::Hyperparams;
pub use perceptron::{Perceptron, DEFAULT_LIMIT};
