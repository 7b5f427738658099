pub mod example;
pub mod logic_gate;

pub use example::{parse_examples, Example};
pub use logic_gate::LogicGate;
