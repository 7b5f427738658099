use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, Result};

/// One labeled sample: an input vector and its desired binary output.
///
/// Serialized as `{"input": [0, 1], "output": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    /// Desired output, 0 or 1.
    pub output: u8,
}

impl Example {
    pub fn new(input: Vec<f64>, output: u8) -> Example {
        Example { input, output }
    }
}

/// Parses a training set in the `[{"input": [...], "output": 0|1}, ...]`
/// format. Labels other than 0 and 1 are rejected.
pub fn parse_examples(json: &str) -> Result<Vec<Example>> {
    let examples: Vec<Example> = serde_json::from_str(json)?;
    if let Some((index, bad)) = examples.iter().enumerate().find(|(_, e)| e.output > 1) {
        return Err(PerceptronError::InvalidArgument(format!(
            "example {index} has output {}, expected 0 or 1",
            bad.output
        )));
    }
    Ok(examples)
}
