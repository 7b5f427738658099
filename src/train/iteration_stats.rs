use serde::{Serialize, Deserialize};

/// Progress record emitted by `train_loop` after every completed pass.
///
/// The same values are logged as a `tracing` event; when a `progress_tx`
/// channel is configured in `TrainConfig`, one `IterationStats` is also sent
/// per pass so callers can print or chart progress themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based pass number.
    pub iteration: usize,
    /// Pass limit for this training call.
    pub limit: usize,
    /// Misclassified examples after this pass.
    pub errors: usize,
    /// Size of the training set.
    pub examples: usize,
}
