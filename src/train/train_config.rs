use std::sync::mpsc;
use crate::train::iteration_stats::IterationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `limit`       — maximum number of full passes over the training set
/// - `progress_tx` — optional channel sender; one `IterationStats` is sent per
///                   completed pass. A dropped receiver is ignored; training
///                   still runs to convergence or the limit.
pub struct TrainConfig {
    pub limit: usize,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(limit: usize) -> Self {
        TrainConfig {
            limit,
            progress_tx: None,
        }
    }

    /// Attaches a progress channel.
    pub fn with_progress(mut self, tx: mpsc::Sender<IterationStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
