//! Training batches assembled by priority-weighted sampling.
use ndarray::Array2;

/// One training batch sampled from the replay buffer.
///
/// `indices` records the buffer positions the batch was drawn from. After a
/// training step has produced fresh TD errors for exactly these transitions,
/// feed them back through
/// [`super::PrioritizedReplayBuffer::update_priorities`] with the same
/// indices so the corresponding priorities are updated.
#[derive(Clone, Debug)]
pub struct TrainingBatch {
    /// Sampled states, one row per draw (`batch_len x state_dim`).
    pub inputs: Array2<f32>,

    /// Adjusted action-value targets, one row per draw
    /// (`batch_len x num_actions`).
    pub targets: Array2<f32>,

    /// Buffer positions of the draws. Sampling is with replacement, so the
    /// same position may appear more than once.
    pub indices: Vec<usize>,

    /// Importance-sampling weights after batch-max normalization. The
    /// largest weight in the batch is exactly 1.
    pub weights: Vec<f32>,
}

impl TrainingBatch {
    /// Number of draws in this batch.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the batch contains no draws.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
