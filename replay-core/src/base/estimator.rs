//! Value-prediction capability consumed by the replay buffer.
use anyhow::Result;

/// Capability of predicting action values for a state.
///
/// Implementors map a state vector of length `state_dim` to a vector of
/// action values of length `num_actions`. Prediction must be deterministic
/// for a fixed set of model weights; the buffer never mutates the model.
///
/// Failures of the underlying model (e.g. a malformed state vector) propagate
/// unchanged to the caller of the buffer operation that triggered the
/// prediction.
pub trait ValueEstimator {
    /// Returns the predicted action-value vector for the given state.
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>>;
}

impl<M: ValueEstimator + ?Sized> ValueEstimator for &M {
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>> {
        (**self).predict(state)
    }
}

impl<M: ValueEstimator + ?Sized> ValueEstimator for Box<M> {
    fn predict(&self, state: &[f32]) -> Result<Vec<f32>> {
        (**self).predict(state)
    }
}
