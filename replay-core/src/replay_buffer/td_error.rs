//! Temporal-difference errors under the current value estimates.
use crate::{Transition, ValueEstimator};
use anyhow::{ensure, Result};

/// Computes TD errors through a borrowed value-prediction capability.
///
/// Holds no state beyond the capability and the discount factor; the TD
/// error is a pure function of the transition and the model's current
/// weights.
#[derive(Debug)]
pub struct TdErrorEstimator<M: ValueEstimator> {
    model: M,
    discount: f32,
}

impl<M: ValueEstimator> TdErrorEstimator<M> {
    /// Creates an estimator with a fixed discount factor.
    pub fn new(model: M, discount: f32) -> Self {
        Self { model, discount }
    }

    /// Discount factor applied to predicted future value.
    pub fn discount(&self) -> f32 {
        self.discount
    }

    /// Predicted action-value vector for a state.
    ///
    /// The returned vector is owned by the caller and safe to mutate; it
    /// never aliases storage held by the model.
    pub fn q_values(&self, state: &[f32]) -> Result<Vec<f32>> {
        let q = self.model.predict(state)?;
        ensure!(
            !q.is_empty(),
            "value estimator returned an empty action-value vector"
        );
        Ok(q)
    }

    /// Maximum predicted action value for a state.
    pub fn max_q(&self, state: &[f32]) -> Result<f32> {
        let q = self.q_values(state)?;
        Ok(q.iter().fold(f32::NEG_INFINITY, |m, &v| m.max(v)))
    }

    /// TD error of one transition.
    ///
    /// For terminal transitions this is `reward - Q(s)[a]`; otherwise
    /// `reward + discount * max Q(s') - Q(s)[a]`.
    pub fn td_error(&self, tr: &Transition) -> Result<f32> {
        let target = self.q_values(&tr.state)?;
        ensure!(
            tr.action < target.len(),
            "action {} out of range for {} predicted action values",
            tr.action,
            target.len()
        );
        let q_sa = target[tr.action];
        if tr.is_terminated {
            Ok(tr.reward - q_sa)
        } else {
            let next_max = self.max_q(&tr.next_state)?;
            Ok(tr.reward + self.discount * next_max - q_sa)
        }
    }
}
