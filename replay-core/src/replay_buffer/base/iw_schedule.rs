//! Scheduling the exponent of the importance-sampling weight.
use serde::{Deserialize, Serialize};

/// Linear schedule of the importance-sampling exponent beta.
///
/// Beta moves from `beta_0` to `beta_final` over `n_updates_final` priority
/// updates, then stays at `beta_final`. With `beta_final == beta_0` the
/// exponent is constant over the buffer's lifetime.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct IwSchedule {
    /// Initial value of beta.
    pub beta_0: f32,

    /// Final value of beta.
    pub beta_final: f32,

    /// Priority updates after which beta reaches its final value.
    pub n_updates_final: usize,

    /// Priority updates seen so far.
    pub n_updates: usize,
}

impl IwSchedule {
    /// Creates a schedule.
    pub fn new(beta_0: f32, beta_final: f32, n_updates_final: usize) -> Self {
        Self {
            beta_0,
            beta_final,
            n_updates_final,
            n_updates: 0,
        }
    }

    /// Gets the current exponent of the importance-sampling weight.
    pub fn beta(&self) -> f32 {
        let n_updates = self.n_updates;
        if n_updates >= self.n_updates_final {
            self.beta_final
        } else {
            let d = self.beta_final - self.beta_0;
            self.beta_0 + d * (n_updates as f32 / self.n_updates_final as f32)
        }
    }

    /// Records one priority update for scheduling beta through training.
    pub fn add_n_updates(&mut self) {
        self.n_updates += 1;
    }
}
