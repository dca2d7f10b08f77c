//! Configuration of the replay buffer.
use crate::error::ReplayError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`super::PrioritizedReplayBuffer`], fixed at construction.
///
/// # Examples
///
/// ```rust
/// use replay_core::replay_buffer::ReplayBufferConfig;
///
/// let config = ReplayBufferConfig::default()
///     .capacity(10000)
///     .seed(42)
///     .alpha(0.6)
///     .beta(0.4);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ReplayBufferConfig {
    /// Maximum number of transitions retained. When the buffer is full, the
    /// oldest transition is evicted first. Must be positive.
    pub capacity: usize,

    /// Seed of the random number generator used for sampling. Sampling is
    /// reproducible for a fixed seed and call sequence.
    pub seed: u64,

    /// Discount factor applied to predicted future value in TD-error and
    /// target computation. Must be in `[0, 1]`.
    pub discount: f32,

    /// Exponent for prioritization. 0 gives uniform sampling, 1 gives fully
    /// priority-proportional sampling. Must be in `[0, 1]`.
    pub alpha: f32,

    /// Initial exponent of the importance-sampling bias correction. Must be
    /// in `[0, 1]`.
    pub beta: f32,

    /// Final exponent of the importance-sampling bias correction. Equal to
    /// `beta` by default, which keeps the exponent constant. Must be in
    /// `[0, 1]`.
    pub beta_final: f32,

    /// Priority updates after which beta reaches `beta_final`. Must be
    /// positive.
    pub n_updates_final: usize,

    /// Floor added to `|td_error|` so that no priority is ever exactly zero.
    /// Must be positive.
    pub epsilon: f32,
}

impl Default for ReplayBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 10000,
            seed: 42,
            discount: 0.95,
            alpha: 0.6,
            beta: 0.4,
            beta_final: 0.4,
            n_updates_final: 500_000,
            epsilon: 1e-6,
        }
    }
}

impl ReplayBufferConfig {
    /// Sets the capacity of the buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, discount: f32) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the prioritization exponent `alpha`.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the initial importance-sampling exponent `beta`.
    pub fn beta(mut self, beta: f32) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the final importance-sampling exponent.
    pub fn beta_final(mut self, beta_final: f32) -> Self {
        self.beta_final = beta_final;
        self
    }

    /// Sets the number of priority updates over which beta is annealed.
    pub fn n_updates_final(mut self, n_updates_final: usize) -> Self {
        self.n_updates_final = n_updates_final;
        self
    }

    /// Sets the zero-priority floor `epsilon`.
    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that every parameter is in its sane range.
    ///
    /// Fails with [`ReplayError::InvalidConfiguration`] on the first
    /// violation. Run at buffer construction.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(invalid("capacity must be positive"));
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(invalid("discount must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(invalid("alpha must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(invalid("beta must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.beta_final) {
            return Err(invalid("beta_final must be in [0, 1]"));
        }
        if self.n_updates_final == 0 {
            return Err(invalid("n_updates_final must be positive"));
        }
        if !(self.epsilon > 0.0) {
            return Err(invalid("epsilon must be positive"));
        }
        Ok(())
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

fn invalid(msg: &str) -> anyhow::Error {
    ReplayError::InvalidConfiguration(msg.into()).into()
}
