//! Priority-weighted replay buffer.
mod iw_schedule;
use super::{EpisodeStore, PriorityIndex, ReplayBufferConfig, TdErrorEstimator, TrainingBatch};
use crate::{error::ReplayError, Transition, ValueEstimator};
use anyhow::{ensure, Result};
pub use iw_schedule::IwSchedule;
use log::trace;
use ndarray::Array2;
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    SeedableRng,
};

/// A fixed-capacity, priority-weighted experience buffer.
///
/// Stores observed transitions in FIFO order, ranks them by the magnitude of
/// their TD error and samples training batches proportionally to that
/// ranking, with an importance-sampling weight applied per draw.
///
/// The store and the priority index are only ever mutated together, so their
/// lengths never diverge. All operations are synchronous; callers introducing
/// multiple producers or consumers must wrap the buffer in a single
/// mutual-exclusion boundary.
///
/// # Examples
///
/// ```ignore
/// let config = ReplayBufferConfig::default().capacity(10000).seed(42);
/// let mut buffer = PrioritizedReplayBuffer::build(&config, &model)?;
///
/// let td_err = buffer.td_error(&transition)?;
/// buffer.remember(transition, td_err);
///
/// let batch = buffer.sample(32)?;
/// // ... one training step on (batch.inputs, batch.targets) ...
/// buffer.update_priorities(&batch.indices, &new_td_errors)?;
/// ```
#[derive(Debug)]
pub struct PrioritizedReplayBuffer<M: ValueEstimator> {
    store: EpisodeStore,
    priorities: PriorityIndex,
    estimator: TdErrorEstimator<M>,
    schedule: IwSchedule,
    rng: StdRng,
}

impl<M: ValueEstimator> PrioritizedReplayBuffer<M> {
    /// Builds a buffer from a configuration and a value-prediction capability.
    ///
    /// The model is typically injected by reference; the buffer never mutates
    /// it. Fails with [`ReplayError::InvalidConfiguration`] if any parameter
    /// is outside its sane range.
    pub fn build(config: &ReplayBufferConfig, model: M) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: EpisodeStore::new(config.capacity),
            priorities: PriorityIndex::new(config.capacity, config.alpha, config.epsilon),
            estimator: TdErrorEstimator::new(model, config.discount),
            schedule: IwSchedule::new(config.beta, config.beta_final, config.n_updates_final),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Current number of stored transitions.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no transition is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Maximum number of transitions retained.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the transition stored at `index`.
    pub fn get(&self, index: usize) -> Result<&Transition> {
        self.store.get(index)
    }

    /// TD error of a transition under the current value estimates.
    ///
    /// Exposed so callers can produce the error fed to [`Self::remember`] and
    /// recompute errors for sampled transitions after a training step.
    pub fn td_error(&self, transition: &Transition) -> Result<f32> {
        self.estimator.td_error(transition)
    }

    /// Stores a transition with the priority implied by its TD error.
    ///
    /// When the buffer is at capacity the oldest transition is evicted and
    /// its priority dropped in the same call. Low-priority transitions are
    /// never evicted early; they are retained until they age out.
    pub fn remember(&mut self, transition: Transition, td_error: f32) {
        let evicted = self.store.append(transition);
        self.priorities.insert(td_error, evicted.is_some());
        debug_assert_eq!(self.store.len(), self.priorities.len());
        trace!(
            "stored transition with td_error {}, buffer size {}",
            td_error,
            self.store.len()
        );
    }

    /// Normalized sampling distribution over the stored positions.
    pub fn distribution(&self) -> Result<Vec<f32>> {
        self.priorities.distribution()
    }

    /// Samples a priority-weighted training batch of at most `batch_size`
    /// draws.
    ///
    /// Positions are drawn with replacement, so the effective batch size is
    /// `min(batch_size, len())` and the same transition may appear more than
    /// once. Each draw `i` carries the importance weight
    /// `(len() * P[i])^(-beta)`, normalized by the batch maximum so the
    /// largest weight is exactly 1; the weight scales only the target value
    /// of the action actually taken.
    ///
    /// Fails with [`ReplayError::EmptyBuffer`] when nothing is stored.
    /// Prediction failures propagate unchanged.
    pub fn sample(&mut self, batch_size: usize) -> Result<TrainingBatch> {
        let n = self.store.len();
        if n == 0 {
            return Err(ReplayError::EmptyBuffer.into());
        }
        let m = batch_size.min(n);
        if m == 0 {
            return Ok(TrainingBatch {
                inputs: Array2::zeros((0, 0)),
                targets: Array2::zeros((0, 0)),
                indices: vec![],
                weights: vec![],
            });
        }

        let probs = self.priorities.distribution()?;
        let dist = WeightedIndex::new(&probs)?;
        let indices: Vec<usize> = (0..m).map(|_| dist.sample(&mut self.rng)).collect();

        let beta = self.schedule.beta();
        let mut weights: Vec<f32> = indices
            .iter()
            .map(|&ix| (n as f32 * probs[ix]).powf(-beta))
            .collect();
        let w_max = weights.iter().fold(f32::NEG_INFINITY, |acc, &w| acc.max(w));
        for w in weights.iter_mut() {
            *w /= w_max;
        }

        let state_dim = self.store.get(indices[0])?.state.len();
        let num_actions = self
            .estimator
            .q_values(&self.store.get(indices[0])?.state)?
            .len();
        let mut inputs = Array2::<f32>::zeros((m, state_dim));
        let mut targets = Array2::<f32>::zeros((m, num_actions));

        for (i, &ix) in indices.iter().enumerate() {
            let tr = self.store.get(ix)?;
            ensure!(
                tr.state.len() == state_dim,
                "state length {} differs from batch state_dim {}",
                tr.state.len(),
                state_dim
            );

            // Fresh copy of the predicted action values; the model's own
            // storage is never mutated.
            let mut target = self.estimator.q_values(&tr.state)?;
            ensure!(
                target.len() == num_actions,
                "predicted {} action values, expected {}",
                target.len(),
                num_actions
            );
            ensure!(
                tr.action < target.len(),
                "action {} out of range for {} predicted action values",
                tr.action,
                target.len()
            );

            target[tr.action] = if tr.is_terminated {
                tr.reward
            } else {
                tr.reward + self.estimator.discount() * self.estimator.max_q(&tr.next_state)?
            };
            target[tr.action] *= weights[i];

            for (j, &v) in tr.state.iter().enumerate() {
                inputs[[i, j]] = v;
            }
            for (j, &v) in target.iter().enumerate() {
                targets[[i, j]] = v;
            }
        }

        trace!("sampled batch of {} draws from {} transitions", m, n);

        Ok(TrainingBatch {
            inputs,
            targets,
            indices,
            weights,
        })
    }

    /// Feeds freshly computed TD errors back for previously sampled
    /// positions.
    ///
    /// `indices` must be the positions returned by [`Self::sample`], still
    /// valid at call time; a position evicted since sampling fails with
    /// [`ReplayError::IndexOutOfRange`] without modifying any priority. Also
    /// advances the importance-weight schedule by one step.
    pub fn update_priorities(&mut self, indices: &[usize], td_errors: &[f32]) -> Result<()> {
        self.priorities.update(indices, td_errors)?;
        self.schedule.add_n_updates();
        Ok(())
    }
}
