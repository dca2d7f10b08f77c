//! Prioritized experience replay buffer.
//!
//! This module provides a bounded, priority-weighted replay buffer for
//! training sequential-decision agents. It is built from four cooperating
//! pieces:
//!
//! - [`EpisodeStore`]: a bounded FIFO holding raw transitions
//! - [`PriorityIndex`]: one sampling priority per stored transition, kept in
//!   lock-step with the store
//! - [`TdErrorEstimator`]: temporal-difference errors computed through the
//!   injected [`crate::ValueEstimator`] capability
//! - [`PrioritizedReplayBuffer`]: the buffer facade that samples
//!   priority-weighted [`TrainingBatch`]es with importance-sampling bias
//!   correction
//!
//! Transitions with larger TD errors are sampled more often; the bias this
//! introduces is compensated per draw by an importance weight normalized so
//! that the largest weight in any batch is exactly 1.
mod base;
mod batch;
mod config;
mod priority;
mod store;
mod td_error;
pub use base::{IwSchedule, PrioritizedReplayBuffer};
pub use batch::TrainingBatch;
pub use config::ReplayBufferConfig;
pub use priority::PriorityIndex;
pub use store::EpisodeStore;
pub use td_error::TdErrorEstimator;
