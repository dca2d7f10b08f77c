#![warn(missing_docs)]
//! Prioritized experience replay for reinforcement learning.
//!
//! This crate provides an in-memory, fixed-capacity replay buffer that stores
//! observed transitions, ranks them by the magnitude of their temporal-difference
//! (TD) error, and samples priority-weighted training batches with
//! importance-sampling bias correction.
//!
//! The buffer never owns the value-prediction model; it borrows it through the
//! single-method [`ValueEstimator`] capability injected at construction.
pub mod error;
pub mod replay_buffer;

mod base;
pub use base::{Transition, ValueEstimator};
