//! Sampling priorities kept in lock-step with the episode store.
use crate::error::ReplayError;
use anyhow::{ensure, Result};
use std::collections::VecDeque;

/// One sampling priority per stored transition.
///
/// A TD error `e` maps to the priority `(|e| + epsilon)^alpha`. With
/// `epsilon > 0` every priority is strictly positive, so the normalization in
/// [`Self::distribution`] never divides by zero while the buffer is
/// non-empty.
#[derive(Debug)]
pub struct PriorityIndex {
    priorities: VecDeque<f32>,
    alpha: f32,
    epsilon: f32,
}

impl PriorityIndex {
    /// Creates an empty index.
    pub fn new(capacity: usize, alpha: f32, epsilon: f32) -> Self {
        Self {
            priorities: VecDeque::with_capacity(capacity),
            alpha,
            epsilon,
        }
    }

    /// Priority assigned to a TD error.
    pub fn priority(&self, td_error: f32) -> f32 {
        (td_error.abs() + self.epsilon).powf(self.alpha)
    }

    /// Appends the priority for a new transition.
    ///
    /// `evict_head` must be true exactly when the paired store evicted its
    /// head in the same call, so that store and index never diverge in
    /// length.
    pub fn insert(&mut self, td_error: f32, evict_head: bool) {
        if evict_head {
            self.priorities.pop_front();
        }
        let p = self.priority(td_error);
        self.priorities.push_back(p);
    }

    /// Current number of priorities.
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Returns true if no priority is stored.
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Returns the priority stored at `index`.
    pub fn get(&self, index: usize) -> Result<f32> {
        self.priorities.get(index).copied().ok_or_else(|| {
            ReplayError::IndexOutOfRange {
                index,
                size: self.priorities.len(),
            }
            .into()
        })
    }

    /// Normalized sampling distribution over the current positions.
    ///
    /// Fails with [`ReplayError::EmptyBuffer`] when nothing is stored.
    pub fn distribution(&self) -> Result<Vec<f32>> {
        if self.priorities.is_empty() {
            return Err(ReplayError::EmptyBuffer.into());
        }
        let total: f32 = self.priorities.iter().sum();
        Ok(self.priorities.iter().map(|p| p / total).collect())
    }

    /// Recomputes the priorities at `indices` from fresh TD errors.
    ///
    /// All indices are validated before any priority is overwritten; an index
    /// referring to a position evicted since sampling fails with
    /// [`ReplayError::IndexOutOfRange`] and leaves the index unchanged.
    pub fn update(&mut self, indices: &[usize], td_errors: &[f32]) -> Result<()> {
        ensure!(
            indices.len() == td_errors.len(),
            "got {} indices but {} TD errors",
            indices.len(),
            td_errors.len()
        );
        let size = self.priorities.len();
        for &ix in indices.iter() {
            if ix >= size {
                return Err(ReplayError::IndexOutOfRange { index: ix, size }.into());
            }
        }
        for (&ix, &e) in indices.iter().zip(td_errors.iter()) {
            self.priorities[ix] = self.priority(e);
        }
        Ok(())
    }
}
