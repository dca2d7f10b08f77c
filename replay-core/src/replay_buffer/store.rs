//! Bounded FIFO storage for transitions.
use crate::{error::ReplayError, Transition};
use anyhow::Result;
use std::collections::VecDeque;

/// A bounded FIFO holding transitions in insertion order.
///
/// Insertion order doubles as recency order; when the store is full the
/// oldest transition (position 0) is evicted. Eviction shifts the positions
/// of all remaining transitions down by one.
#[derive(Debug)]
pub struct EpisodeStore {
    transitions: VecDeque<Transition>,
    capacity: usize,
}

impl EpisodeStore {
    /// Creates an empty store. A zero capacity is a configuration error and
    /// is rejected by [`super::ReplayBufferConfig::validate`].
    pub fn new(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a transition at the tail, evicting the head when over capacity.
    ///
    /// Returns the evicted transition, if any, so the caller can mirror the
    /// eviction in the priority index within the same call.
    pub fn append(&mut self, transition: Transition) -> Option<Transition> {
        self.transitions.push_back(transition);
        if self.transitions.len() > self.capacity {
            self.transitions.pop_front()
        } else {
            None
        }
    }

    /// Current number of stored transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if no transition is stored.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of transitions retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the transition at `index`.
    pub fn get(&self, index: usize) -> Result<&Transition> {
        self.transitions.get(index).ok_or_else(|| {
            ReplayError::IndexOutOfRange {
                index,
                size: self.transitions.len(),
            }
            .into()
        })
    }
}
