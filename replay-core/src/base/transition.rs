//! The transition data model.

/// One observed step of the environment.
///
/// A transition records the state in which an action was taken, the action
/// itself, the reward received, the resulting state and whether the episode
/// ended on this step. Transitions are immutable once stored in the buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Observed state vector.
    pub state: Vec<f32>,

    /// Index of the action taken in the discrete action set.
    pub action: usize,

    /// Reward received for the step.
    pub reward: f32,

    /// State vector observed after taking the action. Same length as `state`.
    pub next_state: Vec<f32>,

    /// True if the episode ended on this step.
    pub is_terminated: bool,
}

impl Transition {
    /// Creates a transition.
    pub fn new(
        state: Vec<f32>,
        action: usize,
        reward: f32,
        next_state: Vec<f32>,
        is_terminated: bool,
    ) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
            is_terminated,
        }
    }
}
