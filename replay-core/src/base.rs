//! Core abstractions: the transition data model and the value-prediction capability.
mod estimator;
mod transition;
pub use estimator::ValueEstimator;
pub use transition::Transition;
