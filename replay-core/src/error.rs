//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Sampling or computing a distribution over an empty buffer.
    #[error("replay buffer is empty")]
    EmptyBuffer,

    /// Positional access beyond the current buffer size.
    #[error("index {index} out of range for buffer of size {size}")]
    IndexOutOfRange {
        /// The offending position.
        index: usize,
        /// Buffer size at the time of access.
        size: usize,
    },

    /// Invalid construction parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
