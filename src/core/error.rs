//! Engine error type.
//!
//! Every error is local and recoverable: a rejected call leaves the throw
//! history exactly as it was.

/// Errors returned by the score engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The pin count is larger than the pins available for this delivery.
    #[error("throw of {pins} pins is out of range (at most {max} allowed)")]
    OutOfRangeThrow { pins: u8, max: u8 },

    /// The call is not allowed in the current game state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A saved game record could not be encoded or decoded.
    #[error("malformed game record: {0}")]
    Record(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoreError>;

impl From<bincode::Error> for ScoreError {
    fn from(err: bincode::Error) -> Self {
        ScoreError::Record(err.to_string())
    }
}
