//! Statement error model.

use thiserror::Error;

/// Result type used across the statement pipeline.
pub type StatementResult<T> = Result<T, StatementError>;

/// Statement-level error.
///
/// Every variant is fatal for the statement being computed: the caller gets
/// the error and no partial summary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A play references a type with no registered pricing policy.
    #[error("unknown play type: {play_type}")]
    UnknownPlayType { play_type: String },

    /// A performance references a play id absent from the catalog.
    #[error("play not found in catalog: {play_id}")]
    MissingPlay { play_id: String },

    /// An aggregate exceeded the representable range.
    #[error("overflow: {0}")]
    Overflow(String),

    /// A value failed validation (e.g. an empty identifier).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StatementError {
    pub fn unknown_play_type(play_type: impl Into<String>) -> Self {
        Self::UnknownPlayType {
            play_type: play_type.into(),
        }
    }

    pub fn missing_play(play_id: impl Into<String>) -> Self {
        Self::MissingPlay {
            play_id: play_id.into(),
        }
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
