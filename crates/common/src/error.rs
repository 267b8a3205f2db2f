//! Central error types for trace generation and playback (thiserror-based).

use thiserror::Error;

/// Errors raised while turning user input into a step trace.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("No numbers to visualize: input is empty or contains no valid values")]
    EmptyInput,

    #[error("Linear search requires a target value")]
    MissingTarget,

    #[error("Invalid target value: {0:?}")]
    InvalidTarget(String),

    #[error("Non-finite value {value} at {}", describe_position(.index))]
    NonFiniteValue { index: Option<usize>, value: f64 },

    #[error("Malformed trace: {reason}")]
    InvalidTrace { reason: String },
}

fn describe_position(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("index {index}"),
        None => "target".to_string(),
    }
}

/// Playback controller errors.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Cannot load an empty trace")]
    InvalidTrace,

    #[error("Failed to start auto-advance timer: {0}")]
    TimerSpawn(#[from] std::io::Error),
}

/// Convenience Result type for trace operations.
pub type TraceResult<T> = Result<T, TraceError>;
