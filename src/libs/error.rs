//! Typed errors for the interval core and its storage engines.
//!
//! Lifecycle violations (pausing an idle interval, restarting a finished one)
//! are reported through [`PomoError`] rather than panics so the command layer
//! can turn them into user feedback. Storage failures are wrapped unchanged.

use thiserror::Error;

/// Errors produced by the interval state machine and the repositories.
#[derive(Error, Debug)]
pub enum PomoError {
    /// The repository holds no intervals yet.
    #[error("No intervals")]
    NoIntervals,

    /// `pause` was called on an interval that is not running.
    #[error("Interval not running")]
    IntervalNotRunning,

    /// `start` was called on a canceled or finished interval.
    #[error("Interval is completed or canceled")]
    IntervalCompleted,

    /// A stored state value does not map to any known state.
    #[error("Invalid state: {0}")]
    InvalidState(i64),

    /// A stored category name does not map to any known category.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Zero or otherwise unusable identifier passed to a repository.
    #[error("Invalid ID: {0}")]
    InvalidId(i64),

    /// No record with the given identifier exists.
    #[error("Interval {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result alias used across the interval core.
pub type Result<T> = std::result::Result<T, PomoError>;
