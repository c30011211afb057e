//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is not one of the recognised levels.
    #[error("unknown priority '{0}', expected low, medium, or high")]
    UnknownPriority(String),

    /// A persisted priority rank and label do not describe the same level.
    #[error("priority rank {rank} does not match label '{label}'")]
    PriorityMismatch {
        /// Persisted numeric rank.
        rank: u8,
        /// Persisted label.
        label: String,
    },
}

/// Error returned while parsing list filter values from presentation input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter value: {0}")]
pub struct ParseFilterError(pub String);
