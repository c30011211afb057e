//! Persistence port for loading and saving the task collection.

use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task persistence operations.
pub type TaskPersistenceResult<T> = Result<T, TaskPersistenceError>;

/// Whole-collection persistence contract.
///
/// The store loads once when opened and saves the full collection after
/// every mutation. Implementations must preserve task order.
#[cfg_attr(test, mockall::automock)]
pub trait TaskPersistence {
    /// Loads every persisted task in stored order.
    ///
    /// A backing store that does not exist yet yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Corrupt`] when stored data cannot be
    /// interpreted, or [`TaskPersistenceError::Backend`] when it cannot be
    /// read.
    fn load(&self) -> TaskPersistenceResult<Vec<Task>>;

    /// Replaces the persisted collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Backend`] when the write fails.
    fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()>;
}

/// Errors returned by task persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskPersistenceError {
    /// Stored data exists but is malformed or violates a task invariant.
    #[error("corrupt task data: {0}")]
    Corrupt(String),

    /// The backing store could not be read or written.
    #[error("persistence error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskPersistenceError {
    /// Wraps a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Reports corrupt stored data.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }
}
