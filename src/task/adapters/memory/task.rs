//! In-memory task persistence holding the last saved snapshot.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};

/// In-memory persistence that keeps the most recently saved collection.
///
/// Clones share the same snapshot, so a test can keep one handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskPersistence {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    save_count: usize,
}

impl InMemoryTaskPersistence {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = InMemoryTaskState {
            tasks: tasks.into_iter().collect(),
            save_count: 0,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns how many times the collection has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPersistenceError::Backend`] when the lock is poisoned.
    pub fn save_count(&self) -> TaskPersistenceResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskPersistenceError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.save_count)
    }
}

impl TaskPersistence for InMemoryTaskPersistence {
    fn load(&self) -> TaskPersistenceResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskPersistenceError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskPersistenceError::backend(std::io::Error::other(err.to_string()))
        })?;
        state.tasks = tasks.to_vec();
        state.save_count += 1;
        Ok(())
    }
}
