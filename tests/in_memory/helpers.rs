//! Shared fixtures for in-memory task store integration tests.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use chrono::NaiveDate;
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskPersistence,
    domain::Task,
    services::{AddTaskRequest, TaskStore},
};

/// Store type used across the in-memory suite.
pub type MemoryStore = TaskStore<InMemoryTaskPersistence, FixedClock>;

/// Date every in-memory test treats as today.
pub fn today() -> NaiveDate {
    date(2026, 10, 19)
}

/// Provides a fresh persistence backend for each test.
#[fixture]
pub fn persistence() -> InMemoryTaskPersistence {
    InMemoryTaskPersistence::new()
}

/// Provides a store over a shared handle to `persistence`.
#[fixture]
pub fn store(persistence: InMemoryTaskPersistence) -> MemoryStore {
    open_store(&persistence)
}

/// Opens a store sharing `persistence`'s snapshot.
pub fn open_store(persistence: &InMemoryTaskPersistence) -> MemoryStore {
    TaskStore::open(
        Arc::new(persistence.clone()),
        Arc::new(FixedClock::on(today())),
    )
    .expect("in-memory store opens")
}

/// Adds one task per request and returns them in insertion order.
///
/// # Errors
///
/// Returns an error if any add fails.
pub fn add_all(
    store: &mut MemoryStore,
    requests: impl IntoIterator<Item = AddTaskRequest>,
) -> Result<Vec<Task>, eyre::Report> {
    requests
        .into_iter()
        .map(|request| store.add(request).map_err(eyre::Report::from))
        .collect()
}

/// Returns the titles of `tasks` in order.
pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}
