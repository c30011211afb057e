//! In-memory persistence for sessions and tests.

mod task;

pub use task::InMemoryTaskPersistence;
