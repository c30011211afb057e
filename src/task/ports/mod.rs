//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod persistence;

pub use persistence::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult};

#[cfg(test)]
pub use persistence::MockTaskPersistence;
