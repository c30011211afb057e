//! Application services for task tracking.

mod requests;
mod store;

pub use requests::{AddTaskRequest, UpdateTaskRequest};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
