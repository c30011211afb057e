//! JSON file persistence for task collections.

mod models;
mod persistence;

pub use persistence::JsonFileTaskPersistence;
