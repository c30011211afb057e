//! Taskdeck: personal task tracking core.
//!
//! This crate holds a session's tasks and everything derived from them:
//! filtered and sorted lists, deadline urgency, and the calendar projection.
//! Presentation and storage are collaborators around it.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model, queries, and urgency rules
//! - **Ports**: The persistence contract the store depends on
//! - **Adapters**: In-memory and JSON-file persistence
//!
//! # Modules
//!
//! - [`task`]: Task model, store, and persistence
//! - [`config`]: File-backed store settings

pub mod config;
mod fs_utils;
pub mod task;
