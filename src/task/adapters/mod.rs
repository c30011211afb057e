//! Adapter implementations of task ports.

pub mod file;
pub mod memory;
