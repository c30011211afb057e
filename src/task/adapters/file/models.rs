//! Serde row models for the JSON task document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version written by this adapter.
pub(super) const DOCUMENT_VERSION: u32 = 1;

/// Top-level JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct TaskDocument {
    /// Schema version.
    pub version: u32,
    /// Task rows in insertion order.
    pub tasks: Vec<TaskRecord>,
}

/// One persisted task row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct TaskRecord {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Numeric priority rank (1 to 3).
    pub priority_level: u8,
    /// Priority label; must agree with `priority_level`.
    pub priority_label: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Deadline as `YYYY-MM-DD`.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Optional assignees.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    /// Optional effort estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    /// Optional size bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Creation timestamp; absent in hand-written files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Latest edit timestamp; absent in hand-written files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
