//! Request payloads accepted by the task store.
//!
//! Requests carry raw presentation-layer input. Nothing is validated until the
//! store converts a request into domain values, so a rejected request never
//! has a partial effect.

use crate::task::domain::{Priority, TaskChanges, TaskDetails, TaskDomainError, TaskTitle};
use chrono::NaiveDate;

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    priority: String,
    deadline: Option<NaiveDate>,
    details: TaskDetails,
}

/// Validated fields of an [`AddTaskRequest`].
pub(super) struct NewTaskFields {
    pub title: TaskTitle,
    pub priority: Priority,
    pub deadline: Option<NaiveDate>,
    pub details: TaskDetails,
}

impl AddTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// `priority` accepts a label (`"High"`, case-insensitive), a rank digit
    /// (`"3"`), or a [`Priority`] value.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
            deadline: None,
            details: TaskDetails::default(),
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets or clears the deadline.
    #[must_use]
    pub fn with_optional_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets assignees.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = String>) -> Self {
        self.details.assignees = assignees.into_iter().collect();
        self
    }

    /// Sets the effort estimate.
    #[must_use]
    pub fn with_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.details.estimate = Some(estimate.into());
        self
    }

    /// Sets the size bucket.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.details.size = Some(size.into());
        self
    }

    pub(super) fn validate(self) -> Result<NewTaskFields, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let priority = Priority::try_from(self.priority.as_str())?;
        Ok(NewTaskFields {
            title,
            priority,
            deadline: self.deadline,
            details: self.details,
        })
    }
}

/// Request payload for a partial task edit.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    priority: Option<String>,
    deadline: Option<Option<NaiveDate>>,
    completed: Option<bool>,
    details: Option<TaskDetails>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the deadline; `None` clears it.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Replaces the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replaces the auxiliary attributes.
    #[must_use]
    pub fn with_details(mut self, details: TaskDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub(super) fn validate(self) -> Result<TaskChanges, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(Priority::try_from)
            .transpose()?;
        Ok(TaskChanges {
            title,
            priority,
            deadline: self.deadline,
            completed: self.completed,
            details: self.details,
        })
    }
}
