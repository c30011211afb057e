//! Task aggregate root and related value types.

use super::{CalendarEvent, DeadlineBadge, EventColor, Priority, TaskId, TaskTitle, Urgency};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Auxiliary attributes carried over from table-style task exports.
///
/// None of these take part in filtering, sorting, or urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// People responsible for the task.
    pub assignees: Vec<String>,
    /// Free-form effort estimate, e.g. `"2h"`.
    pub estimate: Option<String>,
    /// Free-form size bucket, e.g. `"M"`.
    pub size: Option<String>,
}

impl TaskDetails {
    /// Returns `true` when no auxiliary attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignees.is_empty() && self.estimate.is_none() && self.size.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    priority: Priority,
    completed: bool,
    deadline: Option<NaiveDate>,
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted auxiliary attributes.
    pub details: TaskDetails,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest edit timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated set of edits applied to a task in one step.
///
/// Every field is optional; `None` leaves the current value untouched.
/// `deadline: Some(None)` clears the deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement deadline.
    pub deadline: Option<Option<NaiveDate>>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement auxiliary attributes.
    pub details: Option<TaskDetails>,
}

impl TaskChanges {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
            && self.completed.is_none()
            && self.details.is_none()
    }
}

impl Task {
    /// Creates a new open task with a fresh identifier.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        priority: Priority,
        deadline: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            priority,
            completed: false,
            deadline,
            details: TaskDetails::default(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Attaches auxiliary attributes to a freshly built task.
    #[must_use]
    pub fn with_details(mut self, details: TaskDetails) -> Self {
        self.details = details;
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            priority: data.priority,
            completed: data.completed,
            deadline: data.deadline,
            details: data.details,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the auxiliary attributes.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a validated change set.
    ///
    /// The identifier is never touched. An empty change set leaves the task,
    /// including `updated_at`, unchanged.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        if changes.is_empty() {
            return;
        }
        let TaskChanges {
            title,
            priority,
            deadline,
            completed,
            details,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        if let Some(new_deadline) = deadline {
            self.deadline = new_deadline;
        }
        if let Some(new_completed) = completed {
            self.completed = new_completed;
        }
        if let Some(new_details) = details {
            self.details = new_details;
        }
        self.touch(clock);
    }

    /// Marks the task as completed or reopens it.
    pub fn set_completed(&mut self, completed: bool, clock: &impl Clock) {
        self.apply(
            TaskChanges {
                completed: Some(completed),
                ..TaskChanges::default()
            },
            clock,
        );
    }

    /// Classifies the deadline relative to `today`.
    ///
    /// Returns `None` for tasks without a deadline.
    #[must_use]
    pub fn urgency(&self, today: NaiveDate) -> Option<Urgency> {
        self.deadline
            .map(|deadline| Urgency::classify(deadline, today))
    }

    /// Returns the calendar colour for this task, if it has a deadline.
    ///
    /// Completed tasks are always [`EventColor::Green`].
    #[must_use]
    pub fn calendar_color(&self, today: NaiveDate) -> Option<EventColor> {
        let urgency = self.urgency(today)?;
        if self.completed {
            return Some(EventColor::Green);
        }
        Some(urgency.color())
    }

    /// Returns the display badge describing the deadline.
    #[must_use]
    pub fn deadline_badge(&self, today: NaiveDate) -> DeadlineBadge {
        DeadlineBadge::new(self.deadline, today)
    }

    /// Projects this task onto an all-day calendar event.
    ///
    /// Returns `None` for tasks without a deadline.
    #[must_use]
    pub fn to_calendar_event(&self, today: NaiveDate) -> Option<CalendarEvent> {
        CalendarEvent::from_task(self, today)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
