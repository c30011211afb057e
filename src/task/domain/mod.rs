//! Domain model for personal task tracking.
//!
//! The task domain covers the task record itself and everything derived from
//! it: list filtering and ordering, deadline urgency, and the calendar
//! projection. All infrastructure concerns stay outside this boundary.

mod calendar;
mod error;
mod ids;
mod priority;
mod query;
mod task;
mod urgency;

pub use calendar::{CalendarEvent, calendar_events};
pub use error::{ParseFilterError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use priority::Priority;
pub use query::{PriorityFilter, SortMode, StatusFilter, TaskFilter, TaskQuery};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskDetails};
pub use urgency::{DUE_SOON_WINDOW_DAYS, DeadlineBadge, EventColor, Urgency};

/// Returns the calendar date the clock considers "today".
#[must_use]
pub fn today(clock: &impl mockable::Clock) -> chrono::NaiveDate {
    clock.local().date_naive()
}
