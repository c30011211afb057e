//! Calendar projection of task deadlines.

use super::{EventColor, Task, TaskId};
use chrono::NaiveDate;
use serde::Serialize;

/// All-day calendar entry derived from a task deadline.
///
/// Serialises with the field names calendar widgets expect (`start`, `end`,
/// `color`, `allDay`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Source task identifier.
    pub task_id: TaskId,
    /// Event title, copied from the task title.
    pub title: String,
    /// First day of the event (the deadline).
    pub start: NaiveDate,
    /// Last day of the event (the deadline).
    pub end: NaiveDate,
    /// Colour classification.
    pub color: EventColor,
    /// Always `true`; deadlines carry no time of day.
    pub all_day: bool,
}

impl CalendarEvent {
    /// Builds the event for `task`, or `None` when it has no deadline.
    #[must_use]
    pub fn from_task(task: &Task, today: NaiveDate) -> Option<Self> {
        let deadline = task.deadline()?;
        let color = task.calendar_color(today)?;
        Some(Self {
            task_id: task.id(),
            title: task.title().as_str().to_owned(),
            start: deadline,
            end: deadline,
            color,
            all_day: true,
        })
    }
}

/// Projects tasks onto calendar events, skipping tasks without deadlines.
///
/// Input order is preserved.
#[must_use]
pub fn calendar_events<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    today: NaiveDate,
) -> Vec<CalendarEvent> {
    tasks
        .into_iter()
        .filter_map(|task| CalendarEvent::from_task(task, today))
        .collect()
}
