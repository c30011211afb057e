//! Filtering and ordering of task lists.
//!
//! Queries are pure: they read a task collection and return a new, sorted
//! vector without touching the stored order.

use super::{ParseFilterError, Priority, Task};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Completion-state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks that are not completed.
    Open,
    /// Keep completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns whether `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Open => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(ParseFilterError(value.to_owned())),
        }
    }
}

/// Priority filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    /// Keep every priority.
    #[default]
    All,
    /// Keep only tasks with exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether `task` passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority() == priority,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(value: Priority) -> Self {
        Self::Only(value)
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParseFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Priority::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseFilterError(value.to_owned()))
    }
}

/// Conjunction of a status filter and a priority filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskFilter {
    /// Completion-state predicate.
    pub status: StatusFilter,
    /// Priority predicate.
    pub priority: PriorityFilter,
}

impl TaskFilter {
    /// Returns whether `task` satisfies both predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && self.priority.matches(task)
    }
}

/// Display ordering.
///
/// Open tasks always come before completed ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Highest priority first.
    #[default]
    Priority,
    /// Earliest deadline first, tasks without a deadline last, priority
    /// breaking ties.
    Deadline,
}

impl SortMode {
    /// Maps the presentation layer's "sort by deadline" toggle.
    #[must_use]
    pub const fn from_deadline_flag(sort_by_deadline: bool) -> Self {
        if sort_by_deadline {
            Self::Deadline
        } else {
            Self::Priority
        }
    }

    /// Compares two tasks under this ordering.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let by_status = left.is_completed().cmp(&right.is_completed());
        let by_priority = right.priority().cmp(&left.priority());
        match self {
            Self::Priority => by_status.then(by_priority),
            Self::Deadline => by_status
                .then_with(|| deadline_key(left).cmp(&deadline_key(right)))
                .then(by_priority),
        }
    }
}

fn deadline_key(task: &Task) -> NaiveDate {
    task.deadline().unwrap_or(NaiveDate::MAX)
}

/// Filter plus ordering applied to a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskQuery {
    filter: TaskFilter,
    sort: SortMode,
}

impl TaskQuery {
    /// Creates a query that keeps everything in priority order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.filter.status = status;
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<PriorityFilter>) -> Self {
        self.filter.priority = priority.into();
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns the ordering.
    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Filters and sorts `tasks`, returning owned copies.
    ///
    /// The sort is stable, so tasks equal under every key keep their input
    /// order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
        let mut selected: Vec<Task> = tasks
            .into_iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect();
        selected.sort_by(|left, right| self.sort.compare(left, right));
        selected
    }
}
