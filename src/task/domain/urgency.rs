//! Deadline urgency classification.
//!
//! Urgency is derived from a deadline and the current date on every read
//! and is never stored.

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of days ahead, exclusive, that count as "due soon".
pub const DUE_SOON_WINDOW_DAYS: u64 = 3;

/// Date format used in deadline badges.
const BADGE_DATE_FORMAT: &str = "%d.%m.%Y";

/// How pressing a deadline is relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The deadline has passed.
    Overdue,
    /// The deadline is today.
    DueToday,
    /// The deadline is after today and before today +
    /// [`DUE_SOON_WINDOW_DAYS`].
    DueSoon,
    /// The deadline is further out.
    Normal,
}

impl Urgency {
    /// Classifies `deadline` relative to `today`.
    #[must_use]
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        if deadline < today {
            return Self::Overdue;
        }
        if deadline == today {
            return Self::DueToday;
        }
        // Past the end of the calendar nothing can be "normal".
        let soon = today
            .checked_add_days(Days::new(DUE_SOON_WINDOW_DAYS))
            .is_none_or(|limit| deadline < limit);
        if soon { Self::DueSoon } else { Self::Normal }
    }

    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueToday => "Due today",
            Self::DueSoon => "Due soon",
            Self::Normal => "Normal",
        }
    }

    /// Returns the icon shown next to the deadline.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Overdue => "🚨",
            Self::DueToday => "⚠️",
            Self::DueSoon => "⏳",
            Self::Normal => "🗓️",
        }
    }

    /// Returns the calendar colour for an open task with this urgency.
    #[must_use]
    pub const fn color(self) -> EventColor {
        match self {
            Self::Overdue => EventColor::Red,
            Self::DueToday => EventColor::Amber,
            Self::DueSoon => EventColor::Yellow,
            Self::Normal => EventColor::Blue,
        }
    }

    const fn badge_suffix(self) -> Option<&'static str> {
        match self {
            Self::Overdue => Some("Overdue!"),
            Self::DueToday => Some("Today!"),
            Self::DueSoon => Some("Soon!"),
            Self::Normal => None,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Colour classification consumed by calendar widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventColor {
    /// Overdue.
    Red,
    /// Due today.
    Amber,
    /// Due soon.
    Yellow,
    /// Open with a distant deadline.
    Blue,
    /// Completed, regardless of date.
    Green,
}

impl EventColor {
    /// Returns the CSS hex colour.
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Red => "#E74C3C",
            Self::Amber => "#F39C12",
            Self::Yellow => "#F1C40F",
            Self::Blue => "#3498DB",
            Self::Green => "#2ECC71",
        }
    }
}

impl Serialize for EventColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_hex())
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/// Display text describing a task deadline.
///
/// Renders as `"No deadline"` when the task has none, otherwise as
/// `"<icon> Deadline: dd.mm.yyyy"` with an urgency suffix when the deadline
/// is overdue, today, or soon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineBadge {
    deadline: Option<NaiveDate>,
    urgency: Option<Urgency>,
}

impl DeadlineBadge {
    /// Text shown for tasks without a deadline.
    pub const NO_DEADLINE: &'static str = "No deadline";

    /// Builds the badge for `deadline` as seen on `today`.
    #[must_use]
    pub fn new(deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            deadline,
            urgency: deadline.map(|date| Urgency::classify(date, today)),
        }
    }

    /// Returns the classified urgency, if the task has a deadline.
    #[must_use]
    pub const fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }
}

impl fmt::Display for DeadlineBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(deadline), Some(urgency)) = (self.deadline, self.urgency) else {
            return f.write_str(Self::NO_DEADLINE);
        };
        write!(
            f,
            "{} Deadline: {}",
            urgency.icon(),
            deadline.format(BADGE_DATE_FORMAT)
        )?;
        if let Some(suffix) = urgency.badge_suffix() {
            write!(f, " ({suffix})")?;
        }
        Ok(())
    }
}
