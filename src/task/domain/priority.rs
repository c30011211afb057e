//! Task priority levels.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered task priority.
///
/// The numeric rank and the label are derived from the same variant, so the
/// two can never disagree once a value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low = 1,
    /// Normal urgency.
    Medium = 2,
    /// Needs attention first.
    High = 3,
}

impl Priority {
    /// All priorities in ascending rank order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the numeric rank (`Low = 1` through `High = 3`).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Looks up a priority by numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownPriority`] for ranks outside `1..=3`.
    pub fn from_rank(rank: u8) -> Result<Self, TaskDomainError> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.rank() == rank)
            .ok_or_else(|| TaskDomainError::UnknownPriority(rank.to_string()))
    }

    /// Rebuilds a priority from a persisted rank/label pair.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownPriority`] when either half is not a
    /// recognised value, or [`TaskDomainError::PriorityMismatch`] when they
    /// name different levels. Labels must match [`Priority::label`] exactly.
    pub fn from_parts(rank: u8, label: &str) -> Result<Self, TaskDomainError> {
        let by_rank = Self::from_rank(rank)?;
        let by_label = Self::ALL
            .into_iter()
            .find(|priority| priority.label() == label)
            .ok_or_else(|| TaskDomainError::UnknownPriority(label.to_owned()))?;
        if by_rank != by_label {
            return Err(TaskDomainError::PriorityMismatch {
                rank,
                label: label.to_owned(),
            });
        }
        Ok(by_rank)
    }
}

impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    /// Accepts labels case-insensitively, or a rank written as a digit.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" | "1" => Ok(Self::Low),
            "medium" | "2" => Ok(Self::Medium),
            "high" | "3" => Ok(Self::High),
            _ => Err(TaskDomainError::UnknownPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.label().to_owned()
    }
}
