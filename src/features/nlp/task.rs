//! Value types produced by the quick-add parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Calendar, DueDate};

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No priority set.
    #[default]
    None,
    /// Low priority (`!`, `!low`, `#p3`, `#low`)
    Low,
    /// Medium priority (`!!`, `!med`, `#p2`, `#medium`)
    Medium,
    /// High priority (`!!!`, `!high`, `#p1`, `#high`)
    High,
}

impl Priority {
    /// Numeric value (0 = none, 1 = low, 2 = medium, 3 = high).
    #[must_use]
    pub const fn as_value(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Coarse period at which a task recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatFrequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

impl RepeatFrequency {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// The date one period after `date`.
    ///
    /// Month and year steps clamp to the end of the target month, so
    /// Jan 31 monthly is followed by Feb 29 in a leap year.
    #[must_use]
    pub fn next_after(&self, date: NaiveDate, calendar: &Calendar) -> Option<NaiveDate> {
        match self {
            Self::Daily => date.succ_opt(),
            Self::Weekly => date.checked_add_days(chrono::Days::new(7)),
            Self::Monthly => calendar.add_months(date, 1),
            Self::Yearly => calendar.add_months(date, 12),
        }
    }
}

impl std::fmt::Display for RepeatFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        })
    }
}

/// Result of parsing a quick-add string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Input with all recognized tokens removed, whitespace-normalized.
    pub title: String,
    /// Inferred deadline.
    pub due_date: Option<DueDate>,
    /// Inferred urgency.
    pub priority: Priority,
    /// Hashtag labels in order of appearance, case preserved, not deduplicated.
    pub tag_names: Vec<String>,
    /// Inferred recurrence.
    pub repeat_frequency: Option<RepeatFrequency>,
    /// Whether the input asked to defer the task indefinitely.
    pub is_someday: bool,
}

impl ParsedTask {
    /// Check if a due date was found.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.due_date.is_some()
    }

    /// Get the due date as an ISO string.
    #[must_use]
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date.as_ref().map(DueDate::to_iso_date)
    }
}
