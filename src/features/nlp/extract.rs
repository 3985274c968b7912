//! Keyword extractors for priority, recurrence, someday and tags.
//!
//! Every extractor only reads its input; none of them consume text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Priority, RepeatFrequency};

/// `#` followed by one or more word characters.
pub(super) static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").unwrap_or_else(|e| panic!("Invalid tag regex: {e}")));

/// Hashtags reserved for priority shorthand, never reported as tags.
const PRIORITY_TAGS: [&str; 6] = ["#p1", "#p2", "#p3", "#high", "#medium", "#low"];

/// Markers per level, highest level first.
const PRIORITY_MARKERS: [(Priority, [&str; 4]); 3] = [
    (Priority::High, ["!!!", "!high", "#p1", "#high"]),
    (Priority::Medium, ["!!", "!med", "#p2", "#medium"]),
    (Priority::Low, ["!", "!low", "#p3", "#low"]),
];

/// Recurrence keywords per frequency, in precedence order.
pub(super) const RECURRENCE_KEYWORDS: [(RepeatFrequency, &[&str]); 4] = [
    (RepeatFrequency::Daily, &["every day", "daily"]),
    (RepeatFrequency::Weekly, &["every week", "weekly"]),
    (RepeatFrequency::Monthly, &["every month", "monthly"]),
    (RepeatFrequency::Yearly, &["every year", "yearly", "annually"]),
];

/// Phrases that mark a task as deferred indefinitely.
pub(super) const SOMEDAY_KEYWORDS: [&str; 2] = ["maybe later", "someday"];

/// Detect priority from lowercase text.
///
/// Levels are checked from high to low so `!!!` is never read as `!`.
#[must_use]
pub fn extract_priority(lower: &str) -> Priority {
    PRIORITY_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map_or(Priority::None, |(level, _)| *level)
}

/// Detect a recurrence rule from lowercase text by substring containment.
#[must_use]
pub fn extract_recurrence(lower: &str) -> Option<RepeatFrequency> {
    RECURRENCE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(frequency, _)| *frequency)
}

/// Whether lowercase text signals indefinite deferral.
#[must_use]
pub fn extract_someday(lower: &str) -> bool {
    SOMEDAY_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Collect `#tag` names from original-case text.
///
/// Priority shorthand tokens are skipped. Case is preserved and duplicates
/// are kept, in order of appearance.
#[must_use]
pub fn extract_tags(text: &str) -> Vec<String> {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?.as_str().to_lowercase();
            if PRIORITY_TAGS.contains(&full.as_str()) {
                return None;
            }
            caps.get(1).map(|inner| inner.as_str().to_string())
        })
        .collect()
}
