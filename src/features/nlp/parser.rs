//! Quick-add parser.
//!
//! Parses strings like "Team sync every monday #work !!" into structured
//! task data.

use chrono::{NaiveDateTime, Weekday};
use tracing::debug;

use super::{
    clean_title, extract_date, extract_priority, extract_recurrence, extract_someday,
    extract_tags, ParsedTask,
};
use crate::core::{DateDetector, NaturalDateDetector, ParseContext};

/// Stateless parser holding the injected fallback date detector.
///
/// Safe to share across threads whenever `D` is.
#[derive(Debug, Clone)]
pub struct TextParser<D = NaturalDateDetector> {
    detector: D,
    fallback: bool,
}

impl TextParser<NaturalDateDetector> {
    /// Parser using the built-in [`NaturalDateDetector`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_detector(NaturalDateDetector::new())
    }
}

impl Default for TextParser<NaturalDateDetector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DateDetector> TextParser<D> {
    /// Parser using a custom fallback date detector.
    #[must_use]
    pub fn with_detector(detector: D) -> Self {
        Self {
            detector,
            fallback: true,
        }
    }

    /// Enable or disable the fallback detector.
    ///
    /// With fallback off only relative phrases and weekday names produce a
    /// due date.
    #[must_use]
    pub fn fallback_detection(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Parse one line of user text.
    ///
    /// Never fails: text without recognizable tokens yields its own trimmed
    /// content as the title and default fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use quickadd::{ParseContext, Priority, TextParser};
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 1)
    ///     .and_then(|d| d.and_hms_opt(9, 0, 0))
    ///     .unwrap();
    /// let task = TextParser::new().parse("Buy milk tomorrow #errands !!!", &ParseContext::new(now));
    /// assert_eq!(task.title, "Buy milk");
    /// assert_eq!(task.priority, Priority::High);
    /// assert_eq!(task.tag_names, vec!["errands"]);
    /// assert_eq!(task.due_date_iso().as_deref(), Some("2024-03-02"));
    /// ```
    #[must_use]
    pub fn parse(&self, input: &str, ctx: &ParseContext) -> ParsedTask {
        let lower = input.to_lowercase();
        let detector = self.fallback.then_some(&self.detector);

        let mut task = ParsedTask {
            title: String::new(),
            due_date: extract_date(input, ctx, detector),
            priority: extract_priority(&lower),
            tag_names: extract_tags(input),
            repeat_frequency: extract_recurrence(&lower),
            is_someday: extract_someday(&lower),
        };
        task.title = clean_title(input, &task);

        debug!(
            title = %task.title,
            due = ?task.due_date,
            priority = %task.priority,
            tags = task.tag_names.len(),
            repeat = ?task.repeat_frequency,
            someday = task.is_someday,
            "parsed quick-add input"
        );

        task
    }
}

/// Parse `input` against `now` with weeks starting on `week_start`.
///
/// Uses the built-in fallback date detector.
#[must_use]
pub fn parse(input: &str, now: NaiveDateTime, week_start: Weekday) -> ParsedTask {
    TextParser::new().parse(input, &ParseContext::new(now).with_week_start(week_start))
}
