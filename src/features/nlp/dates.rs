//! Due date extraction.
//!
//! Resolution order, first match wins:
//! 1. relative phrases (`today`, `day after tomorrow`, `tomorrow`,
//!    `next week`, `next month`, `this weekend`)
//! 2. a weekday name, always resolved to a date after today
//! 3. the injected [`DateDetector`] over the literal text

use chrono::{Days, NaiveDate, Weekday};
use tracing::debug;

use crate::core::{DateDetector, DueDate, ParseContext};

/// Relative phrases in match order. Longer phrases precede phrases they
/// contain.
const RELATIVE_PHRASES: [&str; 6] = [
    "today",
    "day after tomorrow",
    "tomorrow",
    "next week",
    "next month",
    "this weekend",
];

/// Weekday names, Sunday first.
pub(super) const WEEKDAYS: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

/// Keywords stripped from the title whenever any due date was found.
pub(super) const DATE_KEYWORDS: [&str; 13] = [
    "day after tomorrow",
    "this weekend",
    "next week",
    "next month",
    "today",
    "tomorrow",
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Extract a due date from original-case text.
///
/// `detector` is consulted only when no phrase or weekday matched. A
/// detector failure is logged and treated as no date.
#[must_use]
pub fn extract_date<D: DateDetector>(
    text: &str,
    ctx: &ParseContext,
    detector: Option<&D>,
) -> Option<DueDate> {
    let lower = text.to_lowercase();

    if let Some(phrase) = RELATIVE_PHRASES.iter().find(|p| lower.contains(*p)) {
        debug!(phrase, "matched relative date phrase");
        return resolve_phrase(phrase, ctx);
    }

    if let Some((name, weekday)) = WEEKDAYS.iter().find(|(name, _)| lower.contains(name)) {
        debug!(weekday = name, "matched weekday name");
        return resolve_weekday(*weekday, ctx);
    }

    match detector?.detect(text, ctx) {
        Ok(found) => found,
        Err(e) => {
            debug!(error = %e, "date detector failed; treating as no date");
            None
        },
    }
}

/// Phrases that would land past the last representable date resolve to no
/// date.
fn resolve_phrase(phrase: &str, ctx: &ParseContext) -> Option<DueDate> {
    let today = ctx.today();
    let date = match phrase {
        "today" => today,
        "tomorrow" => today.checked_add_days(Days::new(1))?,
        "day after tomorrow" => today.checked_add_days(Days::new(2))?,
        "next week" => today.checked_add_days(Days::new(7))?,
        "next month" => ctx.calendar.add_months(today, 1)?,
        "this weekend" => next_strictly_after(today, Weekday::Sat, ctx)?,
        _ => return None,
    };
    Some(DueDate::date_only(date))
}

/// Next occurrence of `weekday` strictly after today; today's own weekday
/// resolves to next week.
fn resolve_weekday(weekday: Weekday, ctx: &ParseContext) -> Option<DueDate> {
    next_strictly_after(ctx.today(), weekday, ctx).map(DueDate::date_only)
}

fn next_strictly_after(
    today: NaiveDate,
    weekday: Weekday,
    ctx: &ParseContext,
) -> Option<NaiveDate> {
    let days = match ctx.calendar.days_until(today, weekday) {
        0 => 7,
        n => n.unsigned_abs(),
    };
    today.checked_add_days(Days::new(days))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::core::{DetectError, MockDateDetector, NaturalDateDetector};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Friday 2024-03-01, 15:45.
    fn ctx() -> ParseContext {
        ParseContext::new(date(2024, 3, 1).and_hms_opt(15, 45, 0).unwrap())
    }

    fn ctx_on(d: NaiveDate) -> ParseContext {
        ParseContext::new(d.and_hms_opt(8, 0, 0).unwrap())
    }

    fn extract(text: &str) -> Option<NaiveDate> {
        extract_date(text, &ctx(), Some(&NaturalDateDetector::new())).map(|d| d.date)
    }

    #[test]
    fn test_today_is_start_of_day() {
        let due = extract_date(
            "call doctor today",
            &ctx(),
            Some(&NaturalDateDetector::new()),
        );
        assert_eq!(due, Some(DueDate::date_only(date(2024, 3, 1))));
    }

    #[test]
    fn test_tomorrow() {
        assert_eq!(extract("Call mom tomorrow"), Some(date(2024, 3, 2)));
    }

    #[test]
    fn test_day_after_tomorrow() {
        assert_eq!(extract("dentist day after tomorrow"), Some(date(2024, 3, 3)));
    }

    #[test]
    fn test_next_week_and_month() {
        assert_eq!(extract("plan next week"), Some(date(2024, 3, 8)));
        assert_eq!(extract("budget next month"), Some(date(2024, 4, 1)));
        let jan31 = ctx_on(date(2024, 1, 31));
        assert_eq!(
            extract_date::<NaturalDateDetector>("next month", &jan31, None),
            Some(DueDate::date_only(date(2024, 2, 29)))
        );
    }

    #[test]
    fn test_this_weekend() {
        // Friday -> Saturday
        assert_eq!(extract("hike this weekend"), Some(date(2024, 3, 2)));
        // Saturday -> next Saturday
        let sat = ctx_on(date(2024, 3, 2));
        assert_eq!(
            extract_date::<NaturalDateDetector>("this weekend", &sat, None).map(|d| d.date),
            Some(date(2024, 3, 9))
        );
        // Sunday -> six days ahead
        let sun = ctx_on(date(2024, 3, 3));
        assert_eq!(
            extract_date::<NaturalDateDetector>("this weekend", &sun, None).map(|d| d.date),
            Some(date(2024, 3, 9))
        );
    }

    #[test]
    fn test_phrase_order() {
        // "today" outranks "tomorrow" regardless of position
        assert_eq!(extract("tomorrow or today"), Some(date(2024, 3, 1)));
        // a phrase outranks a weekday
        assert_eq!(extract("monday or next week"), Some(date(2024, 3, 8)));
    }

    #[test]
    fn test_weekday_resolves_forward() {
        assert_eq!(extract("meeting monday"), Some(date(2024, 3, 4)));
        assert_eq!(extract("Saturday brunch"), Some(date(2024, 3, 2)));
        assert_eq!(extract("pay thursday"), Some(date(2024, 3, 7)));
    }

    #[test]
    fn test_weekday_same_day_is_next_week() {
        assert_eq!(extract("review friday"), Some(date(2024, 3, 8)));
    }

    #[test]
    fn test_weekday_independent_of_week_start() {
        for start in [Weekday::Sun, Weekday::Mon, Weekday::Wed] {
            let c = ctx().with_week_start(start);
            let due = extract_date::<NaturalDateDetector>("sunday", &c, None);
            assert_eq!(due.map(|d| d.date), Some(date(2024, 3, 3)));
        }
    }

    #[test]
    fn test_weekday_list_order() {
        // Names are checked Sunday first, not by position in the text
        assert_eq!(extract("friday then sunday"), Some(date(2024, 3, 3)));
    }

    #[test]
    fn test_fallback_detector() {
        let due = extract_date("launch 2024-12-25 5pm", &ctx(), Some(&NaturalDateDetector::new()));
        assert_eq!(
            due,
            Some(DueDate::with_time(
                date(2024, 12, 25),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract("buy milk"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_detector_not_consulted_after_keyword() {
        let mut mock = MockDateDetector::new();
        mock.expect_detect().never();
        assert!(extract_date("tomorrow", &ctx(), Some(&mock)).is_some());
        assert!(extract_date("monday", &ctx(), Some(&mock)).is_some());
    }

    #[test]
    fn test_detector_error_is_swallowed() {
        let mut mock = MockDateDetector::new();
        mock.expect_detect()
            .times(1)
            .returning(|_, _| Err(DetectError("bad locale data".to_string())));
        assert_eq!(extract_date("Jan 15", &ctx(), Some(&mock)), None);
    }

    #[test]
    fn test_detector_receives_unmodified_text() {
        let mut mock = MockDateDetector::new();
        mock.expect_detect()
            .withf(|text, _| text == "Launch Jan 15")
            .times(1)
            .returning(|_, _| Ok(Some(DueDate::date_only(date(2025, 1, 15)))));
        assert_eq!(
            extract_date("Launch Jan 15", &ctx(), Some(&mock)),
            Some(DueDate::date_only(date(2025, 1, 15)))
        );
    }

    #[test]
    fn test_fallback_disabled() {
        assert_eq!(extract_date::<NaturalDateDetector>("Jan 15", &ctx(), None), None);
    }

    #[test]
    fn test_dates_past_calendar_end_are_absent() {
        let end = ctx_on(NaiveDate::MAX);
        let phrases = [
            "tomorrow",
            "day after tomorrow",
            "next week",
            "next month",
            "this weekend",
            "monday",
        ];
        for text in phrases {
            assert_eq!(extract_date::<NaturalDateDetector>(text, &end, None), None, "{text}");
        }
        assert_eq!(
            extract_date::<NaturalDateDetector>("today", &end, None),
            Some(DueDate::date_only(NaiveDate::MAX))
        );
    }
}
