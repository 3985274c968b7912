//! Due dates and fallback date/time detection.
//!
//! [`NaturalDateDetector`] recognizes absolute forms that the keyword
//! extractor doesn't cover, such as `jan 15`, `march 3rd`, `2024-12-15`,
//! `12/15` and `5pm`.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{DateDetector, DetectError, ParseContext};

/// An inferred deadline: a calendar date, plus a time of day only when one
/// was explicitly written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    /// The calendar date.
    pub date: NaiveDate,
    /// Optional time of day.
    pub time: Option<NaiveTime>,
}

impl DueDate {
    /// Create a result with just a date.
    #[must_use]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Create a result with date and time.
    #[must_use]
    pub const fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// Convert to ISO 8601 date string.
    #[must_use]
    pub fn to_iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Convert to a datetime, using the time if available or midnight otherwise.
    #[must_use]
    pub fn to_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Whether the date lies strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Whether the date is `today`.
    #[must_use]
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    /// Whether the date is the day after `today`.
    #[must_use]
    pub fn is_due_tomorrow(&self, today: NaiveDate) -> bool {
        today.checked_add_days(Days::new(1)) == Some(self.date)
    }

    /// Whether the date falls between `today` and `today + days`, inclusive.
    #[must_use]
    pub fn is_due_within(&self, today: NaiveDate, days: u64) -> bool {
        let within_end = match today.checked_add_days(Days::new(days)) {
            Some(end) => self.date <= end,
            None => true,
        };
        self.date >= today && within_end
    }
}

/// Word-window scanner for absolute dates and times.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalDateDetector;

impl NaturalDateDetector {
    /// Create a detector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Find the first date or time expression in `text`.
    ///
    /// Windows of four down to one word are tried at each position from left
    /// to right; the first window that resolves wins.
    #[must_use]
    pub fn find(&self, text: &str, ctx: &ParseContext) -> Option<DueDate> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(normalize_word)
            .filter(|w| !w.is_empty())
            .collect();

        for start in 0..words.len() {
            for len in (1..=4).rev() {
                let Some(window) = words.get(start..start + len) else {
                    continue;
                };
                if let Some(found) = parse_window(window, ctx) {
                    trace!(window = %window.join(" "), "fallback detector matched");
                    return Some(found);
                }
            }
        }

        None
    }
}

impl DateDetector for NaturalDateDetector {
    fn detect(&self, text: &str, ctx: &ParseContext) -> Result<Option<DueDate>, DetectError> {
        Ok(self.find(text, ctx))
    }
}

/// Lowercase a word and strip surrounding punctuation.
fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | '(' | ')' | '!' | '?' | '"' | '\''))
        .to_lowercase()
}

/// Resolve one window: an optional date followed by an optional time.
fn parse_window(words: &[String], ctx: &ParseContext) -> Option<DueDate> {
    let (last, rest) = words.split_last()?;

    if let Some(time) = parse_time(last) {
        // "jan 15 at 5pm"
        let rest = match rest.split_last() {
            Some((word, head)) if word == "at" || word == "@" => head,
            _ => rest,
        };
        if rest.is_empty() {
            return resolve_time_only(time, ctx);
        }
        let date = parse_absolute_date(rest, ctx.today())?;
        return Some(DueDate::with_time(date, time));
    }

    parse_absolute_date(words, ctx.today()).map(DueDate::date_only)
}

/// A bare time means today if still ahead of `now`, tomorrow otherwise.
fn resolve_time_only(time: NaiveTime, ctx: &ParseContext) -> Option<DueDate> {
    let today = ctx.today();
    if time > ctx.now.time() {
        Some(DueDate::with_time(today, time))
    } else {
        let tomorrow = today.checked_add_days(Days::new(1))?;
        Some(DueDate::with_time(tomorrow, time))
    }
}

fn parse_absolute_date(words: &[String], today: NaiveDate) -> Option<NaiveDate> {
    match words {
        [single] => NaiveDate::parse_from_str(single, "%Y-%m-%d")
            .ok()
            .or_else(|| parse_us_date(single, today)),
        [a, b] => parse_month_day(a, b, None, today).or_else(|| parse_month_day(b, a, None, today)),
        [a, b, year] => parse_month_day(a, b, Some(year.as_str()), today)
            .or_else(|| parse_month_day(b, a, Some(year.as_str()), today)),
        _ => None,
    }
}

/// Parse month and day, e.g. `dec 15`, `december 15th`, `dec 15 2025`.
///
/// Without an explicit year the date rolls over to its next occurrence once
/// it has passed.
fn parse_month_day(
    month: &str,
    day: &str,
    year: Option<&str>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let month = parse_month_name(month)?;
    let day = parse_day(day)?;

    if let Some(year) = year {
        if year.len() != 4 {
            return None;
        }
        return NaiveDate::from_ymd_opt(year.parse().ok()?, month, day);
    }

    next_occurrence(month, day, today)
}

/// The first `month`/`day` on or after `today`.
///
/// Feb 29 skips ahead to the next leap year.
fn next_occurrence(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let year = today.year();
    (year..=year.saturating_add(8))
        .filter_map(|y| NaiveDate::from_ymd_opt(y, month, day))
        .find(|date| *date >= today)
}

/// Parse a day of month with an optional ordinal suffix.
fn parse_day(input: &str) -> Option<u32> {
    let digits = input.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &input[digits.len()..];
    if !matches!(suffix, "" | "st" | "nd" | "rd" | "th") {
        return None;
    }
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

/// Parse month name to number.
fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse US date format (MM/DD or MM/DD/YYYY).
fn parse_us_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('/').collect();

    match parts.len() {
        2 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;

            next_occurrence(month, day, today)
        },
        3 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;
            let year: i32 = parts[2].parse().ok()?;

            // Handle 2-digit years
            let year = if year < 100 { 2000 + year } else { year };

            NaiveDate::from_ymd_opt(year, month, day)
        },
        _ => None,
    }
}

/// Parse a time string.
fn parse_time(input: &str) -> Option<NaiveTime> {
    match input {
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {},
    }

    // 24-hour format (15:00, 15:30)
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Some(time);
    }

    // 12-hour format (3pm, 3:30pm)
    let (time_str, is_pm) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (hour, minute) = match time_str.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (time_str.parse::<u32>().ok()?, 0),
    };

    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
