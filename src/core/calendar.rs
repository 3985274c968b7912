//! Calendar rules and the reference moment for parsing.

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, Weekday};

/// Calendar rules that relative date phrases are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    /// First day of the week.
    pub week_start: Weekday,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl Calendar {
    /// Create a calendar whose weeks begin on `week_start`.
    #[must_use]
    pub const fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Position of `date` within its week, counted from `week_start` (0..=6).
    #[must_use]
    pub fn weekday_index(&self, date: NaiveDate) -> u32 {
        Self::index_of(date.weekday(), self.week_start)
    }

    /// Position of `day` within the week, counted from `week_start` (0..=6).
    #[must_use]
    pub fn index_of_weekday(&self, day: Weekday) -> u32 {
        Self::index_of(day, self.week_start)
    }

    fn index_of(day: Weekday, start: Weekday) -> u32 {
        (day.num_days_from_sunday() + 7 - start.num_days_from_sunday()) % 7
    }

    /// Forward distance in days from `from` to the next `target` (0..=6).
    ///
    /// Returns 0 when `from` already falls on `target`.
    #[must_use]
    pub fn days_until(&self, from: NaiveDate, target: Weekday) -> i64 {
        let current = i64::from(self.weekday_index(from));
        let wanted = i64::from(self.index_of_weekday(target));
        (wanted - current).rem_euclid(7)
    }

    /// The most recent `week_start` on or before `date`.
    ///
    /// Returns `None` before the first representable week start.
    #[must_use]
    pub fn start_of_week(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(u64::from(self.weekday_index(date))))
    }

    /// Add calendar months, clamping the day to the end of the target month.
    ///
    /// Returns `None` if the result is outside chrono's representable range.
    #[must_use]
    pub fn add_months(&self, date: NaiveDate, months: u32) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(months))
    }
}

/// The explicit reference moment and calendar used for one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    /// Reference instant every relative phrase is computed against.
    pub now: NaiveDateTime,
    /// Calendar rules.
    pub calendar: Calendar,
}

impl ParseContext {
    /// Context for `now` with the default (Sunday-start) calendar.
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            calendar: Calendar::default(),
        }
    }

    /// Replace the first day of the week.
    #[must_use]
    pub const fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.calendar.week_start = week_start;
        self
    }

    /// Context for the current local wall-clock time.
    #[must_use]
    pub fn local() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Start of the reference day.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_index_sunday_start() {
        let cal = Calendar::default();
        // 2024-03-03 is a Sunday
        assert_eq!(cal.weekday_index(date(2024, 3, 3)), 0);
        assert_eq!(cal.weekday_index(date(2024, 3, 9)), 6);
    }

    #[test]
    fn test_weekday_index_monday_start() {
        let cal = Calendar::new(Weekday::Mon);
        assert_eq!(cal.weekday_index(date(2024, 3, 4)), 0);
        assert_eq!(cal.weekday_index(date(2024, 3, 3)), 6);
    }

    #[test]
    fn test_days_until_independent_of_week_start() {
        // 2024-03-01 is a Friday
        let from = date(2024, 3, 1);
        for start in [Weekday::Sun, Weekday::Mon, Weekday::Sat] {
            let cal = Calendar::new(start);
            assert_eq!(cal.days_until(from, Weekday::Sat), 1);
            assert_eq!(cal.days_until(from, Weekday::Mon), 3);
            assert_eq!(cal.days_until(from, Weekday::Fri), 0);
            assert_eq!(cal.days_until(from, Weekday::Thu), 6);
        }
    }

    #[test]
    fn test_start_of_week() {
        let wed = date(2024, 3, 6);
        assert_eq!(Calendar::default().start_of_week(wed), Some(date(2024, 3, 3)));
        assert_eq!(Calendar::new(Weekday::Mon).start_of_week(wed), Some(date(2024, 3, 4)));

        let first = NaiveDate::MIN;
        assert_eq!(Calendar::new(first.weekday()).start_of_week(first), Some(first));
        assert_eq!(Calendar::new(first.weekday().succ()).start_of_week(first), None);
    }

    #[test]
    fn test_add_months_clamps() {
        let cal = Calendar::default();
        assert_eq!(cal.add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(cal.add_months(date(2024, 3, 1), 1), Some(date(2024, 4, 1)));
        assert_eq!(cal.add_months(date(2024, 12, 15), 1), Some(date(2025, 1, 15)));
    }

    #[test]
    fn test_context_today() {
        let now = date(2024, 3, 1).and_hms_opt(18, 30, 0).unwrap();
        let ctx = ParseContext::new(now).with_week_start(Weekday::Mon);
        assert_eq!(ctx.today(), date(2024, 3, 1));
        assert_eq!(ctx.calendar.week_start, Weekday::Mon);
    }
}
