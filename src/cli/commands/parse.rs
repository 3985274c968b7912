//! Parse command implementation.
//!
//! This module implements `quickadd parse` for trying the quick-add parser.

use chrono::{NaiveDate, NaiveDateTime};

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::core::ParseContext;
use crate::error::QuickAddError;
use crate::features::nlp::TextParser;
use crate::output::format_parsed_task;

/// Accepted `--now` layouts with a time component.
const NOW_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if `--now` is malformed or output formatting fails.
pub fn parse(
    args: &ParseArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    let now = match args.now.as_deref() {
        Some(raw) => parse_now(raw)?,
        None => ParseContext::local().now,
    };
    let week_start = args.week_start.unwrap_or(config.parser.week_start);
    let ctx = ParseContext::new(now).with_week_start(week_start.to_weekday());

    let parser = TextParser::new()
        .fallback_detection(config.parser.fallback_detection && !args.no_fallback);
    let task = parser.parse(&args.joined_text(), &ctx);

    format_parsed_task(&task, &ctx, format)
}

/// Parse a `--now` value.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS]` and
/// `YYYY-MM-DD HH:MM[:SS]`.
///
/// # Errors
///
/// Returns `QuickAddError::InvalidArgument` if no format matches.
pub fn parse_now(raw: &str) -> Result<NaiveDateTime, QuickAddError> {
    let raw = raw.trim();

    if let Some(now) = NOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Ok(now);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            QuickAddError::InvalidArgument(format!(
                "--now expects YYYY-MM-DD or YYYY-MM-DDTHH:MM, got {raw:?}"
            ))
        })
}
