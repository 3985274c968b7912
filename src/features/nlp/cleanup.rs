//! Title cleanup: strips every recognized token from the original text.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::dates::DATE_KEYWORDS;
use super::extract::{RECURRENCE_KEYWORDS, SOMEDAY_KEYWORDS, TAG_PATTERN};
use super::ParsedTask;

static BANG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!!!|!!|!").unwrap_or_else(|e| panic!("Invalid bang regex: {e}")));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").unwrap_or_else(|e| panic!("Invalid whitespace regex: {e}")));

static DATE_KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| keyword_patterns(&DATE_KEYWORDS));

static RECURRENCE_KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let keywords: Vec<&str> = RECURRENCE_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .collect();
    keyword_patterns(&keywords)
});

static SOMEDAY_KEYWORD_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| keyword_patterns(&SOMEDAY_KEYWORDS));

/// Case-insensitive literal matchers, one per keyword, in list order.
fn keyword_patterns(keywords: &[&str]) -> Vec<Regex> {
    keywords
        .iter()
        .map(|kw| {
            RegexBuilder::new(&regex::escape(kw))
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| panic!("Invalid keyword regex for {kw:?}: {e}"))
        })
        .collect()
}

fn remove_all(text: &str, patterns: &[Regex]) -> String {
    patterns.iter().fold(text.to_string(), |acc, re| {
        re.replace_all(&acc, "").into_owned()
    })
}

/// Build the title from original-case `text` given what the extractors found.
///
/// Passes run in a fixed order, each on the previous result:
/// 1. every `#word` token, tag or priority shorthand alike
/// 2. runs of `!`
/// 3. all date keywords, if any due date was found (even one that came
///    from the fallback detector)
/// 4. recurrence keywords, if a recurrence was found
/// 5. `maybe later` then `someday`, if the task is a someday task
/// 6. whitespace runs collapsed to one space, then trimmed
#[must_use]
pub fn clean_title(text: &str, found: &ParsedTask) -> String {
    let mut result = TAG_PATTERN.replace_all(text, "").into_owned();
    result = BANG_PATTERN.replace_all(&result, "").into_owned();

    if found.due_date.is_some() {
        result = remove_all(&result, &DATE_KEYWORD_PATTERNS);
    }
    if found.repeat_frequency.is_some() {
        result = remove_all(&result, &RECURRENCE_KEYWORD_PATTERNS);
    }
    if found.is_someday {
        result = remove_all(&result, &SOMEDAY_KEYWORD_PATTERNS);
    }

    WHITESPACE_RUN.replace_all(&result, " ").trim().to_string()
}
