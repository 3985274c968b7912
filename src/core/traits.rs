//! Seams for injected facilities.

use thiserror::Error;

use super::{DueDate, ParseContext};

/// Failure inside a date detector.
///
/// The parser never surfaces this to callers; it is logged and treated as
/// "no date found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date detection failed: {0}")]
pub struct DetectError(pub String);

/// General-purpose date/time recognition over free text.
///
/// Consulted by the date extractor only after every keyword phrase and
/// weekday name failed to match.
#[cfg_attr(test, mockall::automock)]
pub trait DateDetector {
    /// Find the first date or time expression in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError`] if the detector itself malfunctions. Text
    /// without any date is `Ok(None)`, not an error.
    fn detect(&self, text: &str, ctx: &ParseContext) -> Result<Option<DueDate>, DetectError>;
}
