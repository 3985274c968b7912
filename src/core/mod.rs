//! Core abstractions for quickadd.
//!
//! Calendar rules, the due-date value type, and the fallback date detector
//! shared by the parser and the command-line front end.

mod calendar;
mod datetime;
mod traits;

pub use calendar::{Calendar, ParseContext};
pub use datetime::{DueDate, NaturalDateDetector};
pub use traits::{DateDetector, DetectError};

#[cfg(test)]
pub use traits::MockDateDetector;
