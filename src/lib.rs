//! quickadd - natural language quick-add parsing for tasks
//!
//! Turns a single line such as `"Team sync every monday #work !!"` into a
//! structured [`ParsedTask`]: due date, priority, tags, recurrence, a someday
//! flag and a cleaned title. The parser is pure; the reference moment and
//! calendar rules are passed in explicitly through [`ParseContext`].

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use crate::core::{Calendar, DateDetector, DueDate, NaturalDateDetector, ParseContext};
pub use error::QuickAddError;
pub use features::nlp::{parse, ParsedTask, Priority, RepeatFrequency, TextParser};
