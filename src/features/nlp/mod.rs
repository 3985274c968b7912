//! Natural language parsing for quick task entry.
//!
//! This module turns input like:
//! - "Buy milk tomorrow #errands"
//! - "Team sync every week #work !!"
//! - "Learn the cello someday"
//!
//! into a [`ParsedTask`]. Five independent extractors scan the same input
//! (priority, recurrence, someday, tags, date) and a single cleanup pass then
//! strips every recognized token from the original text to form the title.

mod cleanup;
mod dates;
mod extract;
mod parser;
mod task;

pub use cleanup::clean_title;
pub use dates::extract_date;
pub use extract::{extract_priority, extract_recurrence, extract_someday, extract_tags};
pub use parser::{parse, TextParser};
pub use task::{ParsedTask, Priority, RepeatFrequency};
