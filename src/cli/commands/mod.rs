//! Command implementations for quickadd.

mod completions;
mod config;
mod parse;

pub use completions::completions;
pub use config::config;
pub use parse::{parse, parse_now};
