//! Output formatting for quickadd.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::ParseContext;
use crate::error::QuickAddError;
use crate::features::nlp::ParsedTask;

pub use json::*;
pub use pretty::*;

/// Format a parsed task based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Parse` if JSON serialization fails.
pub fn format_parsed_task(
    task: &ParsedTask,
    ctx: &ParseContext,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_task_pretty(task, ctx)),
        OutputFormat::Json => format_parsed_task_json(task, ctx),
    }
}
