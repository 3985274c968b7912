//! JSON output formatting for quickadd.

use serde_json::json;

use crate::core::ParseContext;
use crate::error::QuickAddError;
use crate::features::nlp::ParsedTask;

/// Format a parsed task as JSON
///
/// Dates are flattened to ISO strings: `due_date` as `YYYY-MM-DD` and
/// `due_time` as `HH:MM`, both `null` when absent.
///
/// # Errors
///
/// Returns `QuickAddError::Parse` if JSON serialization fails.
pub fn format_parsed_task_json(
    task: &ParsedTask,
    ctx: &ParseContext,
) -> Result<String, QuickAddError> {
    let output = json!({
        "title": task.title,
        "due_date": task.due_date_iso(),
        "due_time": task
            .due_date
            .and_then(|d| d.time)
            .map(|t| t.format("%H:%M").to_string()),
        "priority": task.priority,
        "tag_names": task.tag_names,
        "repeat_frequency": task.repeat_frequency,
        "is_someday": task.is_someday,
        "now": ctx.now.format("%Y-%m-%dT%H:%M:%S").to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
