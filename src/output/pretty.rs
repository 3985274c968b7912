use std::fmt::Write;

use colored::Colorize;

use crate::core::{DueDate, ParseContext};
use crate::features::nlp::{ParsedTask, Priority};

/// Format a parsed task as pretty output
pub fn format_parsed_task_pretty(task: &ParsedTask, ctx: &ParseContext) -> String {
    let title = if task.title.is_empty() {
        "(empty title)".dimmed().to_string()
    } else {
        task.title.bold().to_string()
    };
    let mut output = format!("{} {title}\n", "Title:".cyan().bold());

    if let Some(due) = &task.due_date {
        let mut line = due.to_iso_date();
        if let Some(time) = due.time {
            write!(line, " {}", time.format("%H:%M")).ok();
        }
        writeln!(
            output,
            "  {} {} {}",
            "Due:".red(),
            line,
            relative_hint(due, ctx).dimmed()
        )
        .ok();
    }
    if task.priority != Priority::None {
        writeln!(output, "  {} {}", "Priority:".red().bold(), task.priority.label()).ok();
    }
    if !task.tag_names.is_empty() {
        let tags_str: Vec<String> = task.tag_names.iter().map(|t| format!("#{t}")).collect();
        writeln!(output, "  {} {}", "Tags:".yellow(), tags_str.join(" ")).ok();
    }
    if let Some(repeat) = task.repeat_frequency {
        write!(output, "  {} {}", "Repeat:".magenta(), repeat.label()).ok();
        if let Some(next) = task
            .due_date
            .and_then(|d| repeat.next_after(d.date, &ctx.calendar))
        {
            write!(output, " {}", format!("(then {})", next.format("%Y-%m-%d")).dimmed()).ok();
        }
        output.push('\n');
    }
    if task.is_someday {
        writeln!(output, "  {} yes", "Someday:".blue()).ok();
    }

    output
}

/// Short description of a due date relative to the reference day.
fn relative_hint(due: &DueDate, ctx: &ParseContext) -> String {
    let today = ctx.today();
    if due.is_overdue(today) {
        "(overdue)".to_string()
    } else if due.is_due_today(today) {
        "(today)".to_string()
    } else if due.is_due_tomorrow(today) {
        "(tomorrow)".to_string()
    } else if due.is_due_within(today, 7) {
        format!("({})", due.date.format("%A"))
    } else {
        format!("(in {} days)", (due.date - today).num_days())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::features::nlp::RepeatFrequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx() -> ParseContext {
        ParseContext::new(date(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap())
    }

    #[test]
    fn test_format_parsed_task_pretty() {
        colored::control::set_override(false);
        let task = ParsedTask {
            title: "test task".to_string(),
            due_date: Some(DueDate::date_only(date(2024, 3, 2))),
            priority: Priority::High,
            tag_names: vec!["work".to_string()],
            repeat_frequency: Some(RepeatFrequency::Weekly),
            is_someday: true,
        };

        let result = format_parsed_task_pretty(&task, &ctx());
        assert!(result.contains("test task"));
        assert!(result.contains("2024-03-02 (tomorrow)"));
        assert!(result.contains("High"));
        assert!(result.contains("#work"));
        assert!(result.contains("Weekly (then 2024-03-09)"));
        assert!(result.contains("Someday: yes"));
    }

    #[test]
    fn test_format_empty_title() {
        colored::control::set_override(false);
        let result = format_parsed_task_pretty(&ParsedTask::default(), &ctx());
        assert!(result.contains("(empty title)"));
        assert!(!result.contains("Due:"));
    }

    #[test]
    fn test_relative_hint() {
        let c = ctx();
        assert_eq!(relative_hint(&DueDate::date_only(date(2024, 2, 28)), &c), "(overdue)");
        assert_eq!(relative_hint(&DueDate::date_only(date(2024, 3, 1)), &c), "(today)");
        assert_eq!(relative_hint(&DueDate::date_only(date(2024, 3, 4)), &c), "(Monday)");
        assert_eq!(relative_hint(&DueDate::date_only(date(2024, 4, 1)), &c), "(in 31 days)");
    }
}
