use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::pipeline::PipelineResult;
use crate::records::{ProcessingError, ScoredUser};

/// Format the plain-text report: one line per accepted user, then totals.
///
/// ```text
/// User: u1, Age: 20, Score: 7
///
/// Total users: 1
/// Average score: 7.00
/// Rejected rows: 0
/// ```
///
/// The average line is left out when no user was accepted.
pub fn format_report(result: &PipelineResult) -> String {
    let mut out = String::new();

    for user in &result.accepted {
        out.push_str(&format_user_line(user));
        out.push('\n');
    }

    out.push_str(&format!("\nTotal users: {}\n", result.accepted.len()));
    if let Some(average) = result.average_score() {
        out.push_str(&format!("Average score: {:.2}\n", average));
    }
    out.push_str(&format!("Rejected rows: {}\n", result.rejected()));

    out
}

/// Format a single accepted user as one report line
pub fn format_user_line(user: &ScoredUser) -> String {
    format!(
        "User: {}, Age: {}, Score: {}",
        user.record.user_id, user.record.age, user.score
    )
}

/// One-line run summary for the terminal
pub fn format_summary(result: &PipelineResult, use_colors: bool) -> String {
    let accepted = result.accepted.len();
    let total = result.total_rows();
    let invalid = result.errors.len();
    let filtered = result.filtered;

    if use_colors {
        format!(
            "Accepted {} of {} rows ({} filtered, {} invalid)",
            accepted.green().bold(),
            total,
            filtered.yellow(),
            invalid.red()
        )
    } else {
        format!(
            "Accepted {} of {} rows ({} filtered, {} invalid)",
            accepted, total, filtered, invalid
        )
    }
}

/// List rejected rows, one per line. Empty string when there are none.
pub fn format_rejections(errors: &[ProcessingError], use_colors: bool) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let noun = if errors.len() == 1 { "row" } else { "rows" };
    let mut out = format!("{} {} rejected:", errors.len(), noun);
    for error in errors {
        if use_colors {
            out.push_str(&format!("\n  - {}", error.red()));
        } else {
            out.push_str(&format!("\n  - {}", error));
        }
    }
    out
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
