//! Output formatting module for the taskpad CLI
//!
//! Provides the remaining-count heading and table formatting for task
//! listings.

use taskpad_store::{Task, remaining_heading};

/// Maximum width for the name column before truncation
const MAX_NAME_WIDTH: usize = 40;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a visible task projection for display.
///
/// The first line is always the remaining-count heading; a table follows
/// when there is anything to show:
///
/// ```text
/// 2 tasks remaining
///
/// ID  Done  Name
/// --  ----  --------
/// 1   [ ]   Buy milk
/// 2   [x]   Eat
/// ```
pub fn format_task_list(tasks: &[&Task]) -> String {
    let mut out = remaining_heading(tasks.len());
    if tasks.is_empty() {
        return out;
    }
    out.push_str("\n\n");
    out.push_str(&format_task_table(tasks));
    out
}

/// Format tasks into an aligned table string.
fn format_task_table(tasks: &[&Task]) -> String {
    let headers = ["ID", "Done", "Name"];

    let id_width = tasks
        .iter()
        .map(|t| t.id.len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let done_width = headers[1].len();

    let name_width = tasks
        .iter()
        .map(|t| truncate(&t.name, MAX_NAME_WIDTH).chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[2].len());

    let mut lines = Vec::with_capacity(tasks.len() + 2);

    lines.push(format!(
        "{:<id_width$}  {:<done_width$}  {:<name_width$}",
        headers[0], headers[1], headers[2]
    ));
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(id_width),
        "-".repeat(done_width),
        "-".repeat(name_width)
    ));

    for task in tasks {
        let marker = if task.completed { "[x]" } else { "[ ]" };
        lines.push(format!(
            "{:<id_width$}  {:<done_width$}  {:<name_width$}",
            task.id,
            marker,
            truncate(&task.name, MAX_NAME_WIDTH)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_tiny_width_has_no_ellipsis() {
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_empty_listing_is_heading_only() {
        assert_eq!(format_task_list(&[]), "0 tasks remaining");
    }

    #[test]
    fn test_single_task_heading_is_singular() {
        let task = Task::new("1", "Buy milk");
        let out = format_task_list(&[&task]);
        assert!(out.starts_with("1 task remaining\n\n"));
    }

    #[test]
    fn test_table_contains_markers_and_names() {
        let a = Task::new("1", "Buy milk");
        let b = Task::new("2", "Eat").with_completed(true);
        let out = format_task_list(&[&a, &b]);

        assert!(out.starts_with("2 tasks remaining"));
        let table: Vec<&str> = out.lines().collect();
        assert_eq!(table[2], "ID  Done  Name    ");
        assert!(table[4].contains("[ ]"));
        assert!(table[4].contains("Buy milk"));
        assert!(table[5].contains("[x]"));
        assert!(table[5].contains("Eat"));
    }

    #[test]
    fn test_columns_align_on_longest_id() {
        let a = Task::new("1", "Short");
        let b = Task::new("longer-id", "Other");
        let out = format_task_list(&[&a, &b]);

        let lines: Vec<&str> = out.lines().collect();
        // Marker column starts at the same offset on both task rows.
        assert_eq!(
            lines[4].find("[ ]").unwrap(),
            lines[5].find("[ ]").unwrap()
        );
    }
}
