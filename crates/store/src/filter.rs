//! Status filtering and projection over task snapshots
//!
//! Provides the `Filter` selection enum and the pure projection that derives
//! the visible subsequence of a snapshot from the current selection.

use crate::models::Task;

/// Status filter selection for the task list.
///
/// Exactly one selection is active at a time; the default is `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task, regardless of status
    #[default]
    All,
    /// Tasks that have not been completed
    Active,
    /// Tasks that have been completed
    Completed,
}

impl Filter {
    /// All selections in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns the display string for this selection.
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Parse a selection from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Filter> {
        match s.to_lowercase().as_str() {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Cycle to the next selection in display order.
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Get the index of this selection within [`Filter::ALL`].
    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }

    /// Check whether a task satisfies this selection's predicate.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Project a snapshot down to the visible subsequence.
    ///
    /// Pure and deterministic: returns the tasks satisfying this selection's
    /// predicate in snapshot order. `All` is the identity projection.
    pub fn apply<'a>(self, snapshot: &'a [Task]) -> Vec<&'a Task> {
        snapshot.iter().filter(|task| self.matches(task)).collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Format the remaining-count heading for a visible task count.
///
/// Singular at exactly one task, plural otherwise (including zero).
pub fn remaining_heading(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Vec<Task> {
        vec![
            Task::new("1", "A"),
            Task::new("2", "B").with_completed(true),
            Task::new("3", "C"),
            Task::new("4", "D").with_completed(true),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let snapshot = sample_snapshot();
        let projected = Filter::All.apply(&snapshot);
        let expected: Vec<&Task> = snapshot.iter().collect();
        assert_eq!(projected, expected);
    }

    #[test]
    fn test_active_keeps_incomplete_in_order() {
        let snapshot = sample_snapshot();
        let projected = Filter::Active.apply(&snapshot);
        let ids: Vec<&str> = projected.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_completed_keeps_complete_in_order() {
        let snapshot = sample_snapshot();
        let projected = Filter::Completed.apply(&snapshot);
        let ids: Vec<&str> = projected.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_active_scenario_two_tasks() {
        // Snapshot = [{1, A, false}, {2, B, true}], filter = Active -> [{1, ...}]
        let snapshot = vec![
            Task::new("1", "A"),
            Task::new("2", "B").with_completed(true),
        ];
        let projected = Filter::Active.apply(&snapshot);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id, "1");
    }

    #[test]
    fn test_projection_is_order_preserving_subsequence() {
        let snapshot = sample_snapshot();
        for filter in Filter::ALL {
            let projected = filter.apply(&snapshot);
            assert!(projected.len() <= snapshot.len());

            // Every projected task appears in the snapshot, and positions
            // are strictly increasing (subsequence, order preserved).
            let mut last_pos = None;
            for task in &projected {
                let pos = snapshot.iter().position(|t| t.id == task.id).unwrap();
                if let Some(last) = last_pos {
                    assert!(pos > last, "projection reordered tasks for {filter}");
                }
                last_pos = Some(pos);
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let snapshot = sample_snapshot();
        for filter in Filter::ALL {
            let once: Vec<Task> = filter.apply(&snapshot).into_iter().cloned().collect();
            let twice = filter.apply(&once);
            let expected: Vec<&Task> = once.iter().collect();
            assert_eq!(twice, expected, "second application changed output for {filter}");
        }
    }

    #[test]
    fn test_active_and_completed_partition_snapshot() {
        let snapshot = sample_snapshot();
        let active = Filter::Active.apply(&snapshot);
        let completed = Filter::Completed.apply(&snapshot);

        assert_eq!(active.len() + completed.len(), snapshot.len());
        for task in &active {
            assert!(!completed.iter().any(|t| t.id == task.id));
        }
        for task in &snapshot {
            let in_active = active.iter().any(|t| t.id == task.id);
            let in_completed = completed.iter().any(|t| t.id == task.id);
            assert!(in_active || in_completed);
        }
    }

    #[test]
    fn test_empty_snapshot() {
        for filter in Filter::ALL {
            assert!(filter.apply(&[]).is_empty());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(Filter::parse("Active"), Some(Filter::Active));
        assert_eq!(Filter::parse("COMPLETED"), Some(Filter::Completed));
        assert_eq!(Filter::parse("done"), None);
    }

    #[test]
    fn test_next_cycles_in_display_order() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }

    #[test]
    fn test_index_matches_all_ordering() {
        for filter in Filter::ALL {
            assert_eq!(Filter::ALL[filter.index()], filter);
        }
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(Filter::Active.to_string(), "active");
    }

    #[test]
    fn test_remaining_heading_plural_agreement() {
        assert_eq!(remaining_heading(0), "0 tasks remaining");
        assert_eq!(remaining_heading(1), "1 task remaining");
        assert_eq!(remaining_heading(2), "2 tasks remaining");
        assert_eq!(remaining_heading(17), "17 tasks remaining");
    }
}
