use std::fmt;
use tracing::debug;

use super::{Issue, IssueStatus};

/// Options offered by the status filter, in display order.
pub const FILTER_OPTIONS: [FilterOption; 4] = [
    FilterOption::All,
    FilterOption::WaitingForReview,
    FilterOption::InProgress,
    FilterOption::Stale,
];

/// One entry of the status filter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOption {
    All,
    WaitingForReview,
    InProgress,
    Stale,
}

impl FilterOption {
    pub const fn label(self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::WaitingForReview => IssueStatus::WaitingForReview.label(),
            FilterOption::InProgress => IssueStatus::InProgress.label(),
            FilterOption::Stale => IssueStatus::Stale.label(),
        }
    }

    /// Looks up an option by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        FILTER_OPTIONS.into_iter().find(|option| option.label() == label)
    }

    pub fn matches(self, status: IssueStatus) -> bool {
        match self {
            FilterOption::All => true,
            FilterOption::WaitingForReview => status == IssueStatus::WaitingForReview,
            FilterOption::InProgress => status == IssueStatus::InProgress,
            FilterOption::Stale => status == IssueStatus::Stale,
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Applies the selected status label and the search query to `issues`.
///
/// A label outside the known option set filters nothing by status.
pub fn filter_issues(issues: &[Issue], label: &str, query: &str, now: i64) -> Vec<Issue> {
    let option = FilterOption::from_label(label).unwrap_or_else(|| {
        debug!(label, "unknown status filter, showing all issues");
        FilterOption::All
    });
    let query = query.trim().to_lowercase();

    issues
        .iter()
        .filter(|issue| option.matches(issue.effective_status(now)))
        .filter(|issue| query.is_empty() || issue.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Number of issues each filter option would show.
pub fn status_counts(issues: &[Issue], now: i64) -> Vec<(FilterOption, usize)> {
    FILTER_OPTIONS
        .into_iter()
        .map(|option| {
            let count = issues
                .iter()
                .filter(|issue| option.matches(issue.effective_status(now)))
                .count();
            (option, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 2_000_000_000;

    fn sample() -> Vec<Issue> {
        let make = |number, title: &str, status| Issue {
            number,
            title: title.to_string(),
            author: "maintainer".to_string(),
            status,
            updated_at: NOW - 3600,
        };
        vec![
            make(1, "Add refund history view", IssueStatus::WaitingForReview),
            make(2, "Escrow deadline overflow", IssueStatus::InProgress),
            make(3, "Document payout flow", IssueStatus::Stale),
            make(4, "Refund eligibility flags", IssueStatus::InProgress),
        ]
    }

    fn numbers(issues: &[Issue]) -> Vec<u64> {
        issues.iter().map(|issue| issue.number).collect()
    }

    #[test]
    fn test_option_order_and_labels() {
        let labels: Vec<&str> = FILTER_OPTIONS.iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["All", "Waiting for review", "In progress", "Stale"]);
    }

    #[test]
    fn test_from_label_is_exact() {
        for option in FILTER_OPTIONS {
            assert_eq!(FilterOption::from_label(option.label()), Some(option));
        }
        assert_eq!(FilterOption::from_label("stale"), None);
        assert_eq!(FilterOption::from_label("Stale "), None);
        assert_eq!(FilterOption::from_label("Unknown"), None);
    }

    #[test]
    fn test_filter_by_status() {
        let issues = sample();
        assert_eq!(numbers(&filter_issues(&issues, "All", "", NOW)), [1, 2, 3, 4]);
        assert_eq!(numbers(&filter_issues(&issues, "In progress", "", NOW)), [2, 4]);
        assert_eq!(numbers(&filter_issues(&issues, "Waiting for review", "", NOW)), [1]);
        assert_eq!(numbers(&filter_issues(&issues, "Stale", "", NOW)), [3]);
    }

    #[test]
    fn test_filter_combines_status_and_query() {
        let issues = sample();
        assert_eq!(numbers(&filter_issues(&issues, "All", "REFUND", NOW)), [1, 4]);
        assert_eq!(numbers(&filter_issues(&issues, "In progress", "refund", NOW)), [4]);
        assert!(filter_issues(&issues, "Stale", "refund", NOW).is_empty());
    }

    #[test]
    fn test_unknown_label_applies_no_status_filter() {
        let issues = sample();
        assert_eq!(numbers(&filter_issues(&issues, "Unknown", "", NOW)), [1, 2, 3, 4]);
    }

    #[test]
    fn test_stale_filter_uses_inactivity() {
        let mut issues = sample();
        issues[0].updated_at = 0;
        assert_eq!(numbers(&filter_issues(&issues, "Stale", "", NOW)), [1, 3]);
        assert!(filter_issues(&issues, "Waiting for review", "", NOW).is_empty());
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&sample(), NOW);
        assert_eq!(
            counts,
            vec![
                (FilterOption::All, 4),
                (FilterOption::WaitingForReview, 1),
                (FilterOption::InProgress, 2),
                (FilterOption::Stale, 1),
            ]
        );
    }
}
