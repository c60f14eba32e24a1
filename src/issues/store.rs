//! Loading the issue list shown on the board.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::{Issue, IssueStatus};
use crate::contexts::{IssueResult, IssueStoreError};
use crate::utils::file_utils::issues_file_path;
use crate::utils::time_utils::now_secs;

/// Decodes a JSON array of issues.
pub fn parse_issues(content: &str) -> IssueResult<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(content)?;
    Ok(issues)
}

/// Reads and decodes an issue file.
pub fn load_from_path(path: &Path) -> IssueResult<Vec<Issue>> {
    if !path.exists() {
        return Err(IssueStoreError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let issues = parse_issues(&content)?;
    info!(path = %path.display(), count = issues.len(), "loaded issues");
    Ok(issues)
}

/// Loads the user's issue file, or the built-in sample set when there is none.
pub fn load_default() -> IssueResult<Vec<Issue>> {
    let path = issues_file_path()?;
    match load_from_path(&path) {
        Err(IssueStoreError::FileNotFound(_)) => {
            debug!(path = %path.display(), "no issue file, using sample issues");
            Ok(sample_issues(now_secs()))
        }
        result => result,
    }
}

/// Issues shown when no issue file exists, timestamped relative to `now`.
pub fn sample_issues(now: i64) -> Vec<Issue> {
    const HOUR: i64 = 3600;
    const DAY: i64 = 24 * HOUR;

    let entries = [
        (412, "Escrow refund emits duplicate events", "amara", IssueStatus::InProgress, 2 * HOUR),
        (408, "Add analytics view for locked amounts", "dlee", IssueStatus::WaitingForReview, 5 * HOUR),
        (401, "Deadline range query skips last bounty", "kwame", IssueStatus::InProgress, 3 * DAY),
        (397, "Document partial release flow", "sofia", IssueStatus::WaitingForReview, DAY),
        (385, "Depositor index not populated on batch lock", "ines", IssueStatus::InProgress, 20 * DAY),
        (372, "Migrate fee config to new storage layout", "tomas", IssueStatus::Stale, 40 * DAY),
    ];

    entries
        .into_iter()
        .map(|(number, title, author, status, age)| Issue {
            number,
            title: title.to_string(),
            author: author.to_string(),
            status,
            updated_at: now - age,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issues() {
        let content = r#"[
            {"number": 12, "title": "Fix payout rounding", "author": "ana", "status": "in_progress", "updated_at": 1700000000},
            {"number": 13, "title": "Review docs", "author": "bo", "status": "stale", "updated_at": 1600000000}
        ]"#;

        let issues = parse_issues(content).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].number, 12);
        assert_eq!(issues[0].status, IssueStatus::InProgress);
        assert_eq!(issues[1].status, IssueStatus::Stale);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let content = r#"[{"number": 1, "title": "t", "author": "a", "status": "closed", "updated_at": 0}]"#;
        assert!(matches!(parse_issues(content), Err(IssueStoreError::InvalidContent(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/issue-board/issues.json");
        match load_from_path(path) {
            Err(IssueStoreError::FileNotFound(p)) => assert!(p.ends_with("issues.json")),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_sample_issues_are_unique_and_recent_relative_to_now() {
        let now = 1_800_000_000;
        let issues = sample_issues(now);
        let mut numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), issues.len());
        assert!(issues.iter().all(|i| i.updated_at < now));
    }
}
