/// Configuration constants for the application
pub mod config {
    /// Directory, relative to the home directory, holding the issue file
    pub const ISSUE_STORAGE_DIR: &str = ".issue-board";

    /// Name of the issue file inside the storage directory
    pub const ISSUES_FILE_NAME: &str = "issues.json";

    /// Status filter label selected when the board opens
    pub const DEFAULT_STATUS_FILTER: &str = "All";

    /// Seconds without activity after which open work counts as stale
    pub const STALE_AFTER_SECS: i64 = 14 * 24 * 60 * 60;

    /// Window title
    pub const WINDOW_TITLE: &str = "Issue Board";
}

/// Utility functions for file operations
pub mod file_utils {
    use super::config::*;
    use crate::contexts::{IssueResult, IssueStoreError};
    use std::path::PathBuf;

    /// Get the issue storage directory path
    pub fn get_issue_storage_dir() -> IssueResult<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(IssueStoreError::HomeDirNotFound)?;
        Ok(home_dir.join(ISSUE_STORAGE_DIR))
    }

    /// Full path of the issue file
    pub fn issues_file_path() -> IssueResult<PathBuf> {
        Ok(get_issue_storage_dir()?.join(ISSUES_FILE_NAME))
    }
}

/// Utility functions for time and age calculations
pub mod time_utils {
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Current time in unix seconds
    pub fn now_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Formats a duration in seconds into a human-readable string (e.g., "2d", "5h", "30m")
    pub fn format_duration(seconds: i64) -> String {
        let seconds = seconds.max(0);
        if seconds < 60 {
            format!("{}s", seconds)
        } else if seconds < 3600 {
            format!("{}m", seconds / 60)
        } else if seconds < 86400 {
            format!("{}h", seconds / 3600)
        } else {
            format!("{}d", seconds / 86400)
        }
    }

    /// Age of a unix timestamp relative to `now`
    pub fn format_age(timestamp: i64, now: i64) -> String {
        format_duration(now.saturating_sub(timestamp))
    }
}
