//! Issue data shown on the board and the rules for narrowing it down.

use serde::Deserialize;
use std::fmt;

use crate::utils::config::STALE_AFTER_SECS;

pub mod filter;
pub mod store;

pub use filter::{filter_issues, status_counts, FilterOption, FILTER_OPTIONS};

/// Workflow state recorded on an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    WaitingForReview,
    InProgress,
    Stale,
}

impl IssueStatus {
    pub const fn label(self) -> &'static str {
        match self {
            IssueStatus::WaitingForReview => "Waiting for review",
            IssueStatus::InProgress => "In progress",
            IssueStatus::Stale => "Stale",
        }
    }

    /// CSS modifier used for the status badge
    pub const fn badge_class(self) -> &'static str {
        match self {
            IssueStatus::WaitingForReview => "badge-review",
            IssueStatus::InProgress => "badge-progress",
            IssueStatus::Stale => "badge-stale",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub status: IssueStatus,
    /// Last activity, unix seconds
    pub updated_at: i64,
}

impl Issue {
    /// Status after applying the inactivity rule: open work untouched for
    /// longer than the stale threshold is reported as stale.
    pub fn effective_status(&self, now: i64) -> IssueStatus {
        match self.status {
            IssueStatus::Stale => IssueStatus::Stale,
            status if now.saturating_sub(self.updated_at) > STALE_AFTER_SECS => {
                tracing::trace!(issue = self.number, from = %status, "issue considered stale");
                IssueStatus::Stale
            }
            status => status,
        }
    }
}
