use dioxus::prelude::*;
use tracing::debug;

use crate::components::{IssueItem, SearchInput, StatusFilter};
use crate::contexts::IssuesContext;
use crate::issues::{filter_issues, Issue};
use crate::utils::config::DEFAULT_STATUS_FILTER;
use crate::utils::time_utils::now_secs;

const ISSUES_CSS: Asset = asset!("/assets/styling/issues.css");

/// Filtered issues together with the time their status was evaluated at
#[derive(Debug, Clone, PartialEq)]
struct IssueSnapshot {
    now: i64,
    issues: Vec<Issue>,
}

fn snapshot(issues: &[Issue], label: &str, query: &str, now: i64) -> IssueSnapshot {
    IssueSnapshot {
        now,
        issues: filter_issues(issues, label, query, now),
    }
}

#[component]
pub fn Issues() -> Element {
    let ctx = use_context::<IssuesContext>();

    let mut selected_status = use_signal(|| DEFAULT_STATUS_FILTER.to_string());
    let mut filter_open = use_signal(|| false);
    let mut search_query = use_signal(String::new);

    let visible = use_memo(move || {
        let issues = ctx.issues.read();
        snapshot(&issues, &selected_status(), &search_query(), now_secs())
    });
    let IssueSnapshot { now, issues } = visible();

    rsx! {
        document::Link { rel: "stylesheet", href: ISSUES_CSS }
        div { class: "issues-container",
            div { class: "issues-header",
                div { class: "header-left",
                    h1 { "Issues" }
                    div { class: "header-controls",
                        SearchInput {
                            query: search_query(),
                            placeholder: "Filter by title...",
                            on_change: move |q| search_query.set(q)
                        }
                        StatusFilter {
                            value: selected_status(),
                            is_open: filter_open(),
                            on_change: move |label: String| {
                                debug!(%label, "status filter changed");
                                selected_status.set(label);
                            },
                            on_toggle: move |_| filter_open.set(!filter_open()),
                            on_close: move |_| filter_open.set(false),
                        }
                        span { class: "issue-count", "{issues.len()} issues" }
                    }
                }
            }

            div { class: "issues-list",
                if issues.is_empty() {
                    p { class: "empty-state", "No issues match the current filter." }
                }
                {issues.iter().map(|issue| {
                    rsx! {
                        IssueItem { key: "{issue.number}", issue: issue.clone(), now }
                    }
                })}
            }
        }
    }
}
