use dioxus::prelude::*;

use crate::issues::Issue;
use crate::utils::time_utils::format_age;

#[derive(Props, PartialEq, Clone)]
pub struct IssueItemProps {
    issue: Issue,
    /// Reference time for age and staleness, unix seconds
    now: i64,
}

#[component]
pub fn IssueItem(props: IssueItemProps) -> Element {
    let mut is_expanded = use_signal(|| false);

    let issue = &props.issue;
    let status = issue.effective_status(props.now);
    let age = format_age(issue.updated_at, props.now);

    rsx! {
        div { class: "issue-card",
            div { class: "issue-header",
                onclick: move |_| is_expanded.set(!is_expanded()),
                div { class: "issue-title",
                    span { class: "issue-number", "#{issue.number}" }
                    h3 { "{issue.title}" }
                }
                span { class: "status-badge {status.badge_class()}", "{status}" }
            }

            {is_expanded().then(|| rsx! {
                div { class: "issue-details",
                    div { class: "info-item",
                        span { class: "info-label", "Author" }
                        span { class: "info-value", "{issue.author}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Updated" }
                        span { class: "info-value", "{age} ago" }
                    }
                    if status != issue.status {
                        div { class: "info-item",
                            span { class: "info-label", "Recorded status" }
                            span { class: "info-value", "{issue.status}" }
                        }
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueStatus;
    use crate::utils::config::STALE_AFTER_SECS;

    fn render(issue: Issue, now: i64) -> String {
        let mut dom = VirtualDom::new_with_props(IssueItem, IssueItemProps { issue, now });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_effective_status_badge() {
        let now = 10 * STALE_AFTER_SECS;
        let issue = Issue {
            number: 42,
            title: "Refund history is empty".to_string(),
            author: "ana".to_string(),
            status: IssueStatus::InProgress,
            updated_at: 0,
        };

        let html = render(issue, now);
        assert!(html.contains("#42"));
        assert!(html.contains("Refund history is empty"));
        assert!(html.contains("badge-stale"));
        assert!(!html.contains("issue-details"));
    }
}
