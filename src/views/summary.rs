use dioxus::prelude::*;

use crate::contexts::IssuesContext;
use crate::issues::status_counts;
use crate::utils::time_utils::now_secs;

const SUMMARY_CSS: Asset = asset!("/assets/styling/summary.css");

/// Issue totals per status filter
#[component]
pub fn Summary() -> Element {
    let ctx = use_context::<IssuesContext>();
    let counts = status_counts(&ctx.issues.read(), now_secs());

    rsx! {
        document::Link { rel: "stylesheet", href: SUMMARY_CSS }

        div { class: "summary-container",
            div { class: "summary-header",
                h1 { "Summary" }
            }
            div { class: "summary-grid",
                {counts.into_iter().map(|(option, count)| rsx! {
                    div { key: "{option}", class: "summary-card",
                        h3 { "{option}" }
                        p { class: "summary-value", "{count}" }
                    }
                })}
            }
        }
    }
}
