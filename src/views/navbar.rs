use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            div {
                id: "sidebar",
                class: "board-sidebar",
                div {
                    class: "sidebar-logo",
                    span { "Issue Board" }
                }
                nav {
                    class: "sidebar-links",
                    div { class: "nav-group",
                        span { class: "nav-group-title", "ISSUES" }
                        Link {
                            to: Route::Issues {},
                            class: "nav-issues",
                            "All issues"
                        }
                        Link {
                            to: Route::Summary {},
                            class: "nav-summary",
                            "Summary"
                        }
                    }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
