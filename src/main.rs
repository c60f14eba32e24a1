use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use tracing::{error, info};
use views::{Issues, Navbar, Summary};

mod components;
mod contexts;
mod issues;
mod utils;
mod views;

use contexts::IssuesContext;
use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Issues {},
        #[route("/summary")]
        Summary {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn configure_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .init();
}

fn main() {
    configure_logging();
    info!("Starting {}", config::WINDOW_TITLE);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::WINDOW_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Load once; a failure leaves the board empty and shows a banner
    let load_result = use_hook(|| {
        issues::store::load_default().inspect_err(|e| error!("Failed to load issues: {}", e))
    });

    let issues = use_signal(|| load_result.clone().unwrap_or_default());
    use_context_provider(|| IssuesContext { issues });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        {load_result.as_ref().err().map(|err| rsx! {
            div {
                class: "error-banner",
                "⚠️ Failed to load issues: {err}"
            }
        })}

        Router::<Route> {}
    }
}
