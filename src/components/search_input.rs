use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    placeholder: String,
    on_change: EventHandler<String>,
}

/// Title search box with a clear button once something is typed
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.query}",
                oninput: move |evt| on_change.call(evt.value())
            }
            if !props.query.is_empty() {
                button {
                    class: "search-clear",
                    r#type: "button",
                    title: "Clear search",
                    onclick: move |_| on_change.call(String::new()),
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, PartialEq, Clone)]
    struct HarnessProps {
        query: String,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        rsx! {
            SearchInput {
                query: props.query,
                placeholder: "Filter by title...",
                on_change: move |_| {},
            }
        }
    }

    fn render(query: &str) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { query: query.to_string() });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_placeholder_and_clear_button() {
        let empty = render("");
        assert!(empty.contains("Filter by title..."));
        assert!(!empty.contains("search-clear"));

        assert!(render("refund").contains("search-clear"));
    }
}
