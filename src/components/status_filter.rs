//! Status filter dropdown.
//!
//! Fully controlled: the owner supplies the selected label and whether the
//! menu is open, and receives every interaction back through callbacks.
//!
//! ```ignore
//! StatusFilter {
//!     value: selected_status(),
//!     is_open: filter_open(),
//!     on_change: move |label| selected_status.set(label),
//!     on_toggle: move |_| filter_open.set(!filter_open()),
//!     on_close: move |_| filter_open.set(false),
//! }
//! ```

use dioxus::prelude::*;
use tracing::trace;

use crate::components::icons::{CheckIcon, ChevronDownIcon};
use crate::issues::{FilterOption, FILTER_OPTIONS};

/// A click the dropdown can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    ToggleClicked,
    BackdropClicked,
    OptionClicked(FilterOption),
}

/// Callback the dropdown fires towards its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownNotice {
    Toggle,
    Change(&'static str),
    Close,
}

impl DropdownEvent {
    /// Callbacks to fire for this event, in firing order.
    pub fn notices(self) -> Vec<DropdownNotice> {
        match self {
            DropdownEvent::ToggleClicked => vec![DropdownNotice::Toggle],
            DropdownEvent::BackdropClicked => vec![DropdownNotice::Close],
            DropdownEvent::OptionClicked(option) => {
                vec![DropdownNotice::Change(option.label()), DropdownNotice::Close]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow {
    pub option: FilterOption,
    pub selected: bool,
}

/// Menu rows in display order. At most one row is selected: the one whose
/// label equals `value` exactly.
pub fn menu_rows(value: &str) -> Vec<MenuRow> {
    FILTER_OPTIONS
        .into_iter()
        .map(|option| MenuRow {
            option,
            selected: option.label() == value,
        })
        .collect()
}

fn chevron_class(is_open: bool) -> &'static str {
    if is_open {
        "status-filter-chevron open"
    } else {
        "status-filter-chevron"
    }
}

fn row_class(selected: bool) -> &'static str {
    if selected {
        "status-filter-option selected"
    } else {
        "status-filter-option"
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct StatusFilterProps {
    value: String,
    is_open: bool,
    on_change: EventHandler<String>,
    on_toggle: EventHandler<()>,
    on_close: EventHandler<()>,
}

#[component]
pub fn StatusFilter(props: StatusFilterProps) -> Element {
    let StatusFilterProps {
        value,
        is_open,
        on_change,
        on_toggle,
        on_close,
    } = props;

    let dispatch = move |event: DropdownEvent| {
        for notice in event.notices() {
            trace!(?event, ?notice, "status filter");
            match notice {
                DropdownNotice::Toggle => on_toggle.call(()),
                DropdownNotice::Change(label) => on_change.call(label.to_string()),
                DropdownNotice::Close => on_close.call(()),
            }
        }
    };

    rsx! {
        div { class: "status-filter",
            button {
                class: "status-filter-toggle",
                r#type: "button",
                onclick: move |_| dispatch(DropdownEvent::ToggleClicked),
                span { class: "status-filter-value", "{value}" }
                ChevronDownIcon { class: chevron_class(is_open) }
            }

            if is_open {
                // Sits behind the menu and catches clicks anywhere else
                div {
                    class: "status-filter-backdrop",
                    onclick: move |_| dispatch(DropdownEvent::BackdropClicked),
                }
                ul { class: "status-filter-menu",
                    {menu_rows(&value).into_iter().map(|row| {
                        let label = row.option.label();
                        rsx! {
                            li {
                                key: "{label}",
                                class: row_class(row.selected),
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    dispatch(DropdownEvent::OptionClicked(row.option));
                                },
                                if row.selected {
                                    CheckIcon { class: "check-icon" }
                                } else {
                                    span { class: "check-placeholder" }
                                }
                                span { "{label}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
