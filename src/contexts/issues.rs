use dioxus::prelude::*;

use crate::issues::Issue;

/// Issue list shared by every view
#[derive(Clone, Copy)]
pub struct IssuesContext {
    pub issues: Signal<Vec<Issue>>,
}
