//! Shared components used by the board views.

pub mod icons;

mod issue_item;
pub use issue_item::IssueItem;

mod search_input;
pub use search_input::SearchInput;

pub mod status_filter;
pub use status_filter::StatusFilter;
