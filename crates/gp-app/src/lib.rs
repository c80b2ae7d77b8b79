//! Gallery Picker Application Orchestration Layer
//!
//! This crate owns the session state (current page and selection ledger) and
//! exposes it to presentation adapters as read-only projections plus a narrow
//! command interface.

pub mod page_view;
pub mod summary;

pub use page_view::{NavigationBlocked, PageLoadOutcome, PageViewController, PageViewSnapshot, ViewStatus};
pub use summary::{SelectionCommands, SelectionSummary, SummaryAction};
