//! Page view: the paginated table's state machine.
//! 页面视图：分页表格的状态机

mod controller;
mod status;

pub use controller::PageViewController;
pub use status::{NavigationBlocked, PageLoadOutcome, PageViewSnapshot, ViewStatus};
