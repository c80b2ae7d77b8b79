//! Pagination model shared by the data source port and the page view.
//! 数据源端口与页面视图共享的分页模型

mod request;
mod state;

pub use request::{PageRequest, PageRequestError, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use state::{ArtworkPage, PageState};
