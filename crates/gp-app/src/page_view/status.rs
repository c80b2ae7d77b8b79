use gp_core::ports::TransportError;
use gp_core::{Artwork, ArtworkId, PageRequestError, PageState};

/// Where the page view is in its load cycle.
///
/// `Idle → Loading → Idle` on success, `Idle → Loading → Error → Idle` on
/// failure once the error has been acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading { page_number: u32 },
    Error(TransportError),
}

/// Result of one `go_to_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoadOutcome {
    /// The page was loaded and is now on screen.
    Applied(PageState),
    /// A newer request was issued while this one was in flight; its response
    /// was discarded.
    Superseded { page_number: u32 },
    /// The fetch failed; the previous page is still on screen.
    Failed(TransportError),
    /// The page number or size was invalid; nothing was fetched.
    Rejected(PageRequestError),
}

/// Why `next_page` or `previous_page` did not issue a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationBlocked {
    /// No page has been loaded yet, e.g. after a failed first load.
    NoPageLoaded,
    FirstPage,
    LastPage,
}

/// Read-only projection of the page view for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewSnapshot {
    pub status: ViewStatus,
    pub page: Option<PageState>,
    pub rows: Vec<Artwork>,
    /// Rows on this page that render as checked, in row order.
    pub selected_on_page: Vec<ArtworkId>,
    pub selected_total: usize,
}

impl PageViewSnapshot {
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected_on_page.contains(&id)
    }
}
