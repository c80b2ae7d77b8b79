//! Page view controller.
//!
//! Owns the current page, its rows and the selection ledger, and drives page
//! loads through the data source port.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use gp_core::ports::ArtworkPageSourcePort;
use gp_core::{
    Artwork, ArtworkId, PageRequest, PageState, ReconcileOutcome, SelectionLedger,
};

use super::status::{NavigationBlocked, PageLoadOutcome, PageViewSnapshot, ViewStatus};
use crate::summary::{SelectionCommands, SelectionSummary};

struct ViewState {
    status: ViewStatus,
    page: Option<PageState>,
    rows: Vec<Artwork>,
    visible_selection: Vec<Artwork>,
    ledger: SelectionLedger,
    /// Sequence number of the most recently issued page request.
    latest_request: u64,
}

impl ViewState {
    fn refresh_visible_selection(&mut self) {
        self.visible_selection = self.ledger.visible_subset(&self.rows);
    }
}

/// Controller for the paginated artwork table.
/// 分页作品表格的控制器
///
/// ## Stale responses / 过期响应
///
/// Every `go_to_page` call takes a new sequence number under the state lock
/// before it awaits the data source. When the response arrives it is applied
/// only if no later request has been issued in the meantime; otherwise it is
/// dropped and the call reports [`PageLoadOutcome::Superseded`].
///
/// The state lock is never held across the fetch.
pub struct PageViewController {
    source: Arc<dyn ArtworkPageSourcePort>,
    default_page_size: u32,
    state: Mutex<ViewState>,
}

impl PageViewController {
    pub fn new(source: Arc<dyn ArtworkPageSourcePort>, default_page_size: u32) -> Self {
        Self {
            source,
            default_page_size,
            state: Mutex::new(ViewState {
                status: ViewStatus::Idle,
                page: None,
                rows: Vec::new(),
                visible_selection: Vec::new(),
                ledger: SelectionLedger::new(),
                latest_request: 0,
            }),
        }
    }

    /// Loads `page_number` with `page_size` rows and puts it on screen.
    ///
    /// On failure the previously loaded page, rows and selection stay as they
    /// were and the view enters [`ViewStatus::Error`].
    #[tracing::instrument(name = "usecase.page_view.go_to_page", skip(self))]
    pub async fn go_to_page(&self, page_number: u32, page_size: u32) -> PageLoadOutcome {
        let request = match PageRequest::new(page_number, page_size) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Rejected page request");
                return PageLoadOutcome::Rejected(err);
            }
        };

        let sequence = {
            let mut state = self.state.lock().await;
            state.latest_request += 1;
            state.status = ViewStatus::Loading { page_number };
            state.latest_request
        };

        debug!(sequence, "Fetching page");
        let result = self.source.fetch_page(request).await;

        let mut state = self.state.lock().await;
        if state.latest_request != sequence {
            debug!(
                sequence,
                latest = state.latest_request,
                "Discarding response for superseded page request"
            );
            return PageLoadOutcome::Superseded { page_number };
        }

        match result {
            Ok(page) => {
                if page.current_page != page_number {
                    warn!(
                        reported = page.current_page,
                        "Data source reported a different current page"
                    );
                }

                let page_state = PageState::new(request, page.total_records);
                state.rows = page.artworks;
                state.page = Some(page_state);
                state.refresh_visible_selection();
                state.status = ViewStatus::Idle;

                info!(
                    rows = state.rows.len(),
                    total_records = page_state.total_records,
                    selected_on_page = state.visible_selection.len(),
                    "Page loaded"
                );
                PageLoadOutcome::Applied(page_state)
            }
            Err(err) => {
                error!(error = %err, retryable = err.is_retryable(), "Failed to load page");
                state.status = ViewStatus::Error(err.clone());
                PageLoadOutcome::Failed(err)
            }
        }
    }

    /// Reloads the current page, or the first page if nothing is loaded yet.
    pub async fn reload(&self) -> PageLoadOutcome {
        let (page_number, page_size) = {
            let state = self.state.lock().await;
            match state.page {
                Some(page) => (page.page_number, page.page_size),
                None => (1, self.default_page_size),
            }
        };
        self.go_to_page(page_number, page_size).await
    }

    /// Moves one page forward.
    pub async fn next_page(&self) -> Result<PageLoadOutcome, NavigationBlocked> {
        let page = self
            .current_page()
            .await
            .ok_or(NavigationBlocked::NoPageLoaded)?;
        let next = page
            .page_number
            .checked_add(1)
            .filter(|_| page.has_next())
            .ok_or(NavigationBlocked::LastPage)?;
        Ok(self.go_to_page(next, page.page_size).await)
    }

    /// Moves one page back.
    pub async fn previous_page(&self) -> Result<PageLoadOutcome, NavigationBlocked> {
        let page = self
            .current_page()
            .await
            .ok_or(NavigationBlocked::NoPageLoaded)?;
        if !page.has_previous() {
            return Err(NavigationBlocked::FirstPage);
        }
        Ok(self.go_to_page(page.page_number - 1, page.page_size).await)
    }

    /// Moves the view out of the error state once the error has been shown.
    pub async fn acknowledge_error(&self) {
        let mut state = self.state.lock().await;
        if matches!(state.status, ViewStatus::Error(_)) {
            state.status = ViewStatus::Idle;
        }
    }

    /// Applies the table's "selection changed" event for the visible rows.
    ///
    /// `ids` is the complete set of rows that should be checked on the current
    /// page. Ids that are not on the page are dropped.
    pub async fn apply_visible_selection(&self, ids: &[ArtworkId]) -> ReconcileOutcome {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        let mut selection = Vec::with_capacity(ids.len());
        for id in ids {
            match state.rows.iter().find(|artwork| artwork.id == *id) {
                Some(artwork) => selection.push(artwork.clone()),
                None => warn!(%id, "Ignoring selection of an artwork that is not on this page"),
            }
        }

        let outcome = state.ledger.reconcile(&state.rows, &selection);
        state.refresh_visible_selection();

        debug!(
            added = ?outcome.added,
            removed = ?outcome.removed,
            "Applied visible selection"
        );
        outcome
    }

    /// Flips the checked state of one row on the current page.
    pub async fn toggle(&self, id: ArtworkId) -> ReconcileOutcome {
        let mut ids = self.visible_selected_ids().await;
        if let Some(index) = ids.iter().position(|selected| *selected == id) {
            ids.remove(index);
        } else {
            ids.push(id);
        }
        self.apply_visible_selection(&ids).await
    }

    pub async fn select_all_visible(&self) -> ReconcileOutcome {
        let ids: Vec<ArtworkId> = {
            let state = self.state.lock().await;
            state.rows.iter().map(|artwork| artwork.id).collect()
        };
        self.apply_visible_selection(&ids).await
    }

    pub async fn deselect_all_visible(&self) -> ReconcileOutcome {
        self.apply_visible_selection(&[]).await
    }

    pub async fn snapshot(&self) -> PageViewSnapshot {
        let state = self.state.lock().await;
        PageViewSnapshot {
            status: state.status.clone(),
            page: state.page,
            rows: state.rows.clone(),
            selected_on_page: state.visible_selection.iter().map(|a| a.id).collect(),
            selected_total: state.ledger.len(),
        }
    }

    pub async fn summary(&self) -> SelectionSummary {
        let state = self.state.lock().await;
        SelectionSummary::from_ledger(&state.ledger)
    }

    pub async fn status(&self) -> ViewStatus {
        self.state.lock().await.status.clone()
    }

    /// Page size of the loaded page, or the configured default.
    pub async fn page_size(&self) -> u32 {
        self.current_page()
            .await
            .map(|page| page.page_size)
            .unwrap_or(self.default_page_size)
    }

    async fn current_page(&self) -> Option<PageState> {
        self.state.lock().await.page
    }

    async fn visible_selected_ids(&self) -> Vec<ArtworkId> {
        let state = self.state.lock().await;
        state.visible_selection.iter().map(|a| a.id).collect()
    }
}

#[async_trait]
impl SelectionCommands for PageViewController {
    async fn deselect(&self, id: ArtworkId) -> bool {
        let mut state = self.state.lock().await;
        let removed = state.ledger.deselect(id);
        if removed {
            state.refresh_visible_selection();
            debug!(%id, remaining = state.ledger.len(), "Deselected artwork");
        }
        removed
    }

    async fn clear_all(&self) {
        let mut state = self.state.lock().await;
        state.ledger.clear_all();
        state.refresh_visible_selection();
        info!("Cleared all selections");
    }
}
