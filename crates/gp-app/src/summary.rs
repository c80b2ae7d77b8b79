//! Selection summary projection and its command interface.
//! 选择摘要投影及其命令接口
//!
//! The summary has no state of its own: it is a copy of the ledger's metadata
//! in ledger order, and every mutation goes back through [`SelectionCommands`].

use async_trait::async_trait;
use gp_core::{ArtworkId, SelectionLedger, SelectionMetadata};

/// Narrow command set the summary view may issue against the ledger owner.
#[async_trait]
pub trait SelectionCommands: Send + Sync {
    /// Deselect one artwork. Returns `false` when it was not selected.
    async fn deselect(&self, id: ArtworkId) -> bool;

    /// Drop every selection on every page.
    async fn clear_all(&self);
}

/// Read-only list of everything currently selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub items: Vec<SelectionMetadata>,
}

impl SelectionSummary {
    pub fn from_ledger(ledger: &SelectionLedger) -> Self {
        Self {
            items: ledger.metadata().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn heading(&self) -> String {
        format!("Selected Artworks ({})", self.items.len())
    }
}

/// User intent raised from the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    Remove(ArtworkId),
    ClearAll,
}

impl SummaryAction {
    /// Runs the action. Returns `false` when `Remove` named an artwork that
    /// was not selected.
    pub async fn dispatch(self, commands: &dyn SelectionCommands) -> bool {
        match self {
            SummaryAction::Remove(id) => {
                let removed = commands.deselect(id).await;
                if !removed {
                    tracing::debug!(%id, "Remove requested for an artwork that is not selected");
                }
                removed
            }
            SummaryAction::ClearAll => {
                commands.clear_all().await;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gp_core::Artwork;
    use mockall::predicate::eq;

    mockall::mock! {
        pub Commands {}

        #[async_trait]
        impl SelectionCommands for Commands {
            async fn deselect(&self, id: ArtworkId) -> bool;
            async fn clear_all(&self);
        }
    }

    #[test]
    fn test_summary_follows_ledger_order() {
        let mut ledger = SelectionLedger::new();
        let rows = vec![
            Artwork::new(3u64, "Three"),
            Artwork::new(1u64, "One").with_artist("Someone"),
        ];
        ledger.reconcile(&rows, &rows);

        let summary = SelectionSummary::from_ledger(&ledger);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.items[0].id, ArtworkId::new(3));
        assert_eq!(summary.items[1].artist_display.as_deref(), Some("Someone"));
        assert_eq!(summary.heading(), "Selected Artworks (2)");
    }

    #[test]
    fn test_empty_ledger_gives_empty_summary() {
        let summary = SelectionSummary::from_ledger(&SelectionLedger::new());
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn test_remove_action_dispatches_deselect() {
        let mut commands = MockCommands::new();
        commands
            .expect_deselect()
            .with(eq(ArtworkId::new(8)))
            .times(1)
            .returning(|_| true);
        commands.expect_clear_all().never();

        assert!(SummaryAction::Remove(ArtworkId::new(8)).dispatch(&commands).await);
    }

    #[tokio::test]
    async fn test_remove_action_reports_unknown_id() {
        let mut commands = MockCommands::new();
        commands.expect_deselect().times(1).returning(|_| false);

        assert!(!SummaryAction::Remove(ArtworkId::new(8)).dispatch(&commands).await);
    }

    #[tokio::test]
    async fn test_clear_all_action_dispatches_clear_all() {
        let mut commands = MockCommands::new();
        commands.expect_clear_all().times(1).return_const(());
        commands.expect_deselect().never();

        assert!(SummaryAction::ClearAll.dispatch(&commands).await);
    }
}
