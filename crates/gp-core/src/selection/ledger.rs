use std::collections::HashSet;

use crate::artwork::{Artwork, SelectionMetadata};
use crate::ids::ArtworkId;

/// Ids added and removed by one [`SelectionLedger::reconcile`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub added: Vec<ArtworkId>,
    pub removed: Vec<ArtworkId>,
}

impl ReconcileOutcome {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Selected artwork ids plus their display metadata, across all pages.
/// 所有页面上已选作品的 id 及其展示元数据
///
/// ## Invariant / 不变量
///
/// The ids in `selected_metadata` equal `selected_ids` exactly, without
/// duplicates, in first-selected-first order. Only [`Self::insert`] and
/// [`Self::remove`] touch the two collections, and they always update both.
#[derive(Debug, Clone, Default)]
pub struct SelectionLedger {
    selected_ids: HashSet<ArtworkId>,
    selected_metadata: Vec<SelectionMetadata>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the selection the user just made on the visible page.
    ///
    /// `visible` must be the complete row list of the current page and every
    /// entry of `new_visible_selection` must be one of those rows. Rows of
    /// `visible` missing from `new_visible_selection` are deselected first,
    /// then newly chosen rows are appended in the order given. Rows that were
    /// already selected keep their position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics when `new_visible_selection` contains an id
    /// that is not in `visible`. Release builds ignore such entries.
    pub fn reconcile(
        &mut self,
        visible: &[Artwork],
        new_visible_selection: &[Artwork],
    ) -> ReconcileOutcome {
        let visible_ids: HashSet<ArtworkId> = visible.iter().map(|artwork| artwork.id).collect();

        debug_assert!(
            new_visible_selection
                .iter()
                .all(|artwork| visible_ids.contains(&artwork.id)),
            "reconcile: selection contains ids that are not on the visible page"
        );

        let (chosen, foreign): (Vec<&Artwork>, Vec<&Artwork>) = new_visible_selection
            .iter()
            .partition(|artwork| visible_ids.contains(&artwork.id));

        if !foreign.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                ignored = ?foreign.iter().map(|a| a.id).collect::<Vec<_>>(),
                "Ignoring selected ids that are not on the visible page"
            );
        }

        let chosen_ids: HashSet<ArtworkId> = chosen.iter().map(|artwork| artwork.id).collect();
        let mut outcome = ReconcileOutcome::default();

        // Phase 1: deselect visible rows that are no longer chosen.
        for artwork in visible {
            if !chosen_ids.contains(&artwork.id) && self.remove(artwork.id) {
                outcome.removed.push(artwork.id);
            }
        }

        // Phase 2: append newly chosen rows in the order given.
        for artwork in chosen {
            if self.insert(artwork) {
                outcome.added.push(artwork.id);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            added = outcome.added.len(),
            removed = outcome.removed.len(),
            total = self.len(),
            "Reconciled page selection"
        );

        outcome
    }

    /// Removes `id` from the selection. Returns `false` if it was not selected.
    pub fn deselect(&mut self, id: ArtworkId) -> bool {
        self.remove(id)
    }

    pub fn clear_all(&mut self) {
        self.selected_ids.clear();
        self.selected_metadata.clear();
    }

    /// Returns the entities of `entities` that are selected, in input order.
    pub fn visible_subset(&self, entities: &[Artwork]) -> Vec<Artwork> {
        entities
            .iter()
            .filter(|artwork| self.selected_ids.contains(&artwork.id))
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn selected_ids(&self) -> &HashSet<ArtworkId> {
        &self.selected_ids
    }

    /// Metadata in first-selected-first order.
    pub fn metadata(&self) -> &[SelectionMetadata] {
        &self.selected_metadata
    }

    pub fn len(&self) -> usize {
        self.selected_metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_metadata.is_empty()
    }

    fn insert(&mut self, artwork: &Artwork) -> bool {
        if !self.selected_ids.insert(artwork.id) {
            return false;
        }
        self.selected_metadata.push(SelectionMetadata::from(artwork));
        true
    }

    fn remove(&mut self, id: ArtworkId) -> bool {
        if !self.selected_ids.remove(&id) {
            return false;
        }
        if let Some(index) = self.selected_metadata.iter().position(|m| m.id == id) {
            self.selected_metadata.remove(index);
        }
        true
    }
}
