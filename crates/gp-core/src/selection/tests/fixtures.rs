//! Test fixtures and helper functions for selection tests.

use std::collections::HashSet;

use crate::artwork::Artwork;
use crate::ids::ArtworkId;
use crate::selection::SelectionLedger;

/// Builds a page of artworks with the given ids and predictable titles.
pub fn page(ids: &[u64]) -> Vec<Artwork> {
    ids.iter()
        .map(|id| Artwork::new(*id, format!("Artwork {}", id)).with_artist(format!("Artist {}", id)))
        .collect()
}

/// Picks the rows of `rows` whose id is in `ids`, keeping `ids` order.
pub fn pick(rows: &[Artwork], ids: &[u64]) -> Vec<Artwork> {
    ids.iter()
        .filter_map(|id| rows.iter().find(|artwork| artwork.id.value() == *id).cloned())
        .collect()
}

pub fn id_set(ids: &[u64]) -> HashSet<ArtworkId> {
    ids.iter().copied().map(ArtworkId::new).collect()
}

/// Metadata ids in ledger order.
pub fn metadata_order(ledger: &SelectionLedger) -> Vec<u64> {
    ledger.metadata().iter().map(|m| m.id.value()).collect()
}

/// Asserts that the id set and the metadata sequence agree exactly.
pub fn assert_consistent(ledger: &SelectionLedger) {
    let order = metadata_order(ledger);
    let unique: HashSet<u64> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len(), "metadata contains duplicates: {:?}", order);

    let from_metadata: HashSet<ArtworkId> = order.into_iter().map(ArtworkId::new).collect();
    assert_eq!(&from_metadata, ledger.selected_ids());
    assert_eq!(ledger.len(), ledger.selected_ids().len());
}
