use serde::{Deserialize, Serialize};

use super::Artwork;
use crate::ids::ArtworkId;

/// Lightweight display data kept by the ledger for every selected artwork.
/// 账本为每个已选作品保留的轻量展示数据
///
/// Decoupled from [`Artwork`] so that selections made on other pages do not
/// pin full records in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub id: ArtworkId,
    pub title: String,
    pub artist_display: Option<String>,
}

impl From<&Artwork> for SelectionMetadata {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            artist_display: artwork.artist_display.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_keeps_only_summary_fields() {
        let artwork = Artwork::new(42u64, "The Bedroom")
            .with_artist("Vincent van Gogh")
            .with_origin("France")
            .with_dates(Some(1889), Some(1889));

        let metadata = SelectionMetadata::from(&artwork);

        assert_eq!(metadata.id, ArtworkId::new(42));
        assert_eq!(metadata.title, "The Bedroom");
        assert_eq!(metadata.artist_display.as_deref(), Some("Vincent van Gogh"));
    }
}
