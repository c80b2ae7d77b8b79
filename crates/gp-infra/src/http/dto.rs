//! Wire format of the Art Institute of Chicago artworks listing.

use serde::Deserialize;

use gp_core::{Artwork, ArtworkId, ArtworkPage};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub pagination: PaginationInfo,
    #[serde(default)]
    pub data: Vec<ApiArtwork>,
}

/// Only the fields the page view needs; `limit`, `offset` and
/// `total_pages` are derivable from the request and `total`.
#[derive(Debug, Deserialize)]
pub(crate) struct PaginationInfo {
    pub total: u64,
    pub current_page: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArtwork {
    pub id: u64,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl From<ApiArtwork> for Artwork {
    fn from(item: ApiArtwork) -> Self {
        Artwork {
            id: ArtworkId::new(item.id),
            title: item.title.unwrap_or_default(),
            place_of_origin: item.place_of_origin,
            artist_display: item.artist_display,
            inscriptions: item.inscriptions,
            date_start: item.date_start,
            date_end: item.date_end,
        }
    }
}

impl From<ApiResponse> for ArtworkPage {
    fn from(response: ApiResponse) -> Self {
        ArtworkPage {
            artworks: response.data.into_iter().map(Artwork::from).collect(),
            total_records: response.pagination.total,
            current_page: response.pagination.current_page,
        }
    }
}
