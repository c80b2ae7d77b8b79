use serde::{Deserialize, Serialize};

use crate::ids::ArtworkId;

/// One catalog record as returned by the paged data source.
///
/// Optional fields may be absent; absence is a displayable "unknown",
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Creates a record with only the required fields set.
    pub fn new(id: impl Into<ArtworkId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn with_artist(mut self, artist_display: impl Into<String>) -> Self {
        self.artist_display = Some(artist_display.into());
        self
    }

    pub fn with_origin(mut self, place_of_origin: impl Into<String>) -> Self {
        self.place_of_origin = Some(place_of_origin.into());
        self
    }

    pub fn with_dates(mut self, date_start: Option<i64>, date_end: Option<i64>) -> Self {
        self.date_start = date_start;
        self.date_end = date_end;
        self
    }
}
