//! HTTP adapters.

mod artic_source;
mod dto;

pub use artic_source::{ArticArtworkSource, ArticSourceConfig, DEFAULT_ARTIC_BASE_URL};
