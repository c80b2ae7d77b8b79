//! Infrastructure adapters for Gallery Picker.
//!
//! Implements the ports declared in `gp-core` against real services.

pub mod http;

pub use http::{ArticArtworkSource, ArticSourceConfig, DEFAULT_ARTIC_BASE_URL};
