//! # gp-core
//!
//! Core domain models and selection logic for Gallery Picker.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod artwork;
pub mod config;
pub mod ids;
pub mod page;
pub mod ports;
pub mod selection;

// Re-export commonly used types at the crate root
pub use artwork::{Artwork, SelectionMetadata};
pub use config::AppConfig;
pub use ids::ArtworkId;
pub use page::{ArtworkPage, PageRequest, PageRequestError, PageState, DEFAULT_PAGE_SIZE};
pub use selection::{ReconcileOutcome, SelectionLedger};
