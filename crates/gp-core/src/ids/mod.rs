//! ID type wrappers for type safety.

pub mod artwork_id;

pub use artwork_id::ArtworkId;
