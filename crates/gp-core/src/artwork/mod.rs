//! Artwork catalog records and their selection projection.
//! 作品目录记录及其选择投影

mod record;
mod metadata;

pub use record::Artwork;
pub use metadata::SelectionMetadata;
