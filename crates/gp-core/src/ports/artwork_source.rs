use async_trait::async_trait;

use super::TransportError;
use crate::page::{ArtworkPage, PageRequest};

/// Stateless paged access to the artwork catalog.
/// 无状态的分页作品目录访问
#[async_trait]
pub trait ArtworkPageSourcePort: Send + Sync {
    /// Fetch one page of artworks plus the catalog's total record count.
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, TransportError>;
}

#[cfg(any(test, feature = "testing"))]
mockall::mock! {
    pub ArtworkPageSource {}

    #[async_trait]
    impl ArtworkPageSourcePort for ArtworkPageSource {
        async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, TransportError>;
    }
}
