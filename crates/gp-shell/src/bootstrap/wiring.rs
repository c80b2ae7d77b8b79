//! Dependency wiring: builds the page view on top of the HTTP source.

use std::sync::Arc;

use anyhow::Context;
use gp_app::PageViewController;
use gp_core::ports::ArtworkPageSourcePort;
use gp_infra::ArticArtworkSource;

use super::ResolvedConfig;

pub fn build_page_view(config: &ResolvedConfig) -> anyhow::Result<PageViewController> {
    let source: Arc<dyn ArtworkPageSourcePort> = Arc::new(
        ArticArtworkSource::new(config.source_config())
            .context("Failed to create catalog source")?,
    );

    tracing::info!(
        base_url = %config.base_url,
        page_size = config.page_size,
        "Wired catalog source"
    );

    Ok(PageViewController::new(source, config.page_size))
}
