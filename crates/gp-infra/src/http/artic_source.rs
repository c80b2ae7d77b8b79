use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, warn};

use gp_core::ports::{ArtworkPageSourcePort, TransportError};
use gp_core::{ArtworkPage, PageRequest};

use super::dto::ApiResponse;

/// Public artworks listing of the Art Institute of Chicago.
pub const DEFAULT_ARTIC_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

#[derive(Debug, Clone)]
pub struct ArticSourceConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Field names passed as `fields=`; empty leaves the parameter out.
    pub fields: Vec<String>,
}

/// Paged artwork source backed by the catalog's REST API.
/// 基于目录 REST API 的分页作品数据源
///
/// Issues `GET {base_url}?page={n}&limit={size}` and maps the response into
/// domain types. Holds no state besides the HTTP client.
pub struct ArticArtworkSource {
    client: reqwest::Client,
    base_url: String,
    fields: Option<String>,
}

impl ArticArtworkSource {
    pub fn new(config: ArticSourceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let fields = if config.fields.is_empty() {
            None
        } else {
            Some(config.fields.join(","))
        };

        Ok(Self {
            client,
            base_url: config.base_url,
            fields,
        })
    }

    fn query(&self, request: PageRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", request.page_number().to_string()),
            ("limit", request.page_size().to_string()),
        ];
        if let Some(fields) = &self.fields {
            query.push(("fields", fields.clone()));
        }
        query
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Connectivity(format!("request timed out: {}", err))
    } else {
        TransportError::Connectivity(err.to_string())
    }
}

#[async_trait]
impl ArtworkPageSourcePort for ArticArtworkSource {
    #[tracing::instrument(
        name = "infra.artic_source.fetch_page",
        skip(self),
        fields(page = request.page_number(), limit = request.page_size())
    )]
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, TransportError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(request))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(map_send_error)?;
        let payload: ApiResponse = serde_json::from_slice(&body)
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let page = ArtworkPage::from(payload);
        debug!(
            rows = page.artworks.len(),
            total_records = page.total_records,
            "Fetched catalog page"
        );
        Ok(page)
    }
}
