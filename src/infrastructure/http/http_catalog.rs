use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::catalog_source::{CatalogError, CatalogSource};
use crate::common::error::BootstrapError;
use crate::common::result::BootstrapResult;
use crate::domain::entities::bootstrap_config::BootstrapConfig;

/// Catalog fetched with a plain HTTP GET
pub struct HttpCatalogClient {
    url: Url,
    http_client: reqwest::Client,
}

impl HttpCatalogClient {
    /// Build a client for `config.catalog_url`
    pub fn new(config: &BootstrapConfig) -> BootstrapResult<Self> {
        let url = Url::parse(&config.catalog_url).map_err(|e| {
            BootstrapError::config_error_with_source(
                format!("Invalid catalog URL: {}", config.catalog_url),
                None,
                e,
            )
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| {
                BootstrapError::network_error_with_source(
                    "Failed to create HTTP client",
                    Some(url.to_string()),
                    e,
                )
            })?;

        Ok(Self { url, http_client })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_listing(&self) -> Result<String, CatalogError> {
        debug!(url = %self.url, "fetching repository catalog");

        let request_failed = |source: reqwest::Error| CatalogError::RequestFailed {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            return Err(CatalogError::UnexpectedStatus {
                url: self.url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(request_failed)
    }
}
