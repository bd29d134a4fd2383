use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while downloading the repository catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog {url} answered with HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// Source of the whitespace-delimited repository catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog body
    async fn fetch_listing(&self) -> Result<String, CatalogError>;
}
