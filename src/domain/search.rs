use crate::domain::models::SearchResponse;
use async_trait::async_trait;
use thiserror::Error;

/// Every variant ends the same way for the user (empty lists, closed
/// overlay); the distinction only matters for the log.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no access token configured; search skipped")]
    MissingCredential,
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Query the global search endpoint for at most `limit` results.
    async fn search(&self, query: &str, limit: usize) -> Result<SearchResponse, SearchError>;
}
