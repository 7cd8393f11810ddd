use crate::domain::{
    models::SearchResponse,
    search::{SearchBackend, SearchError},
};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Talks to the console's `GET {base}/auth/search/` endpoint.
pub struct HttpSearchClient {
    endpoint: Url,
    token: Option<String>,
    client: Client,
}

impl HttpSearchClient {
    pub fn new(api_base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let endpoint = search_endpoint(api_base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            endpoint,
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    pub fn search_url(&self, query: &str, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &limit.to_string());
        url
    }
}

fn search_endpoint(api_base_url: &str) -> Result<Url> {
    let mut url = Url::parse(api_base_url)
        .with_context(|| format!("Invalid API base URL: {api_base_url}"))?;
    if url.cannot_be_a_base() {
        bail!("API base URL cannot carry a path: {api_base_url}");
    }
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["auth", "search", ""]);
    }
    Ok(url)
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(&self, query: &str, limit: usize) -> Result<SearchResponse, SearchError> {
        let Some(token) = self.token.as_deref() else {
            return Err(SearchError::MissingCredential);
        };

        let url = self.search_url(query, limit);
        tracing::debug!(%url, "sending search request");

        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(SearchError::Decode)
    }
}
