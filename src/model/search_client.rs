//! HTTP client for the podcast search service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::record::{EpisodesResponse, ResultRecord, SearchResponse};
use crate::{log_api_request, log_api_result};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search service returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote side of a search.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError>;

    async fn episodes(&self) -> Result<Vec<ResultRecord>, SearchError>;
}

/// Build the search URL. The query goes in as typed, without escaping.
pub fn search_url(base_url: &str, query: &str, limit: u32) -> String {
    format!(
        "{}/search?q={}&limit={}",
        base_url.trim_end_matches('/'),
        query,
        limit
    )
}

pub fn episodes_url(base_url: &str) -> String {
    format!("{}/episodes", base_url.trim_end_matches('/'))
}

#[derive(Clone)]
pub struct PodcastSearchClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl PodcastSearchClient {
    pub fn new(base_url: String, limit: u32, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
            limit,
        })
    }

    async fn get_body(&self, url: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SearchApi for PodcastSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        let url = search_url(&self.base_url, query, self.limit);
        log_api_request!("search", url = %url);

        let result = async {
            let body = self.get_body(&url).await?;
            let parsed: SearchResponse = serde_json::from_str(&body)?;
            Ok::<_, SearchError>(parsed.results)
        }
        .await;

        log_api_result!("search", result);
        result
    }

    async fn episodes(&self) -> Result<Vec<ResultRecord>, SearchError> {
        let url = episodes_url(&self.base_url);
        log_api_request!("episodes", url = %url);

        let result = async {
            let body = self.get_body(&url).await?;
            let parsed: EpisodesResponse = serde_json::from_str(&body)?;
            Ok::<_, SearchError>(parsed.episodes)
        }
        .await;

        log_api_result!("episodes", result);
        result
    }
}
