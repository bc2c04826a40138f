// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Firecrawl search API.
//!
//! Provides [`FirecrawlClient`] which runs a web search with markdown
//! scraping and returns the raw stringified response for downstream
//! formatting.

use std::time::Duration;

use async_trait::async_trait;
use matricare_core::MatricareError;
use matricare_core::traits::WebSearch;
use serde::Serialize;
use tracing::debug;

/// Base URL for the Firecrawl API.
const API_BASE_URL: &str = "https://api.firecrawl.dev";

/// Request body for the Firecrawl `/v1/search` endpoint.
#[derive(Debug, Clone, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: usize,
    #[serde(rename = "scrapeOptions")]
    scrape_options: ScrapeOptions,
}

/// Scrape options: markdown output only.
#[derive(Debug, Clone, Serialize)]
struct ScrapeOptions {
    formats: Vec<&'static str>,
}

/// HTTP client for Firecrawl search.
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirecrawlClient {
    /// Creates a new Firecrawl client with the given API key.
    pub fn new(api_key: String) -> Result<Self, MatricareError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| MatricareError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl WebSearch for FirecrawlClient {
    /// Runs a search scraping up to `limit` results as markdown and returns
    /// the raw response body as text.
    async fn search(&self, query: &str, limit: usize) -> Result<String, MatricareError> {
        let url = format!("{}/v1/search", self.base_url);
        let body = SearchRequest {
            query,
            limit,
            scrape_options: ScrapeOptions {
                formats: vec!["markdown"],
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MatricareError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, limit, "firecrawl search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatricareError::Search {
                message: format!("API returned {status}: {body}"),
                source: None,
            });
        }

        // The caller wants the raw response; the formatter does the cleanup.
        response.text().await.map_err(|e| MatricareError::Search {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
