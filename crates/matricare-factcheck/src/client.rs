// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Fact Check Tools `claims:search` API.
//!
//! Provides [`FactCheckClient`] which queries the claim-search endpoint,
//! selects the best claim (English review preferred), and renders the
//! fixed five-line claim summary.

use std::time::Duration;

use async_trait::async_trait;
use matricare_core::MatricareError;
use matricare_core::traits::FactCheck;
use tracing::debug;

use crate::types::{ApiClaim, ClaimsSearchResponse};

/// Base URL for the Fact Check Tools API.
const API_BASE_URL: &str = "https://factchecktools.googleapis.com";

/// Fixed reply when the API returns zero claims for a query.
pub const NO_CLAIMS_MESSAGE: &str = "No fact check information found.";

/// HTTP client for claim-search lookups.
#[derive(Debug, Clone)]
pub struct FactCheckClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FactCheckClient {
    /// Creates a new fact-check client with the given API key.
    pub fn new(api_key: String) -> Result<Self, MatricareError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
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

    /// Runs a `claims:search` query and returns the parsed claim list.
    async fn search_claims(&self, query: &str) -> Result<ClaimsSearchResponse, MatricareError> {
        let url = format!("{}/v1alpha1/claims:search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| MatricareError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "claim search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatricareError::Search {
                message: format!("API error: {} - {body}", status.as_u16()),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| MatricareError::Search {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| MatricareError::Search {
            message: format!("failed to parse claim search response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl FactCheck for FactCheckClient {
    async fn check(&self, query: &str) -> Result<String, MatricareError> {
        let response = self.search_claims(query).await?;

        let Some(claim) = select_claim(&response.claims) else {
            return Ok(NO_CLAIMS_MESSAGE.to_string());
        };

        Ok(format_claim(claim))
    }
}

/// Select the claim to present: the first claim whose review is tagged
/// English, falling back to the first claim unconditionally.
pub fn select_claim(claims: &[ApiClaim]) -> Option<&ApiClaim> {
    claims
        .iter()
        .find(|c| c.review_language() == Some("en"))
        .or_else(|| claims.first())
}

/// Render the fixed five-line claim summary, substituting literal
/// placeholders for missing fields.
pub fn format_claim(claim: &ApiClaim) -> String {
    let text = claim.text.as_deref().unwrap_or("No claim text found");
    let claimant = claim.claimant.as_deref().unwrap_or("Unknown claimant");

    let (publisher, url, rating) = match claim.claim_review.first() {
        Some(review) => (
            review
                .publisher
                .as_ref()
                .and_then(|p| p.name.as_deref())
                .unwrap_or("Unknown publisher"),
            review.url.as_deref().unwrap_or("No URL provided"),
            review.textual_rating.as_deref().unwrap_or("No rating"),
        ),
        None => ("N/A", "N/A", "N/A"),
    };

    format!(
        "Claim: {text}\nClaimant: {claimant}\nPublisher: {publisher}\nSource: {url}\nRating: {rating}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiClaimReview, ApiPublisher};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> FactCheckClient {
        FactCheckClient::new("test-key".into())
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn claim(text: &str, language: Option<&str>) -> ApiClaim {
        ApiClaim {
            text: Some(text.to_string()),
            claimant: Some("Someone".to_string()),
            claim_review: vec![ApiClaimReview {
                publisher: Some(ApiPublisher {
                    name: Some("Reviewer".to_string()),
                    site: None,
                }),
                url: Some("https://example.com/review".to_string()),
                title: None,
                textual_rating: Some("False".to_string()),
                language_code: language.map(str::to_string),
            }],
        }
    }

    #[test]
    fn select_prefers_english_review_over_earlier_claim() {
        let claims = vec![claim("primeiro", Some("pt")), claim("second", Some("en"))];
        let selected = select_claim(&claims).unwrap();
        assert_eq!(selected.text.as_deref(), Some("second"));
    }

    #[test]
    fn select_falls_back_to_first_claim_without_english() {
        let claims = vec![claim("primeiro", Some("pt")), claim("zweite", Some("de"))];
        let selected = select_claim(&claims).unwrap();
        assert_eq!(selected.text.as_deref(), Some("primeiro"));
    }

    #[test]
    fn select_returns_none_for_empty_list() {
        assert!(select_claim(&[]).is_none());
    }

    #[test]
    fn format_renders_five_line_template() {
        let formatted = format_claim(&claim("Papaya is unsafe", Some("en")));
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Claim: Papaya is unsafe");
        assert_eq!(lines[1], "Claimant: Someone");
        assert_eq!(lines[2], "Publisher: Reviewer");
        assert_eq!(lines[3], "Source: https://example.com/review");
        assert_eq!(lines[4], "Rating: False");
    }

    #[test]
    fn format_substitutes_placeholders_for_missing_fields() {
        let bare = ApiClaim {
            text: None,
            claimant: None,
            claim_review: vec![ApiClaimReview::default()],
        };
        let formatted = format_claim(&bare);
        assert!(formatted.contains("Claim: No claim text found"));
        assert!(formatted.contains("Claimant: Unknown claimant"));
        assert!(formatted.contains("Publisher: Unknown publisher"));
        assert!(formatted.contains("Source: No URL provided"));
        assert!(formatted.contains("Rating: No rating"));
    }

    #[test]
    fn format_uses_na_when_no_review_exists() {
        let unreviewed = ApiClaim {
            text: Some("Unreviewed claim".into()),
            claimant: None,
            claim_review: vec![],
        };
        let formatted = format_claim(&unreviewed);
        assert!(formatted.contains("Publisher: N/A"));
        assert!(formatted.contains("Source: N/A"));
        assert!(formatted.contains("Rating: N/A"));
    }

    #[tokio::test]
    async fn check_returns_fixed_string_on_zero_claims() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1alpha1/claims:search"))
            .and(query_param("query", "Is papaya safe during pregnancy?"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client
            .check("Is papaya safe during pregnancy?")
            .await
            .unwrap();
        assert_eq!(result, NO_CLAIMS_MESSAGE);
    }

    #[tokio::test]
    async fn check_selects_english_claim_from_mixed_list() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "claims": [
                {
                    "text": "Le papayer est dangereux",
                    "claimant": "Forum",
                    "claimReview": [{"languageCode": "fr", "textualRating": "Faux"}]
                },
                {
                    "text": "Papaya is dangerous in pregnancy",
                    "claimant": "Blog",
                    "claimReview": [{
                        "publisher": {"name": "Health Desk"},
                        "url": "https://healthdesk.example/papaya",
                        "textualRating": "Mostly false",
                        "languageCode": "en"
                    }]
                }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/v1alpha1/claims:search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.check("papaya").await.unwrap();
        assert!(result.contains("Claim: Papaya is dangerous in pregnancy"));
        assert!(result.contains("Publisher: Health Desk"));
        assert!(result.contains("Rating: Mostly false"));
    }

    #[tokio::test]
    async fn check_embeds_status_and_body_on_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1alpha1/claims:search"))
            .respond_with(ResponseTemplate::new(403).set_body_string("key not authorized"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.check("anything").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("API error: 403"), "got: {message}");
        assert!(message.contains("key not authorized"), "got: {message}");
    }
}
