// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fact Check Tools `claims:search` response types.

use matricare_core::Claim;
use serde::Deserialize;

/// Top-level response of the `claims:search` endpoint.
///
/// The API omits the `claims` field entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimsSearchResponse {
    #[serde(default)]
    pub claims: Vec<ApiClaim>,
}

/// One claim as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiClaim {
    /// The claim text under review.
    pub text: Option<String>,

    /// Who made the claim.
    pub claimant: Option<String>,

    /// Reviews published for this claim; the first one is authoritative.
    #[serde(rename = "claimReview", default)]
    pub claim_review: Vec<ApiClaimReview>,
}

impl ApiClaim {
    /// Language tag of the first review, when present.
    pub fn review_language(&self) -> Option<&str> {
        self.claim_review
            .first()
            .and_then(|r| r.language_code.as_deref())
    }

    /// Flatten into the core [`Claim`] domain type using the first review.
    pub fn to_claim(&self) -> Claim {
        let review = self.claim_review.first();
        Claim {
            text: self.text.clone(),
            claimant: self.claimant.clone(),
            publisher: review.and_then(|r| r.publisher.as_ref().and_then(|p| p.name.clone())),
            review_url: review.and_then(|r| r.url.clone()),
            rating: review.and_then(|r| r.textual_rating.clone()),
            language_code: review.and_then(|r| r.language_code.clone()),
        }
    }
}

/// A published review of a claim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiClaimReview {
    /// Publisher of the review.
    pub publisher: Option<ApiPublisher>,

    /// URL of the published review.
    pub url: Option<String>,

    /// Review headline.
    pub title: Option<String>,

    /// Textual rating (e.g. "False", "Mostly true").
    #[serde(rename = "textualRating")]
    pub textual_rating: Option<String>,

    /// BCP-47 language tag of the review.
    #[serde(rename = "languageCode")]
    pub language_code: Option<String>,
}

/// Publisher of a claim review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPublisher {
    pub name: Option<String>,
    pub site: Option<String>,
}
