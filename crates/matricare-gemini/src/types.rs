// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` API request/response types.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this service.
    pub contents: Vec<Content>,

    /// Generation parameters.
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds a single-turn request from a prompt.
    pub fn from_prompt(prompt: &str, config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(config),
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role ("user" or "model"); omitted for single-turn requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts; text-only for this service.
    pub parts: Vec<Part>,
}

/// A text part within a content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation parameters for a request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate.
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

// --- Response types ---

/// A full response from the `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; the first one carries the answer.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token usage statistics.
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,

    /// Model version that served the request.
    #[serde(rename = "modelVersion")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() { None } else { Some(text) }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content; absent when the candidate was blocked.
    pub content: Option<Content>,

    /// Reason the generation stopped (e.g. "STOP", "MAX_TOKENS").
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: u32,

    /// Tokens generated across candidates.
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: u32,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric error code.
    #[serde(default)]
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Symbolic status (e.g. "RESOURCE_EXHAUSTED").
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_request_from_prompt() {
        let req = GenerateContentRequest::from_prompt(
            "Is papaya safe during pregnancy?",
            GenerationConfig {
                temperature: Some(0.3),
                max_output_tokens: Some(1024),
            },
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Is papaya safe during pregnancy?"
        );
        assert_eq!(json["generationConfig"]["temperature"], 0.3);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn serialize_request_omits_unset_config_fields() {
        let req = GenerateContentRequest::from_prompt("hi", GenerationConfig::default());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["generationConfig"], serde_json::json!({}));
    }

    #[test]
    fn deserialize_response_and_extract_text() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "RAG"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 1},
            "modelVersion": "gemini-2.5-flash"
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_candidate_text().as_deref(), Some("RAG"));
        assert_eq!(resp.usage_metadata.as_ref().unwrap().prompt_token_count, 42);
        assert_eq!(resp.model_version.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn multi_part_candidate_text_is_concatenated() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "world"}]}
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_candidate_text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let resp: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(resp.first_candidate_text().is_none());
    }

    #[test]
    fn blocked_candidate_without_content_yields_no_text() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(resp.first_candidate_text().is_none());
    }

    #[test]
    fn deserialize_api_error() {
        let json = r#"{
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        }"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code, 429);
        assert_eq!(err.error.status, "RESOURCE_EXHAUSTED");
        assert_eq!(err.error.message, "Quota exceeded");
    }
}
