// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Matricare workspace.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Fixed reply used by the document retriever when no source documents
/// were available at startup. The router treats it as a fallback trigger.
pub const NO_DOCUMENTS_MESSAGE: &str = "No pregnancy documents available.";

/// One of the five routing intents a question can classify into.
///
/// Produced exactly once per request by the classifier and consumed by the
/// dispatch step; never persisted. The `Display` form is the token the
/// classification prompt asks the model to reply with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Severe symptoms; routes to the alert dispatcher.
    Emergency,
    /// Safety or truth claims; routes to the fact-check client.
    FactCheck,
    /// Benefits, leave, or financial-aid wording; routes to scheme search.
    Schemes,
    /// Document-answerable questions; routes to retrieval.
    Rag,
    /// Everything else, including unrecognized classifier output.
    Llm,
}

/// Which handler produced an answer. Carries the fixed user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
    Emergency,
    FactCheck,
    Schemes,
    Documents,
    General,
}

impl AnswerSource {
    /// The fixed label prefixed to answers from this source.
    pub fn label(self) -> &'static str {
        match self {
            AnswerSource::Emergency => "EMERGENCY DETECTED!",
            AnswerSource::FactCheck => "Fact Check Result:",
            AnswerSource::Schemes => "Government Schemes Info:",
            AnswerSource::Documents => "From Pregnancy Documents:",
            AnswerSource::General => "General Answer:",
        }
    }
}

/// The final answer for one request: handler output plus its source tag.
///
/// Handlers hand the router plain text (or typed errors); the labeled
/// display string is produced only here, at the outer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Which handler produced the text.
    pub source: AnswerSource,
    /// Unlabeled answer body.
    pub text: String,
}

impl Answer {
    pub fn new(source: AnswerSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    /// Render the labeled, user-facing answer string.
    ///
    /// The emergency form always ends with the urgent-care instruction,
    /// independent of whether the alert dispatch succeeded.
    pub fn render(&self) -> String {
        match self.source {
            AnswerSource::Emergency => format!(
                "{} {}\n\nPlease seek immediate medical attention!",
                self.source.label(),
                self.text
            ),
            _ => format!("{}\n{}", self.source.label(), self.text),
        }
    }
}

/// A fact-check claim extracted from the claim-search API.
///
/// Ephemeral: lives only for the duration of a single request. Missing
/// fields are substituted with literal placeholders at format time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The claim text under review.
    pub text: Option<String>,
    /// Who made the claim.
    pub claimant: Option<String>,
    /// Name of the publisher that reviewed the claim.
    pub publisher: Option<String>,
    /// URL of the published review.
    pub review_url: Option<String>,
    /// Textual rating given by the reviewer (e.g. "False", "Mostly true").
    pub rating: Option<String>,
    /// Language tag of the review (e.g. "en").
    pub language_code: Option<String>,
}

/// A request to a text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The full prompt text.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
    /// Sampling temperature; `None` uses the provider default.
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Convenience constructor with the workspace-default output budget.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens: 1024,
            temperature: None,
        }
    }
}

/// A completed response from a text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text.
    pub text: String,
    /// Model that produced the response.
    pub model: String,
    /// Token usage, when the provider reports it.
    pub usage: Option<TokenUsage>,
}

/// Token usage reported by a generation provider.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A chunk retrieved from the vector index, with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// Source document path the chunk was cut from.
    pub doc_path: String,
    /// Position of the chunk within its document.
    pub chunk_index: usize,
    /// Chunk text.
    pub content: String,
    /// Cosine similarity against the query embedding.
    pub score: f32,
}

/// Input to an embedding adapter: a batch of texts.
#[derive(Debug, Clone)]
pub struct EmbeddingInput {
    pub texts: Vec<String>,
}

/// Output of an embedding adapter: one vector per input text.
#[derive(Debug, Clone)]
pub struct EmbeddingOutput {
    pub embeddings: Vec<Vec<f32>>,
    pub dimensions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_display_matches_classifier_tokens() {
        assert_eq!(Intent::Emergency.to_string(), "EMERGENCY");
        assert_eq!(Intent::FactCheck.to_string(), "FACT_CHECK");
        assert_eq!(Intent::Schemes.to_string(), "SCHEMES");
        assert_eq!(Intent::Rag.to_string(), "RAG");
        assert_eq!(Intent::Llm.to_string(), "LLM");
    }

    #[test]
    fn answer_render_prefixes_label() {
        let answer = Answer::new(AnswerSource::FactCheck, "Claim: papaya\nRating: False");
        let rendered = answer.render();
        assert!(rendered.starts_with("Fact Check Result:\n"));
        assert!(rendered.contains("Rating: False"));
    }

    #[test]
    fn emergency_render_always_includes_urgent_care_text() {
        let ok = Answer::new(AnswerSource::Emergency, "Alert sent via SMS. SID: SM123");
        let failed = Answer::new(AnswerSource::Emergency, "Failed to send SMS alert: timeout");

        for answer in [ok, failed] {
            let rendered = answer.render();
            assert!(rendered.contains("EMERGENCY"));
            assert!(rendered.contains("Please seek immediate medical attention!"));
        }
    }

    #[test]
    fn claim_defaults_to_all_missing() {
        let claim = Claim::default();
        assert!(claim.text.is_none());
        assert!(claim.rating.is_none());
        assert!(claim.language_code.is_none());
    }

    #[test]
    fn generation_request_from_prompt_defaults() {
        let req = GenerationRequest::from_prompt("hello");
        assert_eq!(req.prompt, "hello");
        assert_eq!(req.max_output_tokens, 1024);
        assert!(req.temperature.is_none());
    }

    #[test]
    fn answer_serializes_roundtrip() {
        let answer = Answer::new(AnswerSource::Documents, "chunked wisdom");
        let json = serde_json::to_string(&answer).unwrap();
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answer);
    }
}
