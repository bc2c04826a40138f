// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock text-generation adapter for deterministic testing.
//!
//! `MockGenerator` implements `TextGenerator` with pre-configured replies,
//! enabling fast tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use matricare_core::MatricareError;
use matricare_core::traits::TextGenerator;
use matricare_core::types::{GenerationRequest, GenerationResponse, TokenUsage};

/// A scripted reply: either generated text or an injected provider failure.
type ScriptedReply = Result<String, String>;

/// A mock text generator that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a default
/// "mock reply" text is returned. Every prompt passed in is recorded for
/// later assertion.
pub struct MockGenerator {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a new mock generator with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock generator pre-loaded with the given text replies.
    pub fn with_replies(replies: Vec<&str>) -> Self {
        let queue = replies.into_iter().map(|r| Ok(r.to_string())).collect();
        Self {
            replies: Arc::new(Mutex::new(queue)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a text reply.
    pub async fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(text.into()));
    }

    /// Queue an injected provider failure.
    pub async fn push_error(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// All prompts this generator has been called with, in order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of generation calls made so far.
    pub async fn call_count(&self) -> usize {
        self.prompts.lock().await.len()
    }

    async fn next_reply(&self) -> ScriptedReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock reply".to_string()))
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, MatricareError> {
        self.prompts.lock().await.push(request.prompt.clone());
        match self.next_reply().await {
            Ok(text) => Ok(GenerationResponse {
                text,
                model: "mock-model".to_string(),
                usage: Some(TokenUsage {
                    input_tokens: 10,
                    output_tokens: 20,
                }),
            }),
            Err(message) => Err(MatricareError::Provider {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::from_prompt(prompt)
    }

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let generator = MockGenerator::new();
        let resp = generator.generate(request("hi")).await.unwrap();
        assert_eq!(resp.text, "mock reply");
    }

    #[tokio::test]
    async fn queued_replies_returned_in_order() {
        let generator = MockGenerator::with_replies(vec!["first", "second"]);
        assert_eq!(generator.generate(request("a")).await.unwrap().text, "first");
        assert_eq!(generator.generate(request("b")).await.unwrap().text, "second");
        // Queue exhausted, falls back to default.
        assert_eq!(
            generator.generate(request("c")).await.unwrap().text,
            "mock reply"
        );
    }

    #[tokio::test]
    async fn injected_error_surfaces_as_provider_error() {
        let generator = MockGenerator::new();
        generator.push_error("model offline").await;
        let err = generator.generate(request("x")).await.unwrap_err();
        assert!(err.to_string().contains("model offline"));
    }

    #[tokio::test]
    async fn records_prompts_in_order() {
        let generator = MockGenerator::with_replies(vec!["one", "two"]);
        generator.generate(request("classify this")).await.unwrap();
        generator.generate(request("answer this")).await.unwrap();

        let prompts = generator.prompts().await;
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("classify this"));
        assert!(prompts[1].contains("answer this"));
        assert_eq!(generator.call_count().await, 2);
    }
}
