// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini text-generation provider adapter for the Matricare query router.
//!
//! This crate implements [`TextGenerator`] for the Gemini `generateContent`
//! API; every generation call in the service (classification, general
//! answers, scheme formatting, RAG synthesis) goes through it.

pub mod client;
pub mod types;

use async_trait::async_trait;
use matricare_config::MatricareConfig;
use matricare_core::MatricareError;
use matricare_core::traits::TextGenerator;
use matricare_core::types::{GenerationRequest, GenerationResponse, TokenUsage};
use tracing::info;

use crate::client::GeminiClient;
use crate::types::{GenerateContentRequest, GenerationConfig};

/// Gemini provider implementing [`TextGenerator`].
///
/// API key resolution order: config -> `GEMINI_API_KEY` env var -> error.
pub struct GeminiProvider {
    client: GeminiClient,
    default_temperature: f32,
}

impl GeminiProvider {
    /// Creates a new Gemini provider from the given configuration.
    pub fn new(config: &MatricareConfig) -> Result<Self, MatricareError> {
        let api_key = resolve_api_key(&config.gemini.api_key)?;
        let client = GeminiClient::new(api_key, config.gemini.model.clone())?;

        info!(model = config.gemini.model, "Gemini provider initialized");

        Ok(Self {
            client,
            default_temperature: config.gemini.temperature,
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient, default_temperature: f32) -> Self {
        Self {
            client,
            default_temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, MatricareError> {
        let api_request = GenerateContentRequest::from_prompt(
            &request.prompt,
            GenerationConfig {
                temperature: Some(request.temperature.unwrap_or(self.default_temperature)),
                max_output_tokens: Some(request.max_output_tokens),
            },
        );

        let response = self.client.generate_content(&api_request).await?;

        let text = response
            .first_candidate_text()
            .ok_or_else(|| MatricareError::Provider {
                message: "response contained no candidate text".into(),
                source: None,
            })?;

        let model = response
            .model_version
            .unwrap_or_else(|| self.client.model().to_string());

        let usage = response.usage_metadata.map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        Ok(GenerationResponse { text, model, usage })
    }
}

/// Resolve the API key from config or the `GEMINI_API_KEY` environment variable.
fn resolve_api_key(configured: &Option<String>) -> Result<String, MatricareError> {
    if let Some(key) = configured
        && !key.trim().is_empty()
    {
        return Ok(key.clone());
    }
    std::env::var("GEMINI_API_KEY").map_err(|_| {
        MatricareError::Config(
            "Gemini API key not found in config (gemini.api_key) or GEMINI_API_KEY env var".into(),
        )
    })
}
