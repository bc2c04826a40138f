// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-generation adapter trait for LLM provider integrations.

use async_trait::async_trait;

use crate::error::MatricareError;
use crate::types::{GenerationRequest, GenerationResponse};

/// Adapter for text-generation APIs.
///
/// Backs intent classification, general advisory answers, scheme
/// formatting, and RAG answer synthesis. Implementations handle
/// authentication, transport, and provider-specific wire formats.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a single-shot generation request and returns the full response.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, MatricareError>;
}
