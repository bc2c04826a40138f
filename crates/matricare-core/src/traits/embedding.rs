// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedding adapter trait for vector embedding generation.

use async_trait::async_trait;

use crate::error::MatricareError;
use crate::types::{EmbeddingInput, EmbeddingOutput};

/// Adapter for generating vector embeddings from text.
///
/// Powers the document index: chunks are embedded at ingestion time and
/// queries at retrieval time, always through this seam.
#[async_trait]
pub trait EmbeddingAdapter: Send + Sync {
    /// Generates embeddings for the given batch of texts.
    async fn embed(&self, input: EmbeddingInput) -> Result<EmbeddingOutput, MatricareError>;
}
