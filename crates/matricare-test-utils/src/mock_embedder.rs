// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic embedding adapter for index tests.
//!
//! Maps each text to a small L2-normalized vector derived from character
//! histograms. Similar texts land close together, which is all the store
//! and retriever tests need; no model files are involved.

use async_trait::async_trait;

use matricare_core::MatricareError;
use matricare_core::traits::EmbeddingAdapter;
use matricare_core::types::{EmbeddingInput, EmbeddingOutput};

/// Dimension of the mock embedding space.
pub const MOCK_EMBEDDING_DIM: usize = 16;

/// Deterministic, dependency-free embedding adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockEmbedder;

impl MockEmbedder {
    pub fn new() -> Self {
        Self
    }

    /// Embed one text into a normalized `MOCK_EMBEDDING_DIM`-dim vector.
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; MOCK_EMBEDDING_DIM];
        for (i, ch) in text.to_lowercase().chars().enumerate() {
            let bucket = (ch as usize + i / 7) % MOCK_EMBEDDING_DIM;
            vec[bucket] += 1.0;
        }
        let norm: f32 = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

#[async_trait]
impl EmbeddingAdapter for MockEmbedder {
    async fn embed(&self, input: EmbeddingInput) -> Result<EmbeddingOutput, MatricareError> {
        let embeddings = input.texts.iter().map(|t| self.embed_text(t)).collect();
        Ok(EmbeddingOutput {
            embeddings,
            dimensions: MOCK_EMBEDDING_DIM,
        })
    }
}
