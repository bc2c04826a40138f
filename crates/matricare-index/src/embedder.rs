// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ONNX embedding adapter for local inference using all-MiniLM-L6-v2.
//!
//! Produces 384-dimensional L2-normalized embeddings on CPU; no external
//! API calls after the model files are on disk.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use ndarray::Array2;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::TensorRef;

use matricare_core::MatricareError;
use matricare_core::traits::EmbeddingAdapter;
use matricare_core::types::{EmbeddingInput, EmbeddingOutput};

/// Embedding dimensions for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// ONNX-based embedding adapter over all-MiniLM-L6-v2.
///
/// Runs single-threaded CPU inference; the session is not `Send`, so it
/// sits behind a `Mutex`.
pub struct MiniLmEmbedder {
    session: Mutex<Session>,
    tokenizer: tokenizers::Tokenizer,
}

// Safety: the session is only accessed through the Mutex, and tokenizer
// encoding is thread-safe.
unsafe impl Send for MiniLmEmbedder {}
unsafe impl Sync for MiniLmEmbedder {}

impl MiniLmEmbedder {
    /// Loads the embedder from model and tokenizer files on disk.
    pub fn from_files(model_path: &Path, tokenizer_path: &Path) -> Result<Self, MatricareError> {
        let tokenizer = tokenizers::Tokenizer::from_file(tokenizer_path).map_err(|e| {
            MatricareError::Internal(format!(
                "failed to load tokenizer from {}: {e}",
                tokenizer_path.display()
            ))
        })?;

        let session = Session::builder()
            .map_err(|e| MatricareError::Internal(format!("failed to create ONNX session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| MatricareError::Internal(format!("failed to set optimization level: {e}")))?
            .with_intra_threads(1)
            .map_err(|e| MatricareError::Internal(format!("failed to set thread count: {e}")))?
            .commit_from_file(model_path)
            .map_err(|e| {
                MatricareError::Internal(format!(
                    "failed to load ONNX model from {}: {e}",
                    model_path.display()
                ))
            })?;

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }

    /// Embed a single text, returning a normalized 384-dim vector.
    pub fn embed_text(&self, text: &str) -> Result<Vec<f32>, MatricareError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| MatricareError::Internal(format!("tokenization failed: {e}")))?;

        let seq_len = encoding.get_ids().len();
        let to_i64 = |values: &[u32]| values.iter().map(|&v| v as i64).collect::<Vec<i64>>();

        let input_ids = to_i64(encoding.get_ids());
        let attention_mask = to_i64(encoding.get_attention_mask());
        let token_type_ids = to_i64(encoding.get_type_ids());

        let shape_err =
            |name: &str, e: ndarray::ShapeError| MatricareError::Internal(format!("failed to build {name} tensor: {e}"));
        let input_ids_array =
            Array2::from_shape_vec((1, seq_len), input_ids).map_err(|e| shape_err("input_ids", e))?;
        let attention_mask_array = Array2::from_shape_vec((1, seq_len), attention_mask.clone())
            .map_err(|e| shape_err("attention_mask", e))?;
        let token_type_ids_array = Array2::from_shape_vec((1, seq_len), token_type_ids)
            .map_err(|e| shape_err("token_type_ids", e))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| MatricareError::Internal(format!("failed to lock ONNX session: {e}")))?;

        let tensor_err =
            |name: &str, e: ort::Error| MatricareError::Internal(format!("failed to create {name} TensorRef: {e}"));
        let input_ids_tensor = TensorRef::from_array_view(&input_ids_array)
            .map_err(|e| tensor_err("input_ids", e))?;
        let attention_mask_tensor = TensorRef::from_array_view(&attention_mask_array)
            .map_err(|e| tensor_err("attention_mask", e))?;
        let token_type_ids_tensor = TensorRef::from_array_view(&token_type_ids_array)
            .map_err(|e| tensor_err("token_type_ids", e))?;

        let outputs = session
            .run(ort::inputs![
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
                "token_type_ids" => token_type_ids_tensor
            ])
            .map_err(|e| MatricareError::Internal(format!("ONNX inference failed: {e}")))?;

        // Output shape is [1, seq_len, hidden]; pool over real tokens only.
        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| MatricareError::Internal(format!("failed to extract output tensor: {e}")))?;
        let hidden = shape[shape.len() - 1] as usize;

        Ok(pooled_embedding(data, &attention_mask, seq_len, hidden))
    }
}

/// Attention-masked mean pooling followed by L2 normalization.
fn pooled_embedding(
    token_embeddings: &[f32],
    attention_mask: &[i64],
    seq_len: usize,
    hidden: usize,
) -> Vec<f32> {
    let mut pooled = vec![0.0f32; hidden];
    let mut real_tokens = 0.0f32;

    for (i, &mask) in attention_mask.iter().enumerate().take(seq_len) {
        if mask > 0 {
            let row = &token_embeddings[i * hidden..(i + 1) * hidden];
            for (acc, value) in pooled.iter_mut().zip(row) {
                *acc += value;
            }
            real_tokens += 1.0;
        }
    }

    if real_tokens > 0.0 {
        for value in &mut pooled {
            *value /= real_tokens;
        }
    }

    let norm: f32 = pooled.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for value in &mut pooled {
            *value /= norm;
        }
    }

    pooled
}

#[async_trait]
impl EmbeddingAdapter for MiniLmEmbedder {
    async fn embed(&self, input: EmbeddingInput) -> Result<EmbeddingOutput, MatricareError> {
        let mut embeddings = Vec::with_capacity(input.texts.len());
        for text in &input.texts {
            embeddings.push(self.embed_text(text)?);
        }
        Ok(EmbeddingOutput {
            embeddings,
            dimensions: EMBEDDING_DIM,
        })
    }
}
