// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-run download of the ONNX embedding model.
//!
//! Fetches the all-MiniLM-L6-v2 INT8 quantized model and its tokenizer
//! from HuggingFace into the data directory; subsequent runs load from
//! disk.

use std::path::{Path, PathBuf};

use matricare_core::MatricareError;
use tracing::info;

/// URLs for model files on HuggingFace.
const MODEL_URL: &str =
    "https://huggingface.co/onnx-community/all-MiniLM-L6-v2-ONNX/resolve/main/onnx/model_quantized.onnx";
const TOKENIZER_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main/tokenizer.json";

/// Manages ONNX model download and path resolution.
pub struct ModelManager {
    data_dir: PathBuf,
}

impl ModelManager {
    /// Creates a new ModelManager rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory where model files are stored.
    pub fn model_dir(&self) -> PathBuf {
        self.data_dir.join("models").join("all-MiniLM-L6-v2")
    }

    /// Path to the ONNX model file.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir().join("model.onnx")
    }

    /// Path to the tokenizer.json file.
    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir().join("tokenizer.json")
    }

    /// True if both model and tokenizer files exist.
    pub fn is_model_available(&self) -> bool {
        self.model_path().exists() && self.tokenizer_path().exists()
    }

    /// Ensures the model is downloaded and available, returning the model path.
    pub async fn ensure_model(&self) -> Result<PathBuf, MatricareError> {
        if self.is_model_available() {
            return Ok(self.model_path());
        }

        info!("embedding model not found, downloading from HuggingFace");

        let model_dir = self.model_dir();
        tokio::fs::create_dir_all(&model_dir).await.map_err(|e| {
            MatricareError::Internal(format!("failed to create model directory: {e}"))
        })?;

        for (filename, url) in [("model.onnx", MODEL_URL), ("tokenizer.json", TOKENIZER_URL)] {
            let dest = model_dir.join(filename);
            if dest.exists() {
                continue;
            }

            info!(filename, "downloading model file");
            match download_file(url, &dest).await {
                Ok(size) => info!(filename, size, "downloaded model file"),
                Err(e) => {
                    // Drop partial downloads so the next run retries cleanly.
                    let _ = tokio::fs::remove_file(&dest).await;
                    return Err(e);
                }
            }
        }

        info!(dir = %model_dir.display(), "embedding model ready");
        Ok(self.model_path())
    }
}

/// Download a file from a URL to a local path, returning its size.
async fn download_file(url: &str, dest: &Path) -> Result<usize, MatricareError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| MatricareError::Internal(format!("failed to download {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(MatricareError::Internal(format!(
            "download failed with status {}: {url}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MatricareError::Internal(format!("failed to read response body from {url}: {e}")))?;

    let size = bytes.len();
    tokio::fs::write(dest, &bytes)
        .await
        .map_err(|e| MatricareError::Internal(format!("failed to write {}: {e}", dest.display())))?;

    Ok(size)
}
