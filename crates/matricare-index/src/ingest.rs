// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-or-load semantics for the document index.
//!
//! On startup the chunk store is either already populated (load) or built
//! once from the docs folder: load documents, chunk, embed, persist. The
//! store is never mutated after this point.

use std::path::Path;

use matricare_core::MatricareError;
use matricare_core::traits::EmbeddingAdapter;
use matricare_core::types::EmbeddingInput;
use tracing::info;

use crate::chunker::chunk_text;
use crate::loader::load_documents;
use crate::store::{ChunkStore, NewChunk};

/// Outcome of index startup.
#[derive(Debug, Clone, Copy)]
pub struct IndexStats {
    /// Documents ingested (0 when an existing index was loaded).
    pub documents: usize,
    /// Chunks now in the store.
    pub chunks: usize,
    /// True when a populated store was found and ingestion was skipped.
    pub loaded_existing: bool,
}

/// Ensure the chunk store is populated: load if it already has chunks,
/// otherwise ingest the docs folder.
///
/// An empty docs folder is not an error; the retriever reports the
/// no-documents condition at query time.
pub async fn ensure_index(
    store: &ChunkStore,
    embedder: &dyn EmbeddingAdapter,
    docs_dir: &Path,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<IndexStats, MatricareError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(chunks = existing, "loaded existing document index");
        return Ok(IndexStats {
            documents: 0,
            chunks: existing,
            loaded_existing: true,
        });
    }

    let documents = load_documents(docs_dir);
    let mut total_chunks = 0usize;

    for document in &documents {
        let pieces = chunk_text(&document.content, chunk_size, chunk_overlap);
        if pieces.is_empty() {
            continue;
        }

        let output = embedder
            .embed(EmbeddingInput {
                texts: pieces.clone(),
            })
            .await?;

        if output.embeddings.len() != pieces.len() {
            return Err(MatricareError::Internal(format!(
                "embedder returned {} vectors for {} chunks",
                output.embeddings.len(),
                pieces.len()
            )));
        }

        let new_chunks: Vec<NewChunk> = pieces
            .into_iter()
            .zip(output.embeddings)
            .enumerate()
            .map(|(index, (content, embedding))| NewChunk {
                doc_path: document.path.clone(),
                chunk_index: index,
                content,
                embedding,
            })
            .collect();

        total_chunks += new_chunks.len();
        store.insert_chunks(new_chunks).await?;
    }

    info!(
        documents = documents.len(),
        chunks = total_chunks,
        "document index built"
    );

    Ok(IndexStats {
        documents: documents.len(),
        chunks: total_chunks,
        loaded_existing: false,
    })
}
