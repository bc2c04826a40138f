// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Retrieval-augmented answering over the chunk store.
//!
//! Embeds the query, scores every stored chunk by cosine similarity,
//! stuffs the top matches into a synthesis prompt, and returns the
//! generated answer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use matricare_core::types::{
    EmbeddingInput, GenerationRequest, NO_DOCUMENTS_MESSAGE, RetrievedChunk,
};
use matricare_core::traits::{DocumentRetriever, EmbeddingAdapter, TextGenerator};
use matricare_core::MatricareError;

use crate::store::{ChunkStore, cosine_similarity};

/// RAG engine implementing [`DocumentRetriever`].
pub struct RagEngine {
    store: Arc<ChunkStore>,
    embedder: Arc<dyn EmbeddingAdapter>,
    generator: Arc<dyn TextGenerator>,
    top_k: usize,
}

impl RagEngine {
    /// Creates a RAG engine over a populated (or empty) chunk store.
    pub fn new(
        store: Arc<ChunkStore>,
        embedder: Arc<dyn EmbeddingAdapter>,
        generator: Arc<dyn TextGenerator>,
        top_k: usize,
    ) -> Self {
        Self {
            store,
            embedder,
            generator,
            top_k,
        }
    }

    /// Retrieve the `top_k` most similar chunks for a query.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedChunk>, MatricareError> {
        let output = self
            .embedder
            .embed(EmbeddingInput {
                texts: vec![query.to_string()],
            })
            .await?;
        let query_embedding = output
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| MatricareError::Internal("embedding returned no vectors".into()))?;

        let mut scored: Vec<(i64, f32)> = self
            .store
            .all_embeddings()
            .await?
            .into_iter()
            .map(|(id, embedding)| (id, cosine_similarity(&query_embedding, &embedding)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.top_k);

        let ids: Vec<i64> = scored.iter().map(|(id, _)| *id).collect();
        let chunks = self.store.get_by_ids(&ids).await?;

        // get_by_ids does not preserve ranking order; restore it.
        let mut retrieved: Vec<RetrievedChunk> = chunks
            .into_iter()
            .map(|chunk| {
                let score = scored
                    .iter()
                    .find(|(id, _)| *id == chunk.id)
                    .map(|(_, s)| *s)
                    .unwrap_or(0.0);
                RetrievedChunk {
                    doc_path: chunk.doc_path,
                    chunk_index: chunk.chunk_index,
                    content: chunk.content,
                    score,
                }
            })
            .collect();
        retrieved.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Ok(retrieved)
    }
}

#[async_trait]
impl DocumentRetriever for RagEngine {
    async fn answer(&self, query: &str) -> Result<String, MatricareError> {
        if self.store.count().await? == 0 {
            return Ok(NO_DOCUMENTS_MESSAGE.to_string());
        }

        let chunks = self.retrieve(query).await?;
        debug!(hits = chunks.len(), "retrieved chunks for synthesis");

        let request = GenerationRequest::from_prompt(synthesis_prompt(query, &chunks));
        let response = self.generator.generate(request).await?;

        Ok(response.text.trim().to_string())
    }
}

/// Build the answer-synthesis prompt from retrieved context.
fn synthesis_prompt(query: &str, chunks: &[RetrievedChunk]) -> String {
    let context = chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");

    format!(
        r#"Use the following pieces of context from pregnancy guidance documents to answer the question at the end. If the context does not contain the answer, say that you don't know rather than guessing.

Context:
{context}

Question: {query}

Answer:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewChunk;
    use matricare_test_utils::{MockEmbedder, MockGenerator};

    async fn populated_store(embedder: &MockEmbedder) -> Arc<ChunkStore> {
        let store = ChunkStore::open_in_memory().await.unwrap();
        let contents = [
            "Iron and folic acid supplements are essential during pregnancy.",
            "Sleeping on the left side improves circulation to the fetus.",
            "Regular light exercise such as walking is encouraged.",
        ];
        let chunks: Vec<NewChunk> = contents
            .iter()
            .enumerate()
            .map(|(i, content)| NewChunk {
                doc_path: "docs/guide.md".to_string(),
                chunk_index: i,
                content: content.to_string(),
                embedding: embedder.embed_text(content),
            })
            .collect();
        store.insert_chunks(chunks).await.unwrap();
        Arc::new(store)
    }

    fn engine(
        store: Arc<ChunkStore>,
        generator: Arc<MockGenerator>,
        top_k: usize,
    ) -> RagEngine {
        RagEngine::new(store, Arc::new(MockEmbedder::new()), generator, top_k)
    }

    #[tokio::test]
    async fn empty_store_returns_no_documents_message() {
        let store = Arc::new(ChunkStore::open_in_memory().await.unwrap());
        let generator = Arc::new(MockGenerator::new());
        let rag = engine(store, generator.clone(), 3);

        let answer = rag.answer("what should I eat?").await.unwrap();
        assert_eq!(answer, NO_DOCUMENTS_MESSAGE);
        // Synthesis must not run when there is nothing to retrieve.
        assert_eq!(generator.call_count().await, 0);
    }

    #[tokio::test]
    async fn retrieve_ranks_matching_chunk_first() {
        let embedder = MockEmbedder::new();
        let store = populated_store(&embedder).await;
        let rag = engine(store, Arc::new(MockGenerator::new()), 2);

        let chunks = rag
            .retrieve("Sleeping on the left side improves circulation to the fetus.")
            .await
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].content.contains("left side"));
        assert!(chunks[0].score >= chunks[1].score);
    }

    #[tokio::test]
    async fn retrieve_respects_top_k() {
        let embedder = MockEmbedder::new();
        let store = populated_store(&embedder).await;
        let rag = engine(store, Arc::new(MockGenerator::new()), 1);

        let chunks = rag.retrieve("anything at all").await.unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[tokio::test]
    async fn answer_stuffs_context_into_prompt() {
        let embedder = MockEmbedder::new();
        let store = populated_store(&embedder).await;
        let generator = Arc::new(MockGenerator::with_replies(vec![
            "Iron and folic acid, as your documents recommend.",
        ]));
        let rag = engine(store, generator.clone(), 3);

        let answer = rag.answer("which supplements matter?").await.unwrap();
        assert_eq!(answer, "Iron and folic acid, as your documents recommend.");

        let prompts = generator.prompts().await;
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("folic acid"));
        assert!(prompts[0].contains("Question: which supplements matter?"));
    }

    #[tokio::test]
    async fn generator_failure_propagates_as_error() {
        let embedder = MockEmbedder::new();
        let store = populated_store(&embedder).await;
        let generator = Arc::new(MockGenerator::new());
        generator.push_error("model offline").await;
        let rag = engine(store, generator, 3);

        let err = rag.answer("anything").await.unwrap_err();
        assert!(err.to_string().contains("model offline"));
    }
}
