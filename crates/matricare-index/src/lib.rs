// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document index for the Matricare query router.
//!
//! Covers the full retrieval path: loading source documents from a folder,
//! chunking, ONNX embeddings (model downloaded on first run), a SQLite
//! chunk store with build-or-load startup semantics, and the RAG engine
//! that implements [`DocumentRetriever`] for the router.
//!
//! [`DocumentRetriever`]: matricare_core::traits::DocumentRetriever

pub mod chunker;
pub mod embedder;
pub mod ingest;
pub mod loader;
pub mod model_manager;
pub mod rag;
pub mod store;

pub use chunker::chunk_text;
pub use embedder::{EMBEDDING_DIM, MiniLmEmbedder};
pub use ingest::{IndexStats, ensure_index};
pub use loader::{SourceDocument, load_documents};
pub use model_manager::ModelManager;
pub use rag::RagEngine;
pub use store::ChunkStore;
