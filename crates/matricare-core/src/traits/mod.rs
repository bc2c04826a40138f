// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the external collaborators of the router.
//!
//! Every outbound integration (text generation, claim search, web search,
//! alerting, embeddings, document retrieval) sits behind one of these
//! traits, using `#[async_trait]` for dynamic dispatch compatibility.
//! The router depends only on these seams, so it can be tested against
//! scripted mocks with no network access.

pub mod alert;
pub mod embedding;
pub mod factcheck;
pub mod generation;
pub mod retrieval;
pub mod search;

// Re-export all traits at the traits module level for convenience.
pub use alert::AlertChannel;
pub use embedding::EmbeddingAdapter;
pub use factcheck::FactCheck;
pub use generation::TextGenerator;
pub use retrieval::DocumentRetriever;
pub use search::WebSearch;
