// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document-retrieval trait: the seam between the router and the index.

use async_trait::async_trait;

use crate::error::MatricareError;

/// Answers a question from the ingested document index.
///
/// When no source documents were present at startup, implementations
/// return [`crate::types::NO_DOCUMENTS_MESSAGE`] so the router can apply
/// its fallback chain; retrieval or synthesis failures surface as typed
/// errors with the same fallback effect.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    /// Retrieves relevant chunks and synthesizes an answer.
    async fn answer(&self, query: &str) -> Result<String, MatricareError>;
}
