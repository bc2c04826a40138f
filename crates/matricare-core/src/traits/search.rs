// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web-search adapter trait for the scheme-lookup integration.

use async_trait::async_trait;

use crate::error::MatricareError;

/// Adapter for web-search/scrape APIs.
///
/// Returns the raw stringified search response; normalization into a
/// readable scheme list is a separate formatting step.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Runs a search limited to `limit` results and returns raw text.
    async fn search(&self, query: &str, limit: usize) -> Result<String, MatricareError>;
}
