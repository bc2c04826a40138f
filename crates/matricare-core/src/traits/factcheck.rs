// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fact-check adapter trait for the claim-search integration.

use async_trait::async_trait;

use crate::error::MatricareError;

/// Adapter for fact-check lookups against a claim-search API.
///
/// `check` returns the fully formatted claim summary (or the fixed
/// no-information string); upstream failures surface as typed errors
/// which the router renders under the fact-check label without fallback.
#[async_trait]
pub trait FactCheck: Send + Sync {
    /// Looks up fact-check claims for a query and formats the best match.
    async fn check(&self, query: &str) -> Result<String, MatricareError>;
}
