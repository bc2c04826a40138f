// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Matricare query router.

use thiserror::Error;

/// The primary error type used across all Matricare adapter traits and core operations.
///
/// Handlers never let these escape past the router boundary: the router
/// converts every variant into a human-readable answer string.
#[derive(Debug, Error)]
pub enum MatricareError {
    /// Configuration errors (invalid TOML, missing required credentials).
    #[error("configuration error: {0}")]
    Config(String),

    /// Text-generation provider errors (API failure, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Claim-search or web-search API errors (non-success status, transport failure).
    #[error("search error: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Messaging API errors (alert dispatch failure).
    #[error("alert error: {message}")]
    Alert {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chunk store errors (database open, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
