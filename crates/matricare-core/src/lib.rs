// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Matricare query router.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Matricare workspace. All external
//! collaborators (text generation, claim search, web search, alerting,
//! embeddings, retrieval) are reached through traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MatricareError;
pub use types::{Answer, AnswerSource, Claim, Intent, NO_DOCUMENTS_MESSAGE};

// Re-export all adapter traits at crate root.
pub use traits::{
    AlertChannel, DocumentRetriever, EmbeddingAdapter, FactCheck, TextGenerator, WebSearch,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = MatricareError::Config("test".into());
        let _provider = MatricareError::Provider {
            message: "test".into(),
            source: None,
        };
        let _search = MatricareError::Search {
            message: "test".into(),
            source: None,
        };
        let _alert = MatricareError::Alert {
            message: "test".into(),
            source: None,
        };
        let _storage = MatricareError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = MatricareError::Internal("test".into());
    }

    #[test]
    fn intent_has_five_variants() {
        let variants = [
            Intent::Emergency,
            Intent::FactCheck,
            Intent::Schemes,
            Intent::Rag,
            Intent::Llm,
        ];
        assert_eq!(variants.len(), 5, "Intent must have exactly 5 variants");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // If any trait module is missing or has a compile error, this
        // test won't compile.
        fn _assert_generator<T: TextGenerator>() {}
        fn _assert_fact_check<T: FactCheck>() {}
        fn _assert_web_search<T: WebSearch>() {}
        fn _assert_alert<T: AlertChannel>() {}
        fn _assert_embedding<T: EmbeddingAdapter>() {}
        fn _assert_retriever<T: DocumentRetriever>() {}
    }
}
