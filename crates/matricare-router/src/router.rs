// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query dispatch with hand-coded fallback chains.
//!
//! One classification call selects a handler; each handler's typed result
//! is composed into a labeled [`Answer`] here, at the outer boundary.
//! Fallback policy:
//! - classification failure or unrecognized intent -> general answer
//! - retriever error or empty index -> general answer for the same question
//! - fact-check and scheme errors -> embedded error text, no fallback
//! - emergency: the urgent-care answer is returned whether or not the
//!   alert dispatch succeeded

use std::sync::Arc;

use matricare_core::types::{Answer, AnswerSource, Intent, NO_DOCUMENTS_MESSAGE};
use matricare_core::traits::{AlertChannel, DocumentRetriever, FactCheck, WebSearch};
use matricare_schemes::SchemeFormatter;
use tracing::{info, warn};

use crate::classifier::IntentClassifier;
use crate::general::GeneralAnswerer;

/// The query router: classifies a question and dispatches to one of the
/// five handlers.
///
/// Holds only adapter seams plus the two prompt-driven helpers; all state
/// is read-only after construction, so one router serves concurrent
/// requests.
pub struct QueryRouter {
    classifier: IntentClassifier,
    general: GeneralAnswerer,
    fact_check: Arc<dyn FactCheck>,
    scheme_search: Arc<dyn WebSearch>,
    scheme_formatter: SchemeFormatter,
    alerts: Arc<dyn AlertChannel>,
    retriever: Arc<dyn DocumentRetriever>,
    scheme_search_limit: usize,
}

impl QueryRouter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: IntentClassifier,
        general: GeneralAnswerer,
        fact_check: Arc<dyn FactCheck>,
        scheme_search: Arc<dyn WebSearch>,
        scheme_formatter: SchemeFormatter,
        alerts: Arc<dyn AlertChannel>,
        retriever: Arc<dyn DocumentRetriever>,
        scheme_search_limit: usize,
    ) -> Self {
        Self {
            classifier,
            general,
            fact_check,
            scheme_search,
            scheme_formatter,
            alerts,
            retriever,
            scheme_search_limit,
        }
    }

    /// Route one question to a final answer.
    ///
    /// Infallible by contract: every failure path composes into a
    /// human-readable answer.
    pub async fn route(&self, question: &str) -> Answer {
        let intent = match self.classifier.classify(question).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "classification failed, falling back to general answer");
                Intent::Llm
            }
        };

        info!(?intent, "dispatching question");

        match intent {
            Intent::Emergency => self.handle_emergency(question).await,
            Intent::FactCheck => self.handle_fact_check(question).await,
            Intent::Schemes => self.handle_schemes(question).await,
            Intent::Rag => self.handle_rag(question).await,
            Intent::Llm => self.handle_general(question).await,
        }
    }

    /// Emergency path: dispatch the alert, then answer with the urgent-care
    /// instruction regardless of dispatch outcome.
    async fn handle_emergency(&self, question: &str) -> Answer {
        let alert_body =
            format!("URGENT: Patient reported '{question}'. Needs immediate medical attention.");

        let dispatch_note = match self.alerts.send_alert(&alert_body).await {
            Ok(confirmation) => confirmation,
            Err(e) => {
                warn!(error = %e, "emergency alert dispatch failed");
                format!("Failed to send SMS alert: {e}")
            }
        };

        Answer::new(AnswerSource::Emergency, dispatch_note)
    }

    /// Fact-check path: handler output (or its error text) under the
    /// fact-check label, no fallback.
    async fn handle_fact_check(&self, question: &str) -> Answer {
        let text = match self.fact_check.check(question).await {
            Ok(result) => result,
            Err(e) => format!("Error: {e}"),
        };
        Answer::new(AnswerSource::FactCheck, text)
    }

    /// Schemes path: search then format. A search error is rendered to text
    /// and still passed through the formatter; a formatter error becomes its
    /// own embedded error string. No fallback.
    async fn handle_schemes(&self, question: &str) -> Answer {
        let raw = match self
            .scheme_search
            .search(question, self.scheme_search_limit)
            .await
        {
            Ok(raw) => raw,
            Err(e) => format!("Web search error: {e}"),
        };

        let text = match self.scheme_formatter.format(&raw).await {
            Ok(formatted) => formatted,
            Err(e) => format!("Error formatting schemes info: {e}"),
        };

        Answer::new(AnswerSource::Schemes, text)
    }

    /// RAG path: on retriever failure or an empty index, the answer is the
    /// general answer for the same question instead of the raw marker.
    async fn handle_rag(&self, question: &str) -> Answer {
        match self.retriever.answer(question).await {
            Ok(text) if text == NO_DOCUMENTS_MESSAGE => {
                info!("no documents indexed, falling back to general answer");
                self.handle_general(question).await
            }
            Ok(text) => Answer::new(AnswerSource::Documents, text),
            Err(e) => {
                warn!(error = %e, "retrieval failed, falling back to general answer");
                self.handle_general(question).await
            }
        }
    }

    /// Default path; its own failures become embedded error text because
    /// there is nothing left to fall back to.
    async fn handle_general(&self, question: &str) -> Answer {
        let text = match self.general.answer(question).await {
            Ok(answer) => answer,
            Err(e) => format!("Error getting answer: {e}"),
        };
        Answer::new(AnswerSource::General, text)
    }
}
