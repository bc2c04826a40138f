// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted mocks for the handler-facing adapter traits.
//!
//! All four mocks share the same shape: a FIFO queue of `Ok(text)` /
//! `Err(message)` replies plus a call recorder, so tests can assert both
//! what the router returned and which collaborators it touched.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use matricare_core::MatricareError;
use matricare_core::traits::{AlertChannel, DocumentRetriever, FactCheck, WebSearch};

type ScriptedReply = Result<String, String>;

#[derive(Default)]
struct Script {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<String>>,
}

impl Script {
    async fn push(&self, reply: ScriptedReply) {
        self.replies.lock().await.push_back(reply);
    }

    async fn next(&self, call: String, default: &str) -> ScriptedReply {
        self.calls.lock().await.push(call);
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(default.to_string()))
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

/// Mock fact-check handler. Failures map to `MatricareError::Search`.
#[derive(Default)]
pub struct MockFactCheck {
    script: Arc<Script>,
}

impl MockFactCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_result(&self, text: impl Into<String>) {
        self.script.push(Ok(text.into())).await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.script.push(Err(message.into())).await;
    }

    /// Queries this mock was asked to check, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.script.calls().await
    }
}

#[async_trait]
impl FactCheck for MockFactCheck {
    async fn check(&self, query: &str) -> Result<String, MatricareError> {
        self.script
            .next(query.to_string(), "mock fact check")
            .await
            .map_err(|message| MatricareError::Search {
                message,
                source: None,
            })
    }
}

/// Mock web search. Records `query|limit` per call; failures map to
/// `MatricareError::Search`.
#[derive(Default)]
pub struct MockWebSearch {
    script: Arc<Script>,
}

impl MockWebSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_result(&self, text: impl Into<String>) {
        self.script.push(Ok(text.into())).await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.script.push(Err(message.into())).await;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.script.calls().await
    }
}

#[async_trait]
impl WebSearch for MockWebSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<String, MatricareError> {
        self.script
            .next(format!("{query}|{limit}"), "mock search results")
            .await
            .map_err(|message| MatricareError::Search {
                message,
                source: None,
            })
    }
}

/// Mock alert channel. Records every body sent; failures map to
/// `MatricareError::Alert`.
#[derive(Default)]
pub struct MockAlertChannel {
    script: Arc<Script>,
}

impl MockAlertChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_result(&self, text: impl Into<String>) {
        self.script.push(Ok(text.into())).await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.script.push(Err(message.into())).await;
    }

    /// Message bodies dispatched through this mock, in order.
    pub async fn sent_bodies(&self) -> Vec<String> {
        self.script.calls().await
    }
}

#[async_trait]
impl AlertChannel for MockAlertChannel {
    async fn send_alert(&self, body: &str) -> Result<String, MatricareError> {
        self.script
            .next(body.to_string(), "Alert sent via SMS. SID: SMmock")
            .await
            .map_err(|message| MatricareError::Alert {
                message,
                source: None,
            })
    }
}

/// Mock document retriever. Failures map to `MatricareError::Internal`.
#[derive(Default)]
pub struct MockRetriever {
    script: Arc<Script>,
}

impl MockRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_answer(&self, text: impl Into<String>) {
        self.script.push(Ok(text.into())).await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.script.push(Err(message.into())).await;
    }

    pub async fn queries(&self) -> Vec<String> {
        self.script.calls().await
    }
}

#[async_trait]
impl DocumentRetriever for MockRetriever {
    async fn answer(&self, query: &str) -> Result<String, MatricareError> {
        self.script
            .next(query.to_string(), "mock document answer")
            .await
            .map_err(MatricareError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fact_check_scripts_in_order() {
        let mock = MockFactCheck::new();
        mock.push_result("claim summary").await;
        mock.push_error("API error: 500 - down").await;

        assert_eq!(mock.check("papaya").await.unwrap(), "claim summary");
        let err = mock.check("papaya again").await.unwrap_err();
        assert!(err.to_string().contains("API error: 500"));
        assert_eq!(mock.queries().await.len(), 2);
    }

    #[tokio::test]
    async fn web_search_records_limit() {
        let mock = MockWebSearch::new();
        mock.push_result("raw text").await;
        mock.search("maternity benefits", 5).await.unwrap();
        assert_eq!(mock.calls().await, vec!["maternity benefits|5"]);
    }

    #[tokio::test]
    async fn alert_channel_records_bodies() {
        let mock = MockAlertChannel::new();
        mock.send_alert("URGENT: chest pain").await.unwrap();
        let bodies = mock.sent_bodies().await;
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].contains("chest pain"));
    }

    #[tokio::test]
    async fn retriever_defaults_when_unscripted() {
        let mock = MockRetriever::new();
        assert_eq!(mock.answer("q").await.unwrap(), "mock document answer");
    }
}
