// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the chat API.
//!
//! Handles POST /chat and GET /health.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::server::GatewayState;

/// Fixed reply for empty or whitespace-only questions; returned without
/// invoking the router.
pub const INVALID_QUESTION_MESSAGE: &str = "Please ask a valid question.";

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The free-text question.
    pub question: String,
}

/// Response body for POST /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The labeled, human-readable answer.
    pub answer: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

/// POST /chat
///
/// Routes a question through the query router and returns the labeled
/// answer. Every request yields 200 with a human-readable string; failures
/// are composed into the answer by the router, never surfaced as HTTP
/// errors.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let question = body.question.trim();
    if question.is_empty() {
        return Json(ChatResponse {
            answer: INVALID_QUESTION_MESSAGE.to_string(),
        });
    }

    info!(chars = question.len(), "chat question received");
    let answer = state.router.route(question).await;

    Json(ChatResponse {
        answer: answer.render(),
    })
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
