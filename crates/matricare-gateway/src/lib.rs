// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Matricare pregnancy assistant.
//!
//! One inbound endpoint: `POST /chat` accepting `{"question": "..."}` and
//! returning `{"answer": "..."}`. Empty questions are rejected with a fixed
//! message before the router runs; everything else yields 200 with a
//! human-readable answer, even under total downstream failure.

pub mod handlers;
pub mod server;

pub use handlers::{ChatRequest, ChatResponse, INVALID_QUESTION_MESSAGE};
pub use server::{GatewayState, ServerConfig, build_app, start_server};
