// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Alert-channel adapter trait for the emergency messaging integration.

use async_trait::async_trait;

use crate::error::MatricareError;

/// Adapter for outbound emergency notifications.
///
/// The recipient and sender are fixed at construction time from
/// configuration; only the message body varies per alert.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Sends an alert and returns a confirmation string embedding the
    /// provider's message identifier.
    async fn send_alert(&self, body: &str) -> Result<String, MatricareError>;
}
