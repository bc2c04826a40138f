// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Twilio Messages API.
//!
//! Provides [`TwilioClient`] which dispatches emergency SMS alerts to the
//! configured recipient from the configured sender.

use std::time::Duration;

use async_trait::async_trait;
use matricare_config::model::TwilioConfig;
use matricare_core::MatricareError;
use matricare_core::traits::AlertChannel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Base URL for the Twilio REST API.
const API_BASE_URL: &str = "https://api.twilio.com";

/// Form body for the Messages create endpoint.
#[derive(Debug, Serialize)]
struct MessageForm<'a> {
    #[serde(rename = "To")]
    to: &'a str,
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "Body")]
    body: &'a str,
}

/// Subset of the Messages create response we care about.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Twilio API error body.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: u32,
    message: String,
}

/// HTTP client for Twilio SMS dispatch.
///
/// The sender and recipient numbers are fixed at construction time; only
/// the message body varies per alert.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    alert_to: String,
    base_url: String,
}

impl TwilioClient {
    /// Creates a new Twilio client from the validated config section.
    ///
    /// Credentials are asserted present by config validation before this
    /// is called; missing values still fail cleanly here.
    pub fn new(config: &TwilioConfig) -> Result<Self, MatricareError> {
        let require = |name: &str, value: &Option<String>| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| MatricareError::Config(format!("twilio.{name} must be set")))
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MatricareError::Alert {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            account_sid: require("account_sid", &config.account_sid)?,
            auth_token: require("auth_token", &config.auth_token)?,
            from_number: require("from_number", &config.from_number)?,
            alert_to: require("alert_to", &config.alert_to)?,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl AlertChannel for TwilioClient {
    async fn send_alert(&self, body: &str) -> Result<String, MatricareError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&MessageForm {
                to: &self.alert_to,
                from: &self.from_number,
                body,
            })
            .send()
            .await
            .map_err(|e| MatricareError::Alert {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "twilio message response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("Twilio error {}: {}", api_err.code, api_err.message)
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(MatricareError::Alert {
                message,
                source: None,
            });
        }

        let parsed: MessageResponse = response.json().await.map_err(|e| MatricareError::Alert {
            message: format!("failed to parse message response: {e}"),
            source: Some(Box::new(e)),
        })?;

        info!(sid = parsed.sid, "emergency SMS dispatched");
        Ok(format!("Alert sent via SMS. SID: {}", parsed.sid))
    }
}
