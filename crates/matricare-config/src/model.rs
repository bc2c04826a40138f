// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Matricare query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Matricare configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values;
/// credential fields default to `None` and are asserted present at startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MatricareConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Text-generation (Gemini) API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Fact-check (claim search) API settings.
    #[serde(default)]
    pub factcheck: FactCheckConfig,

    /// Web-search (Firecrawl) API settings.
    #[serde(default)]
    pub firecrawl: FirecrawlConfig,

    /// Emergency SMS (Twilio) settings.
    #[serde(default)]
    pub twilio: TwilioConfig,

    /// Document index settings.
    #[serde(default)]
    pub index: IndexConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "matricare".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini text-generation API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` fails startup validation.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier used for all generation calls.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

/// Google Fact Check Tools API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FactCheckConfig {
    /// Fact Check Tools API key. `None` fails startup validation.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Firecrawl web-search API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FirecrawlConfig {
    /// Firecrawl API key. `None` fails startup validation.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Maximum number of search results to scrape per scheme lookup.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            search_limit: default_search_limit(),
        }
    }
}

fn default_search_limit() -> usize {
    5
}

/// Twilio SMS configuration for emergency alerts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TwilioConfig {
    /// Twilio account SID. `None` fails startup validation.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Twilio auth token. `None` fails startup validation.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Sender phone number (E.164).
    #[serde(default)]
    pub from_number: Option<String>,

    /// Fixed recipient for emergency alerts (E.164).
    #[serde(default)]
    pub alert_to: Option<String>,
}

/// Document index configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Folder of source documents ingested on first run.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Data directory holding the chunk store and embedding model files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Character budget per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters of overlap carried between adjacent chunks.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Number of nearest chunks retrieved per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            data_dir: default_data_dir(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            top_k: default_top_k(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_chunk_size() -> usize {
    500
}

fn default_chunk_overlap() -> usize {
    50
}

fn default_top_k() -> usize {
    3
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}
