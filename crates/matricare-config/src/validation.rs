// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Asserts that the external credentials the handlers depend on are present
//! and that numeric settings are internally consistent. Collects every
//! problem instead of failing fast.

use miette::Diagnostic;
use thiserror::Error;

use crate::model::MatricareConfig;

/// A configuration problem surfaced at startup.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Figment failed to parse or merge the configuration sources.
    #[error("failed to load configuration: {0}")]
    #[diagnostic(
        code(matricare::config::parse),
        help("check matricare.toml and MATRICARE_* environment variables against the documented sections")
    )]
    Parse(#[from] Box<figment::Error>),

    /// A semantic constraint on a parsed value failed.
    #[error("{message}")]
    #[diagnostic(code(matricare::config::validation))]
    Validation { message: String },
}

/// Render collected configuration errors as one message block.
pub fn render_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected errors.
pub fn validate_config(config: &MatricareConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let required = [
        ("gemini.api_key", &config.gemini.api_key),
        ("factcheck.api_key", &config.factcheck.api_key),
        ("firecrawl.api_key", &config.firecrawl.api_key),
        ("twilio.account_sid", &config.twilio.account_sid),
        ("twilio.auth_token", &config.twilio.auth_token),
        ("twilio.from_number", &config.twilio.from_number),
        ("twilio.alert_to", &config.twilio.alert_to),
    ];
    for (name, value) in required {
        if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("{name} must be set"),
            });
        }
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    }

    if config.index.chunk_size == 0 {
        errors.push(ConfigError::Validation {
            message: "index.chunk_size must be at least 1".to_string(),
        });
    }

    if config.index.chunk_overlap >= config.index.chunk_size {
        errors.push(ConfigError::Validation {
            message: format!(
                "index.chunk_overlap ({}) must be smaller than index.chunk_size ({})",
                config.index.chunk_overlap, config.index.chunk_size
            ),
        });
    }

    if config.index.top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "index.top_k must be at least 1".to_string(),
        });
    }

    if config.firecrawl.search_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "firecrawl.search_limit must be at least 1".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> MatricareConfig {
        let mut config = MatricareConfig::default();
        config.gemini.api_key = Some("g-key".into());
        config.factcheck.api_key = Some("fc-key".into());
        config.firecrawl.api_key = Some("fw-key".into());
        config.twilio.account_sid = Some("AC123".into());
        config.twilio.auth_token = Some("tok".into());
        config.twilio.from_number = Some("+15550001111".into());
        config.twilio.alert_to = Some("+15550002222".into());
        config
    }

    #[test]
    fn complete_config_validates() {
        assert!(validate_config(&complete_config()).is_ok());
    }

    #[test]
    fn default_config_reports_every_missing_credential() {
        let errors = validate_config(&MatricareConfig::default()).unwrap_err();
        let rendered = render_errors(&errors);
        for key in [
            "gemini.api_key",
            "factcheck.api_key",
            "firecrawl.api_key",
            "twilio.account_sid",
            "twilio.auth_token",
            "twilio.from_number",
            "twilio.alert_to",
        ] {
            assert!(rendered.contains(key), "missing report for {key}: {rendered}");
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let mut config = complete_config();
        config.gemini.api_key = Some("   ".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("gemini.api_key")))
        );
    }

    #[test]
    fn overlap_must_stay_below_chunk_size() {
        let mut config = complete_config();
        config.index.chunk_size = 50;
        config.index.chunk_overlap = 50;
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("chunk_overlap")))
        );
    }

    #[test]
    fn zero_top_k_fails_validation() {
        let mut config = complete_config();
        config.index.top_k = 0;
        assert!(validate_config(&config).is_err());
    }
}
