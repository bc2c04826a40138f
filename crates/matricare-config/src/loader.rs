// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./matricare.toml` > `~/.config/matricare/matricare.toml`
//! > `/etc/matricare/matricare.toml` with environment variable overrides via
//! the `MATRICARE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MatricareConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/matricare/matricare.toml` (system-wide)
/// 3. `~/.config/matricare/matricare.toml` (user XDG config)
/// 4. `./matricare.toml` (local directory)
/// 5. `MATRICARE_*` environment variables
pub fn load_config() -> Result<MatricareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MatricareConfig::default()))
        .merge(Toml::file("/etc/matricare/matricare.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("matricare/matricare.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("matricare.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<MatricareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MatricareConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MatricareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MatricareConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `MATRICARE_TWILIO_ACCOUNT_SID` must map
/// to `twilio.account_sid`, not `twilio.account.sid`.
fn env_provider() -> Env {
    Env::prefixed("MATRICARE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MATRICARE_TWILIO_ACCOUNT_SID -> "twilio_account_sid"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("factcheck_", "factcheck.", 1)
            .replacen("firecrawl_", "firecrawl.", 1)
            .replacen("twilio_", "twilio.", 1)
            .replacen("index_", "index.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_str_applies_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.gateway.port, 8000);
        assert_eq!(config.index.top_k, 3);
    }

    #[test]
    fn load_from_str_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[gateway]
port = 9100

[firecrawl]
api_key = "fc-key"
search_limit = 2
"#,
        )
        .unwrap();
        assert_eq!(config.gateway.port, 9100);
        assert_eq!(config.firecrawl.api_key.as_deref(), Some("fc-key"));
        assert_eq!(config.firecrawl.search_limit, 2);
    }

    #[test]
    fn env_vars_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MATRICARE_TWILIO_ACCOUNT_SID", "AC999");
            jail.set_env("MATRICARE_GEMINI_API_KEY", "g-env-key");
            jail.set_env("MATRICARE_GATEWAY_PORT", "8081");

            let config = load_config().expect("config should load");
            assert_eq!(config.twilio.account_sid.as_deref(), Some("AC999"));
            assert_eq!(config.gemini.api_key.as_deref(), Some("g-env-key"));
            assert_eq!(config.gateway.port, 8081);
            Ok(())
        });
    }
}
