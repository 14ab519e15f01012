//! Process-wide configuration for the page session.
//!
//! Resolved once at startup and injected into the components that need it;
//! nothing mutates it afterwards. Defaults work out of the box, a TOML file
//! can override them, and environment variables win over both.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Environment variable overriding the backend base URL.
pub const ENV_API_BASE_URL: &str = "SEOULMATE_API_BASE_URL";
/// Environment variable overriding the request timeout (seconds).
pub const ENV_REQUEST_TIMEOUT: &str = "SEOULMATE_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the recommendation backend, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// User-Agent header sent on every backend call.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 30,
            user_agent: "SeoulMate/1.0".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides on top of this configuration.
    /// Unset or unparsable variables leave the current value in place.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base) = std::env::var(ENV_API_BASE_URL) {
            if !base.trim().is_empty() {
                self.api_base_url = base.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(timeout) = std::env::var(ENV_REQUEST_TIMEOUT) {
            if let Ok(secs) = timeout.trim().parse::<u64>() {
                self.request_timeout_secs = secs;
            }
        }
        self
    }

    /// Check that the configuration is usable before wiring it in.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid API base URL '{}'", self.api_base_url))?;
        if self.request_timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }
        Ok(())
    }
}

/// Load configuration from a TOML file. Missing keys fall back to defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: AppConfig =
        toml::from_str(&content).with_context(|| format!("Invalid config file {:?}", path))?;
    Ok(config)
}
