//! Configuration loading for the portal client.
//!
//! A single TOML file under the platform config dir, with env-var and
//! flag overrides for the API base URL. Missing file means defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Env var overriding the API base URL.
const API_URL_ENV: &str = "GRIDPORT_API_URL";

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Remote API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the billing API, e.g. `https://billing.example.com/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Override for the session state directory. Defaults to the platform
    /// data dir.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Load from `<config dir>/gridport/config.toml`, falling back to
    /// defaults when the file does not exist. `GRIDPORT_API_URL` overrides
    /// the configured base URL.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::parse(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api.base_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Parse a TOML document into a config.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Where the session entries live.
    pub fn state_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.state_dir {
            return Ok(dir.clone());
        }
        let dirs = directories::ProjectDirs::from("", "", "gridport")
            .context("could not determine a platform data directory")?;
        Ok(dirs.data_dir().to_path_buf())
    }

    fn config_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "gridport")?;
        Some(dirs.config_dir().join("config.toml"))
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.state_dir.is_none());
    }

    #[test]
    fn parses_full_document() {
        let config = Config::parse(
            r#"
            state_dir = "/var/lib/gridport"

            [api]
            base_url = "https://billing.example.com/api"
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://billing.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(
            config.state_dir.as_deref(),
            Some(std::path::Path::new("/var/lib/gridport"))
        );
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config = Config::parse("[api]\nbase_url = \"http://10.0.0.5/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5/api");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn explicit_state_dir_wins() {
        let config = Config::parse("state_dir = \"/tmp/gp-test\"").unwrap();
        assert_eq!(
            config.state_dir().unwrap(),
            PathBuf::from("/tmp/gp-test")
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Config::parse("api = \"not a table\"").is_err());
    }
}
