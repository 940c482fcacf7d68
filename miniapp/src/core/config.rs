//! # Runtime Configuration
//!
//! [`AppConfig`] carries everything the client needs to talk to a backend and
//! a Telegram host: base URL, timeouts, WebView chrome colors, the fallback
//! bearer token for anonymous mode, and the device storage location.
//!
//! A config can come from three places, later ones overriding earlier:
//! defaults, a JSON file, and `CARDWATCH_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Header color applied to the Telegram WebView chrome.
pub const DEFAULT_HEADER_COLOR: &str = "#8B5CF6";

/// Background color applied to the Telegram WebView chrome.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#F8F9FA";

/// Client runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the CardWatch backend API.
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// How long to wait for the Telegram host to become ready before
    /// proceeding in degraded mode, in milliseconds.
    pub ready_timeout_ms: u64,
    /// WebView header color.
    pub header_color: String,
    /// WebView background color.
    pub background_color: String,
    /// Bearer token used when no session token exists (anonymous mode).
    /// `None` sends unauthenticated requests instead.
    pub fallback_token: Option<String>,
    /// Location of the persistent key-value storage file.
    pub storage_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3001".to_string(),
            request_timeout_secs: 10,
            ready_timeout_ms: 3000,
            header_color: DEFAULT_HEADER_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            fallback_token: None,
            storage_path: PathBuf::from("cardwatch_storage.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults overridden by `CARDWATCH_*` environment variables.
    ///
    /// Recognized variables: `CARDWATCH_API_URL`, `CARDWATCH_FALLBACK_TOKEN`,
    /// `CARDWATCH_STORAGE_PATH`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok());
        config
    }

    fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get("CARDWATCH_API_URL") {
            self.api_base_url = url;
        }
        if let Some(token) = get("CARDWATCH_FALLBACK_TOKEN") {
            self.fallback_token = Some(token);
        }
        if let Some(path) = get("CARDWATCH_STORAGE_PATH") {
            self.storage_path = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:3001");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.ready_timeout_ms, 3000);
        assert_eq!(config.header_color, "#8B5CF6");
        assert_eq!(config.background_color, "#F8F9FA");
        assert_eq!(config.fallback_token, None);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|name| match name {
            "CARDWATCH_API_URL" => Some("https://api.cardwatch.uz".to_string()),
            "CARDWATCH_FALLBACK_TOKEN" => Some("fallback-jwt".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base_url, "https://api.cardwatch.uz");
        assert_eq!(config.fallback_token.as_deref(), Some("fallback-jwt"));
        // Untouched fields keep their defaults
        assert_eq!(config.storage_path, PathBuf::from("cardwatch_storage.json"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "cardwatch_config_test_{}.json",
            std::process::id()
        ));

        let mut config = AppConfig::default();
        config.api_base_url = "https://staging.cardwatch.uz".to_string();
        config.fallback_token = Some("t".to_string());
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let path = Path::new("/nonexistent/cardwatch/config.json");
        let config = AppConfig::load_from_file(path).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
