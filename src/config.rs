// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! Settings live in a TOML file managed by confy. The API base URL can be
//! overridden from the environment or the command line.

use std::time::Duration;

use registration_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "registration-dashboard";
const CONFIG_NAME: &str = "config";

/// Environment variable that overrides the configured base URL
pub const BASE_URL_ENV: &str = "REGISTRATION_API_BASE_URL";

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Configuration schema version
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// API base URL; `getRegistrationStatus` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds (unset means the transport default)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Dark or light visuals
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_window_width() -> f32 {
    1100.0
}

fn default_window_height() -> f32 {
    720.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            base_url: default_base_url(),
            request_timeout_secs: None,
            dark_mode: true,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating it with defaults if missing
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }

    /// Pick the base URL: CLI flag, then environment, then config file.
    ///
    /// Blank values are skipped.
    pub fn resolve_base_url(&self, cli: Option<&str>, env: Option<&str>) -> String {
        [cli, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map_or_else(|| self.base_url.clone(), ToString::to_string)
    }

    /// Build the HTTP client settings for a resolved base URL
    pub fn client_config(&self, base_url: String) -> ClientConfig {
        ClientConfig {
            base_url,
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://repository.jspl.com/RepositoryApp/api");
        assert_eq!(config.request_timeout_secs, None);
        assert!(config.dark_mode);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("base_url = \"http://localhost:8080/api\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.window_width, 1100.0);
        assert_eq!(config.request_timeout_secs, None);
        assert!(config.dark_mode);
    }

    #[test]
    fn test_config_survives_toml_round_trip() {
        let config = AppConfig {
            request_timeout_secs: Some(15),
            dark_mode: false,
            ..AppConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_precedence() {
        let config = AppConfig::default();

        assert_eq!(
            config.resolve_base_url(Some("http://cli/api"), Some("http://env/api")),
            "http://cli/api"
        );
        assert_eq!(
            config.resolve_base_url(None, Some("http://env/api")),
            "http://env/api"
        );
        assert_eq!(
            config.resolve_base_url(Some("  "), Some("")),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_timeout_passthrough() {
        let mut config = AppConfig::default();
        assert_eq!(config.client_config(DEFAULT_BASE_URL.to_string()).timeout, None);

        config.request_timeout_secs = Some(30);
        let client = config.client_config("http://x/api".to_string());
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
        assert_eq!(client.base_url, "http://x/api");
    }
}
