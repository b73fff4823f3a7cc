/*
[INPUT]:  YAML configuration file, TODOBOARD_API_KEY environment variable
[OUTPUT]: Parsed service configuration
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use todoboard_adapter::{ClientConfig, DEFAULT_BASE_URL, TodoClient};

/// Environment variable consulted when the file carries no API key
pub const API_KEY_ENV: &str = "TODOBOARD_API_KEY";

/// Top-level configuration for the todoboard client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoboardConfig {
    /// Service root, endpoints are joined onto it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Opaque key sent as the `API-KEY` header
    #[serde(default)]
    pub api_key: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for TodoboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl TodoboardConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let mut config: Self = serde_yaml::from_str(content)?;
        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        }
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Builds the HTTP client this configuration describes
    pub fn build_client(&self) -> anyhow::Result<TodoClient> {
        let mut client = TodoClient::with_config_and_base_url(self.client_config(), &self.base_url)
            .context("build todo service client")?;
        if let Some(key) = &self.api_key {
            client.set_api_key(key.clone());
        }
        Ok(client)
    }
}
