/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::{Result, TodoApiError};

/// Base URL of the hosted todo service
pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1/";

const API_KEY_HEADER: &str = "API-KEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the todo service
#[derive(Debug, Clone)]
pub struct TodoClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl TodoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL (self-hosted or mock server)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        // Url::join drops the last segment unless the base ends with '/'
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        Ok(Self {
            http_client,
            base_url,
            api_key: None,
        })
    }

    /// Set the opaque API key sent with every request
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the API key if set
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(endpoint.trim_start_matches('/'))
    }

    /// Build request builder for an endpoint relative to the base URL
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|err| TodoApiError::Config(format!("invalid API key header: {err}")))?;
            headers.insert(API_KEY_HEADER, value);
        }
        Ok(self.http_client.request(method, url).headers(headers))
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-2xx statuses become `TodoApiError::Api` carrying the body text.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body, "request rejected by transport");
            return Err(TodoApiError::api_error(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
