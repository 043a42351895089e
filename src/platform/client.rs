//! Platform HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::headers;
use crate::context::Connection;
use crate::error::{PlatformError, Result};

/// Object store layer a request is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer<'a> {
    pub layer_type: &'static str,
    pub id: &'a str,
}

impl<'a> Layer<'a> {
    /// Tenant layer: `layer-type: TENANT`, `layer-id: <tenant>`
    pub fn tenant(id: &'a str) -> Self {
        Self {
            layer_type: headers::TENANT_LAYER,
            id,
        }
    }

    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(headers::LAYER_TYPE, self.layer_type)
            .header(headers::LAYER_ID, self.id)
    }
}

/// Platform API client
pub struct PlatformClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PlatformClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Create a client from resolved connection settings
    pub fn from_connection(connection: &Connection) -> Self {
        Self::new(&connection.url, connection.token.clone())
    }

    /// Base URL all API paths are joined onto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path onto the base URL
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// GET `path` within `layer` and decode the JSON body.
    ///
    /// Non-2xx responses become `PlatformError::Api`, undecodable bodies
    /// become `PlatformError::Json`.
    pub async fn get_json<T>(&self, path: &str, layer: Layer<'_>, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        debug!(
            "GET {} ({}={}, {}={})",
            url,
            headers::LAYER_TYPE,
            layer.layer_type,
            headers::LAYER_ID,
            layer.id
        );

        let response = layer.apply(self.get(&url)).send().await?;
        self.parse_api_response(response, error_context).await
    }

    async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Error response body: {}", body);
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            PlatformError::Json(format!("Failed to parse {}: {}", error_context, e))
        })
    }
}

#[cfg(test)]
impl PlatformClient {
    /// Client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, Some("test-token".to_string()))
    }
}
