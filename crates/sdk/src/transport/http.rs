//! HTTP transport backed by reqwest.

use super::Transport;
use crate::config::ClientConfig;
use crate::error::{BatchError, BatchResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// HTTP transport for talking to the batch REST service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: &ClientConfig) -> BatchResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Send the request, turning non-success statuses into errors.
    async fn execute(&self, request: RequestBuilder) -> BatchResult<Response> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(status, "Request failed");
        Err(BatchError::from_response(status, &body))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    type Response = Response;

    async fn get(&self, url: Url) -> BatchResult<Response> {
        debug!(url = %url, "GET request");
        self.execute(self.client.get(url)).await
    }

    async fn post(&self, url: Url, body: Option<Value>) -> BatchResult<Response> {
        debug!(url = %url, has_body = body.is_some(), "POST request");

        let request = match body {
            Some(body) => self.client.post(url).json(&body),
            None => self.client.post(url),
        };
        self.execute(request).await
    }
}
