//! Transport layer for the batch console SDK.

pub mod http;
#[cfg(test)]
pub(crate) mod recording;

pub use http::HttpTransport;

use crate::error::BatchResult;
use serde_json::Value;
use url::Url;

/// Sends requests built by the client.
///
/// The client hands every response back to its caller untouched, so the
/// transport decides what a response is and which failures it reports.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Response handle returned to callers.
    type Response: Send;

    /// Issue a GET request.
    async fn get(&self, url: Url) -> BatchResult<Self::Response>;

    /// Issue a POST request with an optional JSON body.
    async fn post(&self, url: Url, body: Option<Value>) -> BatchResult<Self::Response>;
}
