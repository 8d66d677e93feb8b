//! Transport double that records requests instead of sending them.

use super::Transport;
use crate::error::BatchResult;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, url: Url, body: Option<Value>) -> RecordedRequest {
        let request = RecordedRequest {
            method,
            url: url.to_string(),
            body,
        };
        self.requests.lock().unwrap().push(request.clone());
        request
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    type Response = RecordedRequest;

    async fn get(&self, url: Url) -> BatchResult<RecordedRequest> {
        Ok(self.record("GET", url, None))
    }

    async fn post(&self, url: Url, body: Option<Value>) -> BatchResult<RecordedRequest> {
        Ok(self.record("POST", url, body))
    }
}
