//! Main client for the batch console SDK.

use crate::api::*;
use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::BatchResult;
use crate::transport::{HttpTransport, Transport};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the batch REST service.
///
/// Every operation builds one request and hands it to the transport. The
/// transport's response, or its error, is returned as-is.
#[derive(Debug, Clone)]
pub struct BatchApiClient<T = HttpTransport> {
    endpoints: Arc<Endpoints>,
    transport: T,
}

impl BatchApiClient {
    /// Create a new client builder.
    pub fn builder() -> BatchApiClientBuilder {
        BatchApiClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: &ClientConfig) -> BatchResult<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(&config.base_url, transport)
    }
}

impl<T: Transport> BatchApiClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(base_url: &Url, transport: T) -> BatchResult<Self> {
        let endpoints = Arc::new(Endpoints::new(base_url)?);
        Ok(Self {
            endpoints,
            transport,
        })
    }

    /// Resource URLs derived from the REST root.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the jobs API.
    pub fn jobs(&self) -> JobsApi<'_, T> {
        JobsApi::new(self)
    }

    /// Get the job instances API.
    pub fn job_instances(&self) -> JobInstancesApi<'_, T> {
        JobInstancesApi::new(self)
    }

    /// Get the job executions API.
    pub fn job_executions(&self) -> JobExecutionsApi<'_, T> {
        JobExecutionsApi::new(self)
    }

    /// Get the job schedules API.
    pub fn schedules(&self) -> SchedulesApi<'_, T> {
        SchedulesApi::new(self)
    }
}

/// Builder for creating a BatchApiClient.
pub struct BatchApiClientBuilder {
    base_url: Option<String>,
    config_file: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl BatchApiClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            config_file: None,
            timeout: None,
        }
    }

    /// Set the REST root URL, overriding file and environment settings.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Read settings from a TOML config file.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> BatchResult<BatchApiClient> {
        let mut config =
            ClientConfig::resolve(self.base_url.as_deref(), self.config_file.as_deref())?;
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        BatchApiClient::from_config(&config)
    }
}

impl Default for BatchApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
