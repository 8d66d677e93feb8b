//! Job instances API endpoints.

use crate::client::BatchApiClient;
use crate::endpoints::JobInstanceQuery;
use crate::error::BatchResult;
use crate::transport::Transport;

/// Job instances API.
pub struct JobInstancesApi<'a, T> {
    client: &'a BatchApiClient<T>,
}

impl<'a, T: Transport> JobInstancesApi<'a, T> {
    pub(crate) fn new(client: &'a BatchApiClient<T>) -> Self {
        Self { client }
    }

    /// List job instances, optionally for one job and paged by `start`/`count`.
    pub async fn list(&self, query: &JobInstanceQuery) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_instances_list(query);
        self.client.transport().get(url).await
    }
}
