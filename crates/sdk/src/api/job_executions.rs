//! Job executions API endpoints.

use super::json_body;
use crate::client::BatchApiClient;
use crate::endpoints::JobExecutionQuery;
use crate::error::BatchResult;
use crate::transport::Transport;
use batch_console_core::{JobExecutionId, JobParameters, StepExecutionId};

/// Job executions API for inspecting and controlling executions.
pub struct JobExecutionsApi<'a, T> {
    client: &'a BatchApiClient<T>,
}

impl<'a, T: Transport> JobExecutionsApi<'a, T> {
    pub(crate) fn new(client: &'a BatchApiClient<T>) -> Self {
        Self { client }
    }

    /// List job executions.
    pub async fn list(&self, query: &JobExecutionQuery) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_executions_list(query)?;
        self.client.transport().get(url).await
    }

    /// Get a job execution.
    pub async fn get(&self, id: impl Into<JobExecutionId>) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_execution(id.into())?;
        self.client.transport().get(url).await
    }

    /// Stop a running job execution.
    pub async fn stop(&self, id: impl Into<JobExecutionId>) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_execution_action(id.into(), "stop")?;
        self.client.transport().post(url, None).await
    }

    /// Restart a stopped or failed job execution.
    pub async fn restart(
        &self,
        id: impl Into<JobExecutionId>,
        job_parameters: Option<&JobParameters>,
    ) -> BatchResult<T::Response> {
        let url = self
            .client
            .endpoints()
            .job_execution_action(id.into(), "restart")?;
        self.client
            .transport()
            .post(url, json_body(job_parameters)?)
            .await
    }

    /// Mark a job execution as abandoned.
    pub async fn abandon(&self, id: impl Into<JobExecutionId>) -> BatchResult<T::Response> {
        let url = self
            .client
            .endpoints()
            .job_execution_action(id.into(), "abandon")?;
        self.client.transport().post(url, None).await
    }

    /// List step executions given a job execution URL, such as the `href`
    /// of a job execution returned by the service. Relative URLs resolve
    /// against the REST root.
    pub async fn step_executions(&self, job_execution_url: &str) -> BatchResult<T::Response> {
        let url = self.client.endpoints().step_executions(job_execution_url)?;
        self.client.transport().get(url).await
    }

    /// Get one step execution of a job execution.
    pub async fn step_execution(
        &self,
        id: impl Into<JobExecutionId>,
        step_id: impl Into<StepExecutionId>,
    ) -> BatchResult<T::Response> {
        let url = self
            .client
            .endpoints()
            .step_execution(id.into(), step_id.into())?;
        self.client.transport().get(url).await
    }
}
