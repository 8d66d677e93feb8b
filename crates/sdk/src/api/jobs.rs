//! Jobs API endpoints.

use super::json_body;
use crate::client::BatchApiClient;
use crate::error::BatchResult;
use crate::transport::Transport;
use batch_console_core::{JobExecutionId, JobParameters, ScheduleConfig, ScheduleRequest};
use chrono::Local;

/// Jobs API for listing, starting and scheduling job definitions.
pub struct JobsApi<'a, T> {
    client: &'a BatchApiClient<T>,
}

impl<'a, T: Transport> JobsApi<'a, T> {
    pub(crate) fn new(client: &'a BatchApiClient<T>) -> Self {
        Self { client }
    }

    /// List all jobs.
    pub async fn list(&self) -> BatchResult<T::Response> {
        let url = self.client.endpoints().jobs().clone();
        self.client.transport().get(url).await
    }

    /// Start a new execution of a job.
    pub async fn start(
        &self,
        job_name: &str,
        job_parameters: Option<&JobParameters>,
    ) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_start(job_name)?;
        self.client
            .transport()
            .post(url, json_body(job_parameters)?)
            .await
    }

    /// Restart the most recent failed or stopped execution of a job.
    pub async fn restart(
        &self,
        job_name: &str,
        job_parameters: Option<&JobParameters>,
    ) -> BatchResult<T::Response> {
        let url = self.client.endpoints().job_restart(job_name)?;
        self.client
            .transport()
            .post(url, json_body(job_parameters)?)
            .await
    }

    /// Schedule a job, or a re-run of an execution when `job_execution_id`
    /// is non-zero.
    ///
    /// Date and time fields in `config` are resolved against the local
    /// clock before sending.
    pub async fn schedule(
        &self,
        job_name: &str,
        job_execution_id: impl Into<JobExecutionId>,
        job_parameters: Option<&JobParameters>,
        config: ScheduleConfig,
    ) -> BatchResult<T::Response> {
        let request = config.into_request(
            job_name,
            job_execution_id.into(),
            job_parameters.cloned(),
            &Local::now(),
        );
        self.send_schedule(&request).await
    }

    /// Send an already composed schedule request.
    pub async fn send_schedule(&self, request: &ScheduleRequest) -> BatchResult<T::Response> {
        let url = self.client.endpoints().schedule_target(request.target())?;
        let body = serde_json::to_value(request)?;
        self.client.transport().post(url, Some(body)).await
    }
}
