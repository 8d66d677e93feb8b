use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Job parameters passed to start, restart and schedule requests.
pub type JobParameters = HashMap<String, String>;

/// Identifier of a job execution. Zero means "not specified".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobExecutionId(pub u64);

impl JobExecutionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_specified(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for JobExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobExecutionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a job instance. Zero means "not specified".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobInstanceId(pub u64);

impl JobInstanceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn is_specified(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for JobInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobInstanceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a step execution within a job execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepExecutionId(pub u64);

impl std::fmt::Display for StepExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepExecutionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a server-side job schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(pub String);

impl ScheduleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Batch status reported for job and step executions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Starting,
    Started,
    Stopping,
    Stopped,
    Failed,
    Completed,
    Abandoned,
}

impl BatchStatus {
    /// Whether the execution can still change state on its own.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Starting | Self::Started | Self::Stopping)
    }
}

/// Status of a server-side job schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobScheduleStatus {
    Scheduled,
    Done,
    Cancelled,
    Unknown,
}

/// A job definition known to the batch runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub job_name: String,
    pub number_of_job_instances: u64,
    pub number_of_running_job_executions: u64,
}

/// One logical run lineage of a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobInstance {
    pub href: Option<String>,
    pub instance_id: JobInstanceId,
    pub job_name: String,
    pub number_of_executions: u64,
    pub latest_job_execution: Option<JobExecution>,
}

/// One concrete execution attempt of a job instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobExecution {
    pub href: Option<String>,
    pub execution_id: JobExecutionId,
    pub instance_id: JobInstanceId,
    pub job_name: String,
    pub batch_status: Option<BatchStatus>,
    pub exit_status: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub last_updated_time: Option<DateTime<Utc>>,
    pub job_parameters: Option<JobParameters>,
}

/// Execution record of a single step within a job execution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepExecution {
    pub step_execution_id: StepExecutionId,
    pub step_name: String,
    pub batch_status: Option<BatchStatus>,
    pub exit_status: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub end_time: Option<DateTime<Utc>>,
    pub metrics: Vec<Metric>,
}

impl StepExecution {
    /// Look up a metric value by its type name (e.g. `READ_COUNT`).
    pub fn metric(&self, metric_type: &str) -> Option<i64> {
        self.metrics
            .iter()
            .find(|m| m.metric_type == metric_type)
            .map(|m| m.value)
    }
}

/// Step metric, e.g. READ_COUNT or COMMIT_COUNT
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(rename = "type")]
    pub metric_type: String,
    pub value: i64,
}

/// A server-side schedule created by a schedule request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSchedule {
    pub id: ScheduleId,
    #[serde(default)]
    pub job_schedule_config: Option<serde_json::Value>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub create_time: Option<DateTime<Utc>>,
    pub status: JobScheduleStatus,
    #[serde(default)]
    pub job_execution_ids: Vec<JobExecutionId>,
}
