//! Resource handles exposed by [`BatchApiClient`](crate::BatchApiClient).

pub mod job_executions;
pub mod job_instances;
pub mod jobs;
pub mod schedules;

pub use job_executions::JobExecutionsApi;
pub use job_instances::JobInstancesApi;
pub use jobs::JobsApi;
pub use schedules::SchedulesApi;

use crate::error::BatchResult;
use serde::Serialize;
use serde_json::Value;

/// Serialize an optional request body.
fn json_body<B: Serialize>(body: Option<&B>) -> BatchResult<Option<Value>> {
    Ok(body.map(serde_json::to_value).transpose()?)
}
