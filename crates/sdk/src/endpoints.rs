//! URL construction for the batch REST resources.
//!
//! Endpoint roots are derived once from the configured REST root. Path
//! segments such as job names and query values are percent-encoded with
//! [`COMPONENT`], so reserved characters like `;`, `&` or `+` never reach
//! the server unescaped.

use crate::error::{BatchError, BatchResult};
use batch_console_core::{JobExecutionId, JobInstanceId, ScheduleId, ScheduleTarget, StepExecutionId};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters escaped in path segments and query values: everything but
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resource roots under the REST root URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// REST root, always ending in `/`.
    root: Url,
    jobs: Url,
    job_instances: Url,
    job_executions: Url,
    schedules: Url,
}

/// Filters for listing job instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobInstanceQuery {
    pub job_name: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl JobInstanceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_name(mut self, name: impl Into<String>) -> Self {
        self.job_name = Some(name.into());
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Filters for listing job executions.
///
/// Only some combinations are meaningful to the service; see
/// [`Endpoints::job_executions_list`] for which fields win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobExecutionQuery {
    pub count: Option<u32>,
    pub running: bool,
    pub job_name: Option<String>,
    pub job_instance_id: Option<JobInstanceId>,
    pub job_execution_id1: Option<JobExecutionId>,
}

impl JobExecutionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Running executions of the named job.
    pub fn running(mut self, job_name: impl Into<String>) -> Self {
        self.running = true;
        self.job_name = Some(job_name.into());
        self
    }

    pub fn job_name(mut self, name: impl Into<String>) -> Self {
        self.job_name = Some(name.into());
        self
    }

    pub fn job_instance_id(mut self, id: impl Into<JobInstanceId>) -> Self {
        self.job_instance_id = Some(id.into());
        self
    }

    /// Executions starting from this execution id.
    pub fn job_execution_id1(mut self, id: impl Into<JobExecutionId>) -> Self {
        self.job_execution_id1 = Some(id.into());
        self
    }
}

impl Endpoints {
    /// Derive the resource roots from the REST root URL.
    pub fn new(root: &Url) -> BatchResult<Self> {
        if root.cannot_be_a_base() {
            return Err(BatchError::Config(format!(
                "REST root URL cannot have path segments: {}",
                root
            )));
        }

        let mut root = root.clone();
        root.set_query(None);
        root.set_fragment(None);
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }

        Ok(Self {
            jobs: child(&root, &["jobs"])?,
            job_instances: child(&root, &["jobinstances"])?,
            job_executions: child(&root, &["jobexecutions"])?,
            schedules: child(&root, &["schedules"])?,
            root,
        })
    }

    pub fn jobs(&self) -> &Url {
        &self.jobs
    }

    pub fn job_instances(&self) -> &Url {
        &self.job_instances
    }

    pub fn job_executions(&self) -> &Url {
        &self.job_executions
    }

    pub fn schedules(&self) -> &Url {
        &self.schedules
    }

    /// `/jobs/{jobName}/start`
    pub fn job_start(&self, job_name: &str) -> BatchResult<Url> {
        child(&self.jobs, &[job_name, "start"])
    }

    /// `/jobs/{jobName}/restart`
    pub fn job_restart(&self, job_name: &str) -> BatchResult<Url> {
        child(&self.jobs, &[job_name, "restart"])
    }

    /// `/jobs/{jobName}/schedule`
    pub fn job_schedule(&self, job_name: &str) -> BatchResult<Url> {
        child(&self.jobs, &[job_name, "schedule"])
    }

    /// Schedule URL for a resolved schedule target.
    pub fn schedule_target(&self, target: ScheduleTarget<'_>) -> BatchResult<Url> {
        match target {
            ScheduleTarget::Execution(id) => self.job_execution_action(id, "schedule"),
            ScheduleTarget::Job(name) => self.job_schedule(name),
        }
    }

    /// `/jobinstances` with optional `jobName`, `start` and `count`.
    pub fn job_instances_list(&self, query: &JobInstanceQuery) -> Url {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(name) = query.job_name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(("jobName", name.to_string()));
        }
        if let Some(start) = query.start.filter(|s| *s > 0) {
            pairs.push(("start", start.to_string()));
        }
        if let Some(count) = query.count.filter(|c| *c > 0) {
            pairs.push(("count", count.to_string()));
        }
        with_query(&self.job_instances, &pairs)
    }

    /// `/jobexecutions` with the query picked from the filters.
    ///
    /// A running-executions query for a named job ignores every other
    /// filter. Otherwise `jobExecutionId1` (with `jobInstanceId`, `0` if
    /// unset) takes priority, and `count` is appended when positive.
    pub fn job_executions_list(&self, query: &JobExecutionQuery) -> BatchResult<Url> {
        let job_name = query.job_name.as_deref().filter(|n| !n.is_empty());
        if let (true, Some(name)) = (query.running, job_name) {
            let url = child(&self.job_executions, &["running"])?;
            return Ok(with_query(&url, &[("jobName", name.to_string())]));
        }

        let count = query.count.filter(|c| *c > 0);
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(first) = query.job_execution_id1.filter(JobExecutionId::is_specified) {
            let instance = query.job_instance_id.unwrap_or_default();
            pairs.push(("jobExecutionId1", first.to_string()));
            pairs.push(("jobInstanceId", instance.to_string()));
        }
        if let Some(count) = count {
            pairs.push(("count", count.to_string()));
        }
        Ok(with_query(&self.job_executions, &pairs))
    }

    /// `/jobexecutions/{id}`
    pub fn job_execution(&self, id: JobExecutionId) -> BatchResult<Url> {
        child(&self.job_executions, &[&id.to_string()])
    }

    /// `/jobexecutions/{id}/{action}`
    pub fn job_execution_action(&self, id: JobExecutionId, action: &str) -> BatchResult<Url> {
        child(&self.job_executions, &[&id.to_string(), action])
    }

    /// `/jobexecutions/{id}/stepexecutions/{stepId}`
    pub fn step_execution(&self, id: JobExecutionId, step_id: StepExecutionId) -> BatchResult<Url> {
        child(
            &self.job_executions,
            &[&id.to_string(), "stepexecutions", &step_id.to_string()],
        )
    }

    /// `{jobExecutionUrl}/stepexecutions` for an execution URL from the service.
    ///
    /// Relative URLs, such as an `href` of `/api/jobexecutions/3`, are
    /// resolved against the REST root.
    pub fn step_executions(&self, job_execution_url: &str) -> BatchResult<Url> {
        let url = match Url::parse(job_execution_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => self.root.join(job_execution_url)?,
            Err(e) => return Err(e.into()),
        };
        child(&url, &["stepexecutions"])
    }

    /// `/schedules/{id}`
    pub fn schedule(&self, id: &ScheduleId) -> BatchResult<Url> {
        child(&self.schedules, &[&id.0])
    }

    /// `/schedules/{id}/cancel`
    pub fn schedule_cancel(&self, id: &ScheduleId) -> BatchResult<Url> {
        child(&self.schedules, &[&id.0, "cancel"])
    }
}

/// Append encoded path segments, tolerating a trailing slash on `base`.
fn child(base: &Url, segments: &[&str]) -> BatchResult<Url> {
    if base.cannot_be_a_base() {
        return Err(BatchError::Config(format!(
            "URL cannot have path segments: {}",
            base
        )));
    }

    let mut path = base.path().trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment, COMPONENT));
    }

    // set_path leaves existing escapes alone, so segments are encoded once.
    let mut url = base.clone();
    url.set_path(&path);
    Ok(url)
}

fn with_query(base: &Url, pairs: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    if !pairs.is_empty() {
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, COMPONENT)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }
    url
}
