//! Schedule request composition.
//!
//! A [`ScheduleConfig`] is what a console form collects: an optional delay,
//! or a calendar date plus time of day, and an optional calendar expression
//! with start/end bounds. [`ScheduleConfig::into_request`] folds the
//! date/time pairs into single timestamps and produces the [`ScheduleRequest`]
//! body the REST service accepts.

use crate::types::{JobExecutionId, JobParameters};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Schedule settings as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    /// Minutes to wait before the first run. Zero counts as unset.
    pub initial_delay: Option<i64>,
    /// Minutes between the end of one run and the start of the next.
    pub after_delay: Option<i64>,
    /// Minutes between run starts.
    pub interval: Option<i64>,
    pub persistent: bool,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub schedule_expression: Option<ScheduleExpressionConfig>,
}

/// Calendar-based schedule as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleExpressionConfig {
    pub second: Option<String>,
    pub minute: Option<String>,
    pub hour: Option<String>,
    pub day_of_month: Option<String>,
    pub month: Option<String>,
    pub day_of_week: Option<String>,
    pub year: Option<String>,
    pub timezone: Option<String>,
    pub start: Option<DateTimeFields>,
    pub end: Option<DateTimeFields>,
}

/// A date picker and a time picker value, either of which may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeFields {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl DateTimeFields {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self {
            date: Some(date),
            time,
        }
    }

    /// Merge the time of day into the date, in the given time zone.
    ///
    /// Returns `None` without a date. A missing time means midnight.
    pub fn merge<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        self.date.map(|date| combine(tz, date, self.time))
    }
}

/// Request body for the schedule endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub job_name: String,
    pub job_execution_id: JobExecutionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_parameters: Option<JobParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    pub persistent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<ScheduleExpression>,
}

/// Calendar-based schedule with resolved start/end bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExpression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_millis_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_millis_option")]
    pub end: Option<DateTime<Utc>>,
}

/// ISO-8601 UTC timestamps with milliseconds, e.g. `2024-01-10T14:30:00.000Z`.
mod iso_millis_option {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<DateTime<Utc>>::deserialize(deserializer)
    }
}

/// Where a schedule request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTarget<'a> {
    /// Re-run an existing job execution.
    Execution(JobExecutionId),
    /// Start a new execution of the named job.
    Job(&'a str),
}

impl ScheduleConfig {
    /// Schedule to run after a fixed delay in minutes.
    pub fn with_initial_delay(minutes: i64) -> Self {
        Self {
            initial_delay: Some(minutes),
            ..Default::default()
        }
    }

    /// Schedule to run at a calendar date and time of day.
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            ..Default::default()
        }
    }

    /// Compose the request body, resolving date/time fields against `now`.
    ///
    /// Date/time pairs are interpreted in `now`'s time zone. The resulting
    /// initial delay may be zero or negative when the target time has passed.
    pub fn into_request<Tz: TimeZone>(
        self,
        job_name: impl Into<String>,
        job_execution_id: JobExecutionId,
        job_parameters: Option<JobParameters>,
        now: &DateTime<Tz>,
    ) -> ScheduleRequest {
        let job_name = job_name.into();
        debug!(
            job_name = %job_name,
            job_execution_id = %job_execution_id,
            initial_delay = ?self.initial_delay,
            date = ?self.date,
            time = ?self.time,
            "Composing schedule request"
        );

        let tz = now.timezone();
        let initial_delay = match (self.initial_delay.filter(|d| *d != 0), self.date) {
            (None, Some(date)) => {
                let target = combine(&tz, date, self.time);
                let minutes = ceil_minutes(target - now.with_timezone(&Utc));
                debug!(minutes, "Derived initial delay from date and time");
                Some(minutes)
            }
            (delay, _) => delay.or(self.initial_delay),
        };

        let schedule_expression = self.schedule_expression.map(|expr| ScheduleExpression {
            start: expr.start.and_then(|fields| fields.merge(&tz)),
            end: expr.end.and_then(|fields| fields.merge(&tz)),
            second: expr.second,
            minute: expr.minute,
            hour: expr.hour,
            day_of_month: expr.day_of_month,
            month: expr.month,
            day_of_week: expr.day_of_week,
            year: expr.year,
            timezone: expr.timezone,
        });
        debug!(schedule_expression = ?schedule_expression, "Resolved schedule expression");

        ScheduleRequest {
            job_name,
            job_execution_id,
            job_parameters,
            initial_delay,
            after_delay: self.after_delay,
            interval: self.interval,
            persistent: self.persistent,
            schedule_expression,
        }
    }
}

impl ScheduleRequest {
    /// Execution-scoped when an execution id is given, job-scoped otherwise.
    pub fn target(&self) -> ScheduleTarget<'_> {
        if self.job_execution_id.is_specified() {
            ScheduleTarget::Execution(self.job_execution_id)
        } else {
            ScheduleTarget::Job(&self.job_name)
        }
    }

    /// Whether the schedule fires more than once.
    pub fn is_repeating(&self) -> bool {
        self.after_delay.is_some_and(|d| d > 0)
            || self.interval.is_some_and(|i| i > 0)
            || self.schedule_expression.is_some()
    }
}

/// Hour and minute of `time` applied to `date`; seconds are dropped.
fn combine<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: Option<NaiveTime>) -> DateTime<Utc> {
    let time = time
        .and_then(|t| NaiveTime::from_hms_opt(t.hour(), t.minute(), 0))
        .unwrap_or(NaiveTime::MIN);
    let naive = NaiveDateTime::new(date, time);

    // Wall-clock times skipped by a DST transition are read as UTC.
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Ceiling of a duration in whole minutes.
fn ceil_minutes(delta: chrono::Duration) -> i64 {
    let millis = delta.num_milliseconds();
    let minutes = millis / MILLIS_PER_MINUTE;
    if millis % MILLIS_PER_MINUTE > 0 {
        minutes + 1
    } else {
        minutes
    }
}
