//! Example: Scheduling job runs.
//!
//! This example schedules a one-off run at a calendar date and time, a
//! recurring run driven by a calendar expression, and then cancels it.
//!
//! Run with: cargo run --example schedule_job

use batch_console_sdk::{
    BatchApiClient, BatchResult, DateTimeFields, JobSchedule, ScheduleConfig,
    ScheduleExpressionConfig,
};
use chrono::{Duration, Local};

#[tokio::main]
async fn main() -> BatchResult<()> {
    tracing_subscriber::fmt::init();

    let client = BatchApiClient::builder()
        .base_url("http://localhost:8080/api")
        .build()?;

    // One-off run tomorrow at the current time of day
    let tomorrow = Local::now() + Duration::days(1);
    let config = ScheduleConfig::at(tomorrow.date_naive(), tomorrow.time());
    let once: JobSchedule = client
        .jobs()
        .schedule("nightly", 0u64, None, config)
        .await?
        .json()
        .await?;
    println!("Scheduled {} ({:?})", once.id, once.status);

    // Every day at 02:00 for the next 30 days
    let today = Local::now().date_naive();
    let recurring = ScheduleConfig {
        schedule_expression: Some(ScheduleExpressionConfig {
            hour: Some("2".to_string()),
            minute: Some("0".to_string()),
            start: Some(DateTimeFields::new(today, None)),
            end: Some(DateTimeFields::new(today + Duration::days(30), None)),
            ..Default::default()
        }),
        ..Default::default()
    };
    let daily: JobSchedule = client
        .jobs()
        .schedule("nightly", 0u64, None, recurring)
        .await?
        .json()
        .await?;
    println!("Scheduled {} ({:?})", daily.id, daily.status);

    let schedules: Vec<JobSchedule> = client.schedules().list().await?.json().await?;
    println!("{} schedules on the server", schedules.len());

    let cancelled: bool = client.schedules().cancel(&daily.id).await?.json().await?;
    println!("Cancelled {}: {}", daily.id, cancelled);

    Ok(())
}
