//! Example: Basic usage of the batch console SDK.
//!
//! This example demonstrates how to connect to the batch REST service,
//! start a job and inspect its execution.
//!
//! Run with: cargo run --example basic_usage

use batch_console_sdk::{
    BatchApiClient, BatchResult, Job, JobExecution, JobExecutionQuery, JobInstance,
    JobInstanceQuery, JobParameters, StepExecution,
};

#[tokio::main]
async fn main() -> BatchResult<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Falls back to BATCH_REST_URL, then to the built-in default
    let client = BatchApiClient::builder().build()?;

    println!("Known jobs:");
    let jobs: Vec<Job> = client.jobs().list().await?.json().await?;
    for job in &jobs {
        println!(
            "  {} ({} instances, {} running)",
            job.job_name, job.number_of_job_instances, job.number_of_running_job_executions
        );
    }

    let Some(job) = jobs.first() else {
        println!("No jobs deployed.");
        return Ok(());
    };

    let mut params = JobParameters::new();
    params.insert("triggeredBy".to_string(), "sdk-example".to_string());

    let started: JobExecution = client
        .jobs()
        .start(&job.job_name, Some(&params))
        .await?
        .json()
        .await?;
    println!("\nStarted execution {} of {}", started.execution_id, job.job_name);

    let instances: Vec<JobInstance> = client
        .job_instances()
        .list(&JobInstanceQuery::new().job_name(&job.job_name).count(5))
        .await?
        .json()
        .await?;
    println!("{} recent instances of {}", instances.len(), job.job_name);

    let executions: Vec<JobExecution> = client
        .job_executions()
        .list(&JobExecutionQuery::new().count(10))
        .await?
        .json()
        .await?;
    println!("\nLatest executions:");
    for execution in &executions {
        println!(
            "  #{} {} {:?}",
            execution.execution_id, execution.job_name, execution.batch_status
        );
    }

    if let Some(href) = started.href.as_deref() {
        let steps: Vec<StepExecution> = client
            .job_executions()
            .step_executions(href)
            .await?
            .json()
            .await?;
        for step in steps {
            println!("  step {}: {:?}", step.step_name, step.batch_status);
        }
    }

    Ok(())
}
