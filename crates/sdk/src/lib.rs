//! # Batch Console SDK
//!
//! Client for the REST API of a batch-processing service: list and start
//! jobs, inspect and control job executions, and schedule runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_console_sdk::{BatchApiClient, BatchResult, JobExecution, JobExecutionQuery};
//!
//! #[tokio::main]
//! async fn main() -> BatchResult<()> {
//!     // Build client
//!     let client = BatchApiClient::builder()
//!         .base_url("http://localhost:8080/api")
//!         .build()?;
//!
//!     // Start a job
//!     let started: JobExecution = client.jobs().start("nightly", None).await?.json().await?;
//!     println!("Started execution {}", started.execution_id);
//!
//!     // List the latest executions
//!     let executions: Vec<JobExecution> = client
//!         .job_executions()
//!         .list(&JobExecutionQuery::new().count(10))
//!         .await?
//!         .json()
//!         .await?;
//!     println!("Found {} executions", executions.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transports
//!
//! [`BatchApiClient`] is generic over [`Transport`]; any type that can send
//! a GET and a POST can stand in for the reqwest-backed [`HttpTransport`].

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{BatchApiClient, BatchApiClientBuilder};
pub use config::{ClientConfig, FileConfig, DEFAULT_REST_URL, REST_URL_ENV};
pub use endpoints::{Endpoints, JobExecutionQuery, JobInstanceQuery};
pub use error::{BatchError, BatchResult};
pub use transport::{HttpTransport, Transport};

// Re-export core types for convenience
pub use batch_console_core::{
    // IDs
    types::{JobExecutionId, JobInstanceId, JobParameters, ScheduleId, StepExecutionId},
    // Status enums
    types::{BatchStatus, JobScheduleStatus},
    // Entities
    types::{Job, JobExecution, JobInstance, JobSchedule, Metric, StepExecution},
    // Scheduling
    schedule::{
        DateTimeFields, ScheduleConfig, ScheduleExpression, ScheduleExpressionConfig,
        ScheduleRequest, ScheduleTarget,
    },
};
