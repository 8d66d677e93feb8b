//! End-to-end tests of the client against a mock batch REST service.

use batch_console_sdk::{
    BatchApiClient, BatchError, BatchStatus, JobExecution, JobExecutionId, JobExecutionQuery,
    JobInstanceQuery, JobParameters, JobSchedule, JobScheduleStatus, ScheduleConfig, ScheduleId,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> BatchApiClient {
    BatchApiClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap()
}

fn execution_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "href": format!("/api/jobexecutions/{}", id),
        "executionId": id,
        "instanceId": 1,
        "jobName": "nightly report",
        "batchStatus": status,
        "createTime": 1704895200000i64
    })
}

#[tokio::test]
async fn test_start_job_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/jobs/nightly%20report/start"))
        .and(body_json(json!({"region": "eu"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(execution_json(12, "STARTING")))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = JobParameters::new();
    params.insert("region".to_string(), "eu".to_string());

    let execution: JobExecution = client(&server)
        .jobs()
        .start("nightly report", Some(&params))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(execution.execution_id, JobExecutionId(12));
    assert_eq!(execution.batch_status, Some(BatchStatus::Starting));
}

#[tokio::test]
async fn test_list_job_instances_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobinstances"))
        .and(query_param("jobName", "nightly report"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"instanceId": 1, "jobName": "nightly report", "numberOfExecutions": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .job_instances()
        .list(&JobInstanceQuery::new().job_name("nightly report").count(10))
        .await
        .unwrap();

    let instances: Vec<batch_console_sdk::JobInstance> = response.json().await.unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].number_of_executions, 2);
}

#[tokio::test]
async fn test_running_executions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobexecutions/running"))
        .and(query_param("jobName", "nightly report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            execution_json(3, "STARTED")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let executions: Vec<JobExecution> = client(&server)
        .job_executions()
        .list(&JobExecutionQuery::new().running("nightly report").count(5))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(executions[0].batch_status.unwrap().is_running());
}

#[tokio::test]
async fn test_schedule_by_execution() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/jobexecutions/5/schedule"))
        .and(body_partial_json(json!({
            "jobName": "nightly report",
            "jobExecutionId": 5,
            "initialDelay": 15
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "status": "SCHEDULED",
            "createTime": 1704895200000i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schedule: JobSchedule = client(&server)
        .jobs()
        .schedule(
            "nightly report",
            5u64,
            None,
            ScheduleConfig::with_initial_delay(15),
        )
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(schedule.id, ScheduleId::new("1"));
    assert_eq!(schedule.status, JobScheduleStatus::Scheduled);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("date").is_none());
    assert!(body.get("time").is_none());
}

#[tokio::test]
async fn test_step_executions_from_execution_href() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobexecutions/3/stepexecutions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"stepExecutionId": 4, "stepName": "load", "batchStatus": "COMPLETED"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let execution: JobExecution = serde_json::from_value(execution_json(3, "COMPLETED")).unwrap();
    let href = execution.href.unwrap();

    let steps: Vec<batch_console_sdk::StepExecution> = client
        .job_executions()
        .step_executions(&href)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(steps[0].step_name, "load");
}

#[tokio::test]
async fn test_start_job_with_reserved_characters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/jobs/etl%3Bdaily%2Bfull/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(execution_json(8, "STARTING")))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .jobs()
        .start("etl;daily+full", None)
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_stop_sends_no_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/jobexecutions/3/stop"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).job_executions().stop(3u64).await.unwrap();

    assert_eq!(response.status().as_u16(), 204);
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/jobexecutions/99/abandon"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Job execution 99 is still running"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .job_executions()
        .abandon(99u64)
        .await
        .unwrap_err();

    match err {
        BatchError::Api { status, message, .. } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Job execution 99 is still running");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/schedules/7/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let cancelled: bool = client(&server)
        .schedules()
        .cancel(&ScheduleId::new("7"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(cancelled);
}
