use super::*;
use crate::scan_pipeline::domain::{ApiResponse, CommandInvocation, RequestName};
use crate::shared::error::ImagePushError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

// Mock implementations for testing
#[derive(Default)]
struct MockPlatform {
    responses: HashMap<RequestName, ApiResponse>,
    unreachable: Vec<RequestName>,
    sent: Mutex<Vec<(String, ApiRequest)>>,
}

impl MockPlatform {
    fn respond(mut self, name: RequestName, status: u16, body: &str) -> Self {
        self.responses.insert(name, ApiResponse::new(status, body));
        self
    }

    fn unreachable(mut self, name: RequestName) -> Self {
        self.unreachable.push(name);
        self
    }

    fn sent(&self) -> Vec<(String, ApiRequest)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl XrayPlatform for MockPlatform {
    async fn send(&self, headers: &SessionHeaders, request: &ApiRequest) -> Result<ApiResponse> {
        self.sent
            .lock()
            .unwrap()
            .push((headers.authorization().to_string(), request.clone()));

        if self.unreachable.contains(&request.name) {
            anyhow::bail!("connection refused");
        }
        Ok(self
            .responses
            .get(&request.name)
            .cloned()
            .unwrap_or_else(|| default_response(request.name)))
    }
}

/// Responses under which every step succeeds
fn default_response(name: RequestName) -> ApiResponse {
    match name {
        RequestName::CheckScanStatus => ApiResponse::new(200, SCAN_DONE_BODY),
        _ => ApiResponse::new(200, "{}"),
    }
}

#[derive(Default)]
struct MockCommandRunner {
    fail_on: Option<&'static str>,
    runs: Mutex<Vec<CommandInvocation>>,
}

impl MockCommandRunner {
    fn failing_on(subcommand: &'static str) -> Self {
        Self {
            fail_on: Some(subcommand),
            runs: Mutex::new(Vec::new()),
        }
    }

    fn subcommands(&self) -> Vec<String> {
        self.runs
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| c.subcommand().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &CommandInvocation) -> Result<()> {
        self.runs.lock().unwrap().push(command.clone());
        if command.subcommand() == self.fail_on {
            return Err(ImagePushError::NonZeroExit {
                command: command.to_string(),
                code: Some(1),
            }
            .into());
        }
        Ok(())
    }
}

fn build_use_case(
    platform: MockPlatform,
    runner: MockCommandRunner,
) -> (
    ScanPipelineUseCase<MockPlatform, MockCommandRunner>,
    Arc<MockPlatform>,
    Arc<MockCommandRunner>,
) {
    let platform = Arc::new(platform);
    let runner = Arc::new(runner);
    let use_case = ScanPipelineUseCase::new(
        Arc::clone(&platform),
        Arc::clone(&runner),
        Arc::new(TargetCoordinates::with_defaults("acme")),
        RequestStatsCollector::new(),
    );
    (use_case, platform, runner)
}

fn session() -> Session {
    Session::open(Credentials::new("user", "pass"))
}

const SCAN_DONE_BODY: &str = "{\"overall\": {\"status\": \"DONE\"}}";

#[tokio::test]
async fn test_requests_sent_in_pipeline_order() {
    let (use_case, platform, runner) =
        build_use_case(MockPlatform::default(), MockCommandRunner::default());

    use_case.run_iteration(&session()).await.unwrap();

    let names: Vec<RequestName> = platform.sent().iter().map(|(_, r)| r.name).collect();
    assert_eq!(names, RequestName::ALL.to_vec());
    assert_eq!(runner.subcommands(), vec!["pull", "login", "tag", "push"]);
}

#[tokio::test]
async fn test_every_request_carries_basic_auth() {
    let (use_case, platform, _) =
        build_use_case(MockPlatform::default(), MockCommandRunner::default());

    use_case.run_iteration(&session()).await.unwrap();

    assert!(platform
        .sent()
        .iter()
        .all(|(auth, _)| auth == "Basic dXNlcjpwYXNz"));
}

#[tokio::test]
async fn test_repository_already_exists_counts_as_success() {
    let platform = MockPlatform::default().respond(
        RequestName::CreateRepository,
        400,
        "{\"errors\":[{\"message\":\"Repository docker-local already exists\"}]}",
    );
    let (use_case, _, _) = build_use_case(platform, MockCommandRunner::default());

    let summary = use_case.run_iteration(&session()).await.unwrap();

    assert_eq!(
        summary.outcome_of(RequestName::CreateRepository),
        Some(&RequestOutcome::Success)
    );
}

#[tokio::test]
async fn test_repository_error_records_body() {
    let platform =
        MockPlatform::default().respond(RequestName::CreateRepository, 403, "forbidden");
    let (use_case, _, _) = build_use_case(platform, MockCommandRunner::default());

    let summary = use_case.run_iteration(&session()).await.unwrap();

    assert_eq!(
        summary.outcome_of(RequestName::CreateRepository),
        Some(&RequestOutcome::Failure("forbidden".to_string()))
    );
    let failures = use_case.stats().failures();
    assert_eq!(failures[0].name, "Create Repository");
    assert_eq!(failures[0].message, "forbidden");
}

#[tokio::test]
async fn test_scan_status_requires_done() {
    let platform = MockPlatform::default().respond(
        RequestName::CheckScanStatus,
        200,
        "{\"overall\": {\"status\": \"PENDING\"}}",
    );
    let (use_case, _, _) = build_use_case(platform, MockCommandRunner::default());
    let summary = use_case.run_iteration(&session()).await.unwrap();
    assert_eq!(summary.failed_requests(), vec![RequestName::CheckScanStatus]);

    let platform = MockPlatform::default().respond(RequestName::CheckScanStatus, 200, SCAN_DONE_BODY);
    let (use_case, _, _) = build_use_case(platform, MockCommandRunner::default());
    let summary = use_case.run_iteration(&session()).await.unwrap();
    assert!(summary.failed_requests().is_empty());
}

#[tokio::test]
async fn test_failing_push_does_not_block_later_steps() {
    let (use_case, platform, runner) = build_use_case(
        MockPlatform::default(),
        MockCommandRunner::failing_on("login"),
    );

    let summary = use_case.run_iteration(&session()).await.unwrap();

    // Push stops at the failing command
    assert_eq!(runner.subcommands(), vec!["pull", "login"]);
    assert!(summary.image_push_error.is_some());
    // Every API step still ran and nothing was counted for the push
    assert_eq!(platform.sent().len(), RequestName::ALL.len());
    assert_eq!(use_case.stats().total_requests(), RequestName::ALL.len() as u64);
    assert_eq!(use_case.stats().total_failures(), 0);
}

#[tokio::test]
async fn test_push_error_never_leaks_password() {
    let (use_case, _, _) = build_use_case(
        MockPlatform::default(),
        MockCommandRunner::failing_on("login"),
    );

    let summary = use_case.run_iteration(&session()).await.unwrap();

    let error = summary.image_push_error.unwrap();
    assert!(error.contains("docker login"));
    assert!(!error.contains("pass"));
}

#[tokio::test]
async fn test_transport_error_counts_as_failure_and_continues() {
    let platform = MockPlatform::default().unreachable(RequestName::CreatePolicy);
    let (use_case, platform, _) = build_use_case(platform, MockCommandRunner::default());

    let summary = use_case.run_iteration(&session()).await.unwrap();

    assert_eq!(summary.failed_requests(), vec![RequestName::CreatePolicy]);
    assert_eq!(platform.sent().len(), RequestName::ALL.len());
    let failures = use_case.stats().failures();
    assert!(failures[0].message.contains("connection refused"));
}

#[tokio::test]
async fn test_unchecked_requests_fail_on_error_status() {
    let platform = MockPlatform::default()
        .respond(RequestName::CreatePolicy, 409, "{\"error\":\"Policy already exists\"}")
        .respond(RequestName::GetViolations, 201, "{}");
    let (use_case, _, _) = build_use_case(platform, MockCommandRunner::default());

    let summary = use_case.run_iteration(&session()).await.unwrap();

    assert_eq!(
        summary.outcome_of(RequestName::CreatePolicy),
        Some(&RequestOutcome::Failure("HTTP 409".to_string()))
    );
    assert_eq!(
        summary.outcome_of(RequestName::GetViolations),
        Some(&RequestOutcome::Success)
    );
}

#[tokio::test]
async fn test_payloads_target_configured_repository() {
    let (use_case, platform, _) =
        build_use_case(MockPlatform::default(), MockCommandRunner::default());

    use_case.run_iteration(&session()).await.unwrap();

    let sent = platform.sent();
    let by_name = |name: RequestName| {
        sent.iter()
            .find(|(_, r)| r.name == name)
            .map(|(_, r)| r.clone())
            .unwrap()
    };

    let repository = by_name(RequestName::CreateRepository);
    assert_eq!(repository.path, "/artifactory/api/repositories/docker-local");
    assert_eq!(repository.body["key"], "docker-local");

    let apply = by_name(RequestName::ApplyWatch);
    assert_eq!(
        apply.body["date_range"]["start_date"],
        apply.body["date_range"]["end_date"]
    );

    let status = by_name(RequestName::CheckScanStatus);
    assert_eq!(status.body["path"], "alpine/3.9/manifest.json");

    let violations = by_name(RequestName::GetViolations);
    assert_eq!(violations.body["pagination"]["offset"], 1);
    assert_eq!(violations.body["pagination"]["limit"], 100);
}
