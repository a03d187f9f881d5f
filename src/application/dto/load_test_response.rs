use crate::scan_pipeline::services::{EndpointStats, FailureRecord};
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Why a load test ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The `run_time` deadline passed
    RunTimeElapsed,
    /// Every user finished its iteration budget
    IterationsCompleted,
    /// Ctrl+C
    Interrupted,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::RunTimeElapsed => "run_time_elapsed",
            StopReason::IterationsCompleted => "iterations_completed",
            StopReason::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LoadTestResponse - Internal response DTO from the load test use case
///
/// Raw results of a finished run; the read model builder turns them into
/// the report view.
#[derive(Debug, Clone)]
pub struct LoadTestResponse {
    pub run_id: uuid::Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub users_spawned: usize,
    /// Sum over all users
    pub iterations_completed: u64,
    /// Per-request rows ordered by name
    pub endpoints: Vec<EndpointStats>,
    /// Failure table, most frequent first
    pub failures: Vec<FailureRecord>,
    pub stop_reason: StopReason,
}

impl LoadTestResponse {
    pub fn total_requests(&self) -> u64 {
        self.endpoints.iter().map(|e| e.num_requests).sum()
    }

    pub fn total_failures(&self) -> u64 {
        self.endpoints.iter().map(|e| e.num_failures).sum()
    }

    /// Whether any request was recorded as failed
    pub fn has_failures(&self) -> bool {
        self.total_failures() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reason_labels() {
        assert_eq!(StopReason::RunTimeElapsed.to_string(), "run_time_elapsed");
        assert_eq!(
            StopReason::IterationsCompleted.to_string(),
            "iterations_completed"
        );
        assert_eq!(StopReason::Interrupted.to_string(), "interrupted");
    }

    #[test]
    fn test_empty_response_has_no_failures() {
        let now = Utc::now();
        let response = LoadTestResponse {
            run_id: uuid::Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            elapsed: Duration::ZERO,
            users_spawned: 0,
            iterations_completed: 0,
            endpoints: Vec::new(),
            failures: Vec::new(),
            stop_reason: StopReason::Interrupted,
        };
        assert_eq!(response.total_requests(), 0);
        assert!(!response.has_failures());
    }
}
