//! Load test report read model
//!
//! View-optimized, serializable representation of a finished run. Both
//! report formatters render from this struct only.

use serde::Serialize;

/// Main read model for a finished load test
#[derive(Debug, Clone, Serialize)]
pub struct LoadTestReport {
    pub metadata: RunMetadataView,
    /// One row per request name, ordered by name
    pub requests: Vec<RequestRowView>,
    /// All rows merged
    pub aggregated: RequestRowView,
    pub failures: Vec<FailureView>,
}

/// View representation of the run itself
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadataView {
    /// `urn:uuid:` prefixed run identifier
    pub run_id: String,
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 timestamps
    pub started_at: String,
    pub finished_at: String,
    pub duration_secs: f64,
    pub users: usize,
    pub iterations: u64,
    pub stop_reason: String,
}

/// One line of the statistics table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRowView {
    /// Empty for the aggregated row
    pub method: String,
    pub name: String,
    pub requests: u64,
    pub failures: u64,
    pub failure_ratio: f64,
    pub min_ms: f64,
    pub avg_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
    pub requests_per_sec: f64,
}

/// One line of the failure table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureView {
    pub method: String,
    pub name: String,
    pub message: String,
    pub occurrences: u64,
}
