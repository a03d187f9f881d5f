//! Builder for constructing LoadTestReport from a use case response

use super::load_test_report::{FailureView, LoadTestReport, RequestRowView, RunMetadataView};
use crate::application::dto::LoadTestResponse;
use crate::scan_pipeline::services::{EndpointStats, FailureRecord};

pub const AGGREGATED_ROW_NAME: &str = "Aggregated";

/// Builder for constructing LoadTestReport from the run results
pub struct LoadTestReportBuilder;

impl LoadTestReportBuilder {
    /// Builds the report
    ///
    /// # Arguments
    /// * `response` - Results of the finished run
    /// * `tool_name` / `tool_version` - Written into the metadata block
    pub fn build(response: &LoadTestResponse, tool_name: &str, tool_version: &str) -> LoadTestReport {
        let elapsed_secs = response.elapsed.as_secs_f64();

        let requests = response
            .endpoints
            .iter()
            .map(|row| Self::build_row(row, elapsed_secs))
            .collect();
        let aggregated = Self::build_row(
            &EndpointStats::aggregate(AGGREGATED_ROW_NAME, response.endpoints.iter()),
            elapsed_secs,
        );

        LoadTestReport {
            metadata: RunMetadataView {
                run_id: format!("urn:uuid:{}", response.run_id),
                tool_name: tool_name.to_string(),
                tool_version: tool_version.to_string(),
                started_at: response.started_at.to_rfc3339(),
                finished_at: response.finished_at.to_rfc3339(),
                duration_secs: round_to(elapsed_secs, 3),
                users: response.users_spawned,
                iterations: response.iterations_completed,
                stop_reason: response.stop_reason.to_string(),
            },
            requests,
            aggregated,
            failures: response.failures.iter().map(Self::build_failure).collect(),
        }
    }

    fn build_row(stats: &EndpointStats, elapsed_secs: f64) -> RequestRowView {
        let requests_per_sec = if elapsed_secs > 0.0 {
            stats.num_requests as f64 / elapsed_secs
        } else {
            0.0
        };

        RequestRowView {
            method: stats.method.map(|m| m.to_string()).unwrap_or_default(),
            name: stats.name.clone(),
            requests: stats.num_requests,
            failures: stats.num_failures,
            failure_ratio: round_to(stats.failure_ratio(), 4),
            min_ms: round_to(stats.min_ms(), 2),
            avg_ms: round_to(stats.avg_ms(), 2),
            median_ms: round_to(stats.median_ms(), 2),
            p95_ms: round_to(stats.percentile_ms(0.95), 2),
            p99_ms: round_to(stats.percentile_ms(0.99), 2),
            max_ms: round_to(stats.max_ms(), 2),
            requests_per_sec: round_to(requests_per_sec, 2),
        }
    }

    fn build_failure(record: &FailureRecord) -> FailureView {
        FailureView {
            method: record.method.to_string(),
            name: record.name.clone(),
            message: record.message.clone(),
            occurrences: record.occurrences,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
