use crate::application::read_models::{FailureView, LoadTestReport, RequestRowView, RunMetadataView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for request statistics
const STATS_TABLE_HEADER: &str =
    "| Method | Name | # Requests | # Fails | Min (ms) | Avg (ms) | Median (ms) | 95% (ms) | 99% (ms) | Max (ms) | Req/s |\n";

/// Markdown table separator line for request statistics
const STATS_TABLE_SEPARATOR: &str =
    "|--------|------|------------|---------|----------|----------|-------------|----------|----------|----------|-------|\n";

/// Markdown table header for the failure table
const FAILURE_TABLE_HEADER: &str = "| # Occurrences | Method | Name | Message |\n";

/// Markdown table separator line for the failure table
const FAILURE_TABLE_SEPARATOR: &str = "|---------------|--------|------|---------|\n";

/// Failure messages are response bodies and can be long
const MAX_MESSAGE_CHARS: usize = 200;

/// MarkdownReportFormatter adapter for the human-readable report
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn truncate_message(message: &str) -> String {
        if message.chars().count() <= MAX_MESSAGE_CHARS {
            return message.to_string();
        }
        let mut truncated: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
        truncated.push('…');
        truncated
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, metadata: &RunMetadataView) {
        output.push_str("# Load Test Report\n\n");
        output.push_str(&format!(
            "- Tool: {} {}\n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!("- Run: `{}`\n", metadata.run_id));
        output.push_str(&format!(
            "- Started: {} / Finished: {}\n",
            metadata.started_at, metadata.finished_at
        ));
        output.push_str(&format!(
            "- Duration: {:.1} s, {} user(s), {} iteration(s)\n",
            metadata.duration_secs, metadata.users, metadata.iterations
        ));
        output.push_str(&format!("- Stopped: {}\n\n", metadata.stop_reason));
    }

    fn render_statistics(
        &self,
        output: &mut String,
        rows: &[RequestRowView],
        aggregated: &RequestRowView,
    ) {
        output.push_str("## Request Statistics\n\n");
        if rows.is_empty() {
            output.push_str("*No requests were recorded*\n\n");
            return;
        }

        output.push_str(STATS_TABLE_HEADER);
        output.push_str(STATS_TABLE_SEPARATOR);
        for row in rows {
            self.render_row(output, row, false);
        }
        self.render_row(output, aggregated, true);
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, row: &RequestRowView, emphasize: bool) {
        let name = Self::escape_markdown_table_cell(&row.name);
        let name = if emphasize {
            format!("**{}**", name)
        } else {
            name
        };

        output.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            row.method,
            name,
            row.requests,
            row.failures,
            row.min_ms,
            row.avg_ms,
            row.median_ms,
            row.p95_ms,
            row.p99_ms,
            row.max_ms,
            row.requests_per_sec
        ));
    }

    fn render_failures(&self, output: &mut String, failures: &[FailureView]) {
        output.push_str("## Failures\n\n");
        if failures.is_empty() {
            output.push_str("*No failures*\n");
            return;
        }

        output.push_str(FAILURE_TABLE_HEADER);
        output.push_str(FAILURE_TABLE_SEPARATOR);
        for failure in failures {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                failure.occurrences,
                failure.method,
                Self::escape_markdown_table_cell(&failure.name),
                Self::escape_markdown_table_cell(&Self::truncate_message(&failure.message))
            ));
        }
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &LoadTestReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, &report.metadata);
        self.render_statistics(&mut output, &report.requests, &report.aggregated);
        self.render_failures(&mut output, &report.failures);
        Ok(output)
    }
}
