use crate::application::read_models::LoadTestReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the final load test report
///
/// This port abstracts the formatting logic for different report formats
/// (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the report read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &LoadTestReport) -> Result<String>;
}
