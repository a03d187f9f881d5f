//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a finished run for the formatters.

mod load_test_report;
mod load_test_report_builder;

pub use load_test_report::{FailureView, LoadTestReport, RequestRowView, RunMetadataView};
pub use load_test_report_builder::{LoadTestReportBuilder, AGGREGATED_ROW_NAME};
