//! xray-load - load-test the JFrog Artifactory/Xray scan workflow
//!
//! Simulated users repeatedly walk through a fixed scenario against the
//! platform REST API: create a Docker repository, push an image with the
//! `docker` CLI, create a security policy and a watch, apply the watch,
//! check the scan status of the pushed manifest and fetch its violations.
//! Per-request statistics are collected and rendered as a report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_pipeline`): request payloads, acceptance rules and statistics
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use xray_load::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let target = TargetCoordinates::with_defaults("acme");
//! let request = LoadTestRequest::new(
//!     target,
//!     Credentials::new("user", "password"),
//!     LoadProfile::default(),
//!     None,
//! );
//!
//! // Create adapters
//! let platform = Arc::new(XrayClient::new(&request.base_url)?);
//! let command_runner = Arc::new(ProcessCommandRunner::new());
//!
//! // Create use case and execute
//! let use_case = LoadTestUseCase::new(platform, command_runner, StderrProgressReporter::new());
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let report = LoadTestReportBuilder::build(&response, "xray-load", "0.1.0");
//! println!("{}", MarkdownReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod scan_pipeline;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, MarkdownReportFormatter,
    };
    pub use crate::adapters::outbound::network::XrayClient;
    pub use crate::adapters::outbound::process::ProcessCommandRunner;
    pub use crate::application::dto::{LoadTestRequest, LoadTestResponse, OutputFormat, StopReason};
    pub use crate::application::read_models::{LoadTestReport, LoadTestReportBuilder};
    pub use crate::application::use_cases::{LoadTestUseCase, ScanPipelineUseCase};
    pub use crate::ports::outbound::{
        CommandRunner, OutputPresenter, ProgressReporter, ProgressSnapshot, ReportFormatter,
        XrayPlatform,
    };
    pub use crate::scan_pipeline::domain::{
        ApiRequest, ApiResponse, CommandInvocation, Credentials, HttpMethod, IterationSummary,
        LoadProfile, RequestName, RequestOutcome, Session, SessionHeaders, TargetCoordinates,
        WaitTime,
    };
    pub use crate::scan_pipeline::policies::ResponseAcceptance;
    pub use crate::scan_pipeline::services::RequestStatsCollector;
    pub use crate::shared::Result;
}
