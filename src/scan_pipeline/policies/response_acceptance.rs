use crate::scan_pipeline::domain::{ApiResponse, RequestName, RequestOutcome};

/// Body fragment the platform returns when the repository is already there
const ALREADY_EXISTS_MARKER: &str = "already exists";

/// Raw body fragment of a finished scan. Matched literally, spacing included.
const SCAN_DONE_MARKER: &str = "\"status\": \"DONE\"";

/// ResponseAcceptance policy deciding whether a platform response counts as success
///
/// Rules by request:
/// 1. Create Repository: HTTP 200, or any status with `already exists` in the body
/// 2. Check Scan Status: HTTP 200 and the body contains `"status": "DONE"`
/// 3. Everything else: any status below 400
///
/// Failures of rules 1 and 2 carry the response body; rule 3 carries the status.
pub struct ResponseAcceptance;

impl ResponseAcceptance {
    /// Applies the rule registered for `name`
    pub fn evaluate(name: RequestName, response: &ApiResponse) -> RequestOutcome {
        match name {
            RequestName::CreateRepository => Self::repository_created(response),
            RequestName::CheckScanStatus => Self::scan_done(response),
            RequestName::CreatePolicy
            | RequestName::CreateWatch
            | RequestName::ApplyWatch
            | RequestName::GetViolations => Self::status_class(response),
        }
    }

    pub fn repository_created(response: &ApiResponse) -> RequestOutcome {
        if response.status == 200 || response.body.contains(ALREADY_EXISTS_MARKER) {
            RequestOutcome::Success
        } else {
            RequestOutcome::Failure(response.body.clone())
        }
    }

    pub fn scan_done(response: &ApiResponse) -> RequestOutcome {
        if response.status == 200 && response.body.contains(SCAN_DONE_MARKER) {
            RequestOutcome::Success
        } else {
            RequestOutcome::Failure(response.body.clone())
        }
    }

    pub fn status_class(response: &ApiResponse) -> RequestOutcome {
        if response.status < 400 {
            RequestOutcome::Success
        } else {
            RequestOutcome::Failure(format!("HTTP {}", response.status))
        }
    }

    /// Outcome of a request that never got a response
    pub fn transport_error(error: &anyhow::Error) -> RequestOutcome {
        RequestOutcome::Failure(format!("{:#}", error))
    }
}
