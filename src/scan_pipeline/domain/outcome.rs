use super::api_request::RequestName;

/// Accounting result of a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    /// Failure with the diagnostic recorded in the failure table
    Failure(String),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success => None,
            RequestOutcome::Failure(message) => Some(message),
        }
    }
}

/// What happened during one pipeline iteration.
///
/// Informational only: nothing in the pipeline branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationSummary {
    pub requests: Vec<(RequestName, RequestOutcome)>,
    /// `None` when the push worked, otherwise the logged error
    pub image_push_error: Option<String>,
}

impl IterationSummary {
    pub fn new() -> Self {
        Self {
            requests: Vec::with_capacity(RequestName::ALL.len()),
            image_push_error: None,
        }
    }

    pub fn record(&mut self, name: RequestName, outcome: RequestOutcome) {
        self.requests.push((name, outcome));
    }

    pub fn outcome_of(&self, name: RequestName) -> Option<&RequestOutcome> {
        self.requests
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn failed_requests(&self) -> Vec<RequestName> {
        self.requests
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for IterationSummary {
    fn default() -> Self {
        Self::new()
    }
}
