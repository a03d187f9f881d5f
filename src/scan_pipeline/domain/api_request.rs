use serde::Serialize;
use std::fmt;

/// HTTP methods used by the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Put,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names under which requests are counted in the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestName {
    CreateRepository,
    CreatePolicy,
    CreateWatch,
    ApplyWatch,
    CheckScanStatus,
    GetViolations,
}

impl RequestName {
    /// All request names in pipeline order
    pub const ALL: [RequestName; 6] = [
        RequestName::CreateRepository,
        RequestName::CreatePolicy,
        RequestName::CreateWatch,
        RequestName::ApplyWatch,
        RequestName::CheckScanStatus,
        RequestName::GetViolations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestName::CreateRepository => "Create Repository",
            RequestName::CreatePolicy => "Create Policy",
            RequestName::CreateWatch => "Create Watch",
            RequestName::ApplyWatch => "Apply Watch",
            RequestName::CheckScanStatus => "Check Scan Status",
            RequestName::GetViolations => "Get Violations",
        }
    }
}

impl fmt::Display for RequestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound platform call: method, path relative to the base URL and JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub name: RequestName,
    pub method: HttpMethod,
    pub path: String,
    pub body: serde_json::Value,
}

impl ApiRequest {
    pub fn new(
        name: RequestName,
        method: HttpMethod,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            name,
            method,
            path: path.into(),
            body,
        }
    }
}

/// Raw platform answer; bodies are kept as text because some checks are substring matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
