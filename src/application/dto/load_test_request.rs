use crate::scan_pipeline::domain::{Credentials, LoadProfile, TargetCoordinates};

/// LoadTestRequest - Internal request DTO for the load test use case
///
/// Everything a run needs, resolved from CLI flags, environment variables
/// and the optional config file.
#[derive(Debug, Clone)]
pub struct LoadTestRequest {
    /// Platform and image coordinates shared read-only by every user
    pub target: TargetCoordinates,
    /// Account every simulated user logs in with
    pub credentials: Credentials,
    pub profile: LoadProfile,
    /// Base URL the requests go to; normally derived from the platform id
    pub base_url: String,
}

impl LoadTestRequest {
    pub fn new(
        target: TargetCoordinates,
        credentials: Credentials,
        profile: LoadProfile,
        base_url: Option<String>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| target.base_url());
        Self {
            target,
            credentials,
            profile,
            base_url,
        }
    }
}
