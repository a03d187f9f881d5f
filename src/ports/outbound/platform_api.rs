use crate::scan_pipeline::domain::{ApiRequest, ApiResponse, SessionHeaders};
use crate::shared::Result;
use async_trait::async_trait;

/// XrayPlatform port for issuing requests against the scanning platform
///
/// This port abstracts the REST transport (e.g., reqwest over HTTPS) so the
/// scenario can run against a real platform or a recording mock.
///
/// # Async Support
/// Implementations are shared by every simulated user and must be
/// `Send + Sync`.
#[async_trait]
pub trait XrayPlatform: Send + Sync {
    /// Sends one request with the caller's session headers
    ///
    /// # Returns
    /// The status code and raw body, whatever the status
    ///
    /// # Errors
    /// Returns an error only when no response was received (connection,
    /// TLS or body read failure). HTTP error statuses are not errors here.
    async fn send(&self, headers: &SessionHeaders, request: &ApiRequest) -> Result<ApiResponse>;
}
