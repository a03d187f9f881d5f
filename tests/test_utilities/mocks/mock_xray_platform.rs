use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use xray_load::prelude::*;

/// Body of a finished scan as the platform returns it
pub const SCAN_DONE_BODY: &str = "{\"overall\": {\"status\": \"DONE\"}}";

/// Mock XrayPlatform that records every request and answers from a script
///
/// Requests without a scripted answer get a response under which the step
/// succeeds.
#[derive(Default, Clone)]
pub struct MockXrayPlatform {
    responses: Arc<Mutex<HashMap<RequestName, ApiResponse>>>,
    unreachable: Arc<Mutex<Vec<RequestName>>>,
    requests: Arc<Mutex<Vec<(String, ApiRequest)>>>,
}

impl MockXrayPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the answer for one request name
    pub fn with_response(self, name: RequestName, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(name, ApiResponse::new(status, body));
        self
    }

    /// Makes one request name fail without a response
    pub fn with_transport_error(self, name: RequestName) -> Self {
        self.unreachable.lock().unwrap().push(name);
        self
    }

    /// All requests so far, with the Authorization header they carried
    pub fn requests(&self) -> Vec<(String, ApiRequest)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_named(&self, name: RequestName) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|(_, r)| r.name == name)
            .map(|(_, r)| r)
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn default_response(name: RequestName) -> ApiResponse {
        match name {
            RequestName::CheckScanStatus => ApiResponse::new(200, SCAN_DONE_BODY),
            _ => ApiResponse::new(200, "{}"),
        }
    }
}

#[async_trait::async_trait]
impl XrayPlatform for MockXrayPlatform {
    async fn send(&self, headers: &SessionHeaders, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((headers.authorization().to_string(), request.clone()));

        if self.unreachable.lock().unwrap().contains(&request.name) {
            anyhow::bail!("error sending request: connection refused");
        }

        let scripted = self.responses.lock().unwrap().get(&request.name).cloned();
        Ok(scripted.unwrap_or_else(|| Self::default_response(request.name)))
    }
}
