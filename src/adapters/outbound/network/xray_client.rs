use crate::ports::outbound::XrayPlatform;
use crate::scan_pipeline::domain::{ApiRequest, ApiResponse, HttpMethod, SessionHeaders};
use crate::shared::error::LoadTestError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// XrayClient adapter for the Artifactory and Xray REST APIs
///
/// This adapter implements the XrayPlatform port with one async reqwest
/// client. The client pools connections and is shared by every simulated user.
///
/// # Timeouts and retries
/// Only a connect timeout is set. Requests are neither retried nor bounded in
/// total duration, so slow platform responses show up in the latency numbers.
pub struct XrayClient {
    client: reqwest::Client,
    base_url: String,
}

impl XrayClient {
    const CONNECT_TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `base_url`, e.g. `https://acme.jfrog.io`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(LoadTestError::ClientSetupError {
                base_url,
                details: "URL must start with http:// or https://".to_string(),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("xray-load/{}", version);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(Self::CONNECT_TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()
            .map_err(|e| LoadTestError::ClientSetupError {
                base_url: base_url.clone(),
                details: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a platform path
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl XrayPlatform for XrayClient {
    async fn send(&self, headers: &SessionHeaders, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);

        let builder = match request.method {
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        let response = builder
            .header(AUTHORIZATION, headers.authorization())
            .header(CONTENT_TYPE, headers.content_type())
            .json(&request.body)
            .send()
            .await
            .with_context(|| format!("{} {}", request.method, request.path))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading body of {} {}", request.method, request.path))?;

        Ok(ApiResponse::new(status, body))
    }
}
