use super::api_request::{ApiRequest, HttpMethod, RequestName};
use super::target::TargetCoordinates;
use crate::shared::Result;
use serde::Serialize;

/// Local Docker repository with Xray indexing switched on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    pub key: String,
    pub package_type: String,
    pub rclass: String,
    pub xray_index: bool,
}

impl RepositoryConfig {
    pub fn for_target(target: &TargetCoordinates) -> Self {
        Self {
            key: target.repo_name().to_string(),
            package_type: "docker".to_string(),
            rclass: "local".to_string(),
            xray_index: true,
        }
    }

    /// `PUT /artifactory/api/repositories/{key}`
    pub fn to_request(&self) -> Result<ApiRequest> {
        let path = format!(
            "/artifactory/api/repositories/{}",
            urlencoding::encode(&self.key)
        );
        Ok(ApiRequest::new(
            RequestName::CreateRepository,
            HttpMethod::Put,
            path,
            serde_json::to_value(self)?,
        ))
    }
}
