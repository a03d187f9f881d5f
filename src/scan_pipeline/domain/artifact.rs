use super::api_request::{ApiRequest, HttpMethod, RequestName};
use super::target::TargetCoordinates;
use super::watch::WATCH_NAME;
use crate::shared::Result;
use serde::Serialize;

/// Page size of the violations query
pub const VIOLATIONS_PAGE_LIMIT: u32 = 100;

/// Offset of the violations query; always the same page
pub const VIOLATIONS_PAGE_OFFSET: u32 = 1;

/// Artifact inside a repository, addressed by its manifest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRef {
    pub repo: String,
    pub path: String,
}

impl ArtifactRef {
    /// Manifest of the pushed image
    pub fn manifest_of(target: &TargetCoordinates) -> Self {
        Self {
            repo: target.repo_name().to_string(),
            path: target.manifest_path(),
        }
    }

    /// `POST /xray/api/v1/artifact/status`
    pub fn status_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(
            RequestName::CheckScanStatus,
            HttpMethod::Post,
            "/xray/api/v1/artifact/status",
            serde_json::to_value(self)?,
        ))
    }
}

/// Violations of `watch_1` on one artifact, first page only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationQuery {
    pub filters: ViolationFilters,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationFilters {
    pub watch_name: String,
    pub violation_type: String,
    pub min_severity: String,
    pub resources: ViolationResources,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationResources {
    pub artifacts: Vec<ArtifactRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub order_by: String,
    pub direction: String,
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    /// Oldest first, fixed window
    pub fn first_page() -> Self {
        Self {
            order_by: "created".to_string(),
            direction: "asc".to_string(),
            limit: VIOLATIONS_PAGE_LIMIT,
            offset: VIOLATIONS_PAGE_OFFSET,
        }
    }
}

impl ViolationQuery {
    pub fn for_artifact(artifact: ArtifactRef) -> Self {
        Self {
            filters: ViolationFilters {
                watch_name: WATCH_NAME.to_string(),
                violation_type: "Security".to_string(),
                min_severity: "High".to_string(),
                resources: ViolationResources {
                    artifacts: vec![artifact],
                },
            },
            pagination: Pagination::first_page(),
        }
    }

    /// `POST /xray/api/v1/violations`
    pub fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(
            RequestName::GetViolations,
            HttpMethod::Post,
            "/xray/api/v1/violations",
            serde_json::to_value(self)?,
        ))
    }
}
