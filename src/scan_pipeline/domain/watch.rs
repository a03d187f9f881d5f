use super::api_request::{ApiRequest, HttpMethod, RequestName};
use super::policy::{POLICY_NAME, POLICY_TYPE};
use super::target::TargetCoordinates;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Name of the watch created and applied on every iteration
pub const WATCH_NAME: &str = "watch_1";

/// Timestamp layout of the apply-watch date range: microseconds, UTC, `Z` suffix
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Watch binding the target repository (every path) to the security policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watch {
    pub general_data: WatchGeneralData,
    pub project_resources: ProjectResources,
    pub assigned_policies: Vec<AssignedPolicy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchGeneralData {
    pub name: String,
    pub description: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectResources {
    pub resources: Vec<WatchResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub bin_mgr_id: String,
    pub name: String,
    pub filters: Vec<ResourceFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceFilter {
    #[serde(rename = "type")]
    pub filter_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedPolicy {
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: String,
}

impl Watch {
    pub fn for_target(target: &TargetCoordinates) -> Self {
        Self {
            general_data: WatchGeneralData {
                name: WATCH_NAME.to_string(),
                description: "Watch for docker repo".to_string(),
                active: true,
            },
            project_resources: ProjectResources {
                resources: vec![WatchResource {
                    resource_type: "repository".to_string(),
                    bin_mgr_id: "default".to_string(),
                    name: target.repo_name().to_string(),
                    filters: vec![ResourceFilter {
                        filter_type: "regex".to_string(),
                        value: ".*".to_string(),
                    }],
                }],
            },
            assigned_policies: vec![AssignedPolicy {
                name: POLICY_NAME.to_string(),
                policy_type: POLICY_TYPE.to_string(),
            }],
        }
    }

    /// `POST /xray/api/v2/watches`
    pub fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(
            RequestName::CreateWatch,
            HttpMethod::Post,
            "/xray/api/v2/watches",
            serde_json::to_value(self)?,
        ))
    }
}

/// Re-evaluation of watches over a date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyWatchRequest {
    pub watch_names: Vec<String>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    /// Zero-width range: start and end are the same instant
    pub fn instant(at: DateTime<Utc>) -> Self {
        let stamp = at.format(DATE_FORMAT).to_string();
        Self {
            start_date: stamp.clone(),
            end_date: stamp,
        }
    }
}

impl ApplyWatchRequest {
    /// Applies `watch_1` over the single instant `at`
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            watch_names: vec![WATCH_NAME.to_string()],
            date_range: DateRange::instant(at),
        }
    }

    /// Applies `watch_1` over the current instant
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// `POST /xray/api/v1/applyWatch`
    pub fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(
            RequestName::ApplyWatch,
            HttpMethod::Post,
            "/xray/api/v1/applyWatch",
            serde_json::to_value(self)?,
        ))
    }
}
