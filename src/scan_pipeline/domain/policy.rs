use super::api_request::{ApiRequest, HttpMethod, RequestName};
use crate::shared::Result;
use serde::Serialize;

/// Name of the policy created on every iteration
pub const POLICY_NAME: &str = "sec_policy_1";

/// Policy type shared by the policy and the watch assignment
pub const POLICY_TYPE: &str = "security";

/// Security policy that flags high-severity findings.
///
/// The download-blocking action is present but inactive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityPolicy {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub policy_type: String,
    pub rules: Vec<PolicyRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRule {
    pub name: String,
    pub criteria: RuleCriteria,
    pub actions: RuleActions,
    pub priority: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCriteria {
    pub min_severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleActions {
    pub block_download: BlockDownload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDownload {
    pub active: bool,
}

impl SecurityPolicy {
    /// The fixed `sec_policy_1` policy
    pub fn block_high() -> Self {
        Self {
            name: POLICY_NAME.to_string(),
            description: "High severity CVEs".to_string(),
            policy_type: POLICY_TYPE.to_string(),
            rules: vec![PolicyRule {
                name: "block_high".to_string(),
                criteria: RuleCriteria {
                    min_severity: "high".to_string(),
                },
                actions: RuleActions {
                    block_download: BlockDownload { active: false },
                },
                priority: 1,
            }],
        }
    }

    /// `POST /xray/api/v2/policies`
    pub fn to_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(
            RequestName::CreatePolicy,
            HttpMethod::Post,
            "/xray/api/v2/policies",
            serde_json::to_value(self)?,
        ))
    }
}
