use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const HUMANIZE_ROUTE: &str = "/api/humanize";
pub const HEALTH_ROUTE: &str = "/api/health";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeRequest {
    #[serde(default)]
    pub text: String,
}

/// Envelope returned by `POST /api/humanize`.
///
/// `success` defaults to `false` so bodies that only carry an `error` field
/// still decode as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humanized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HumanizeResponse {
    pub fn succeeded(original: impl Into<String>, humanized: impl Into<String>) -> Self {
        Self {
            success: true,
            original: Some(original.into()),
            humanized: Some(humanized.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            original: None,
            humanized: None,
            error: Some(error.into()),
        }
    }
}

impl From<ApiError> for HumanizeResponse {
    fn from(value: ApiError) -> Self {
        Self::failed(value.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
