//! DTOs for health check endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response with component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Reachability of each upstream dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    pub identity_provider: CheckStatus,
    pub record_store: CheckStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
