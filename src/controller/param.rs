//! Shared query parameter types for controllers.

use serde::Deserialize;
use utoipa::IntoParams;

/// Offset pagination for listing endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParam {
    /// Maximum number of entries to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of entries to skip.
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    50
}

/// Analytics window selection.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AnalyticsParam {
    /// Window length: `7d`, `30d`, or `90d`. Unrecognized values fall back to `30d`.
    pub period: Option<String>,
}
