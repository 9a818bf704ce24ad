use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subscription plan as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Response body for the public plan listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanListDto {
    pub success: bool,
    pub plans: Vec<PlanDto>,
}

/// Request body for creating a subscription plan.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub active: Option<bool>,
}

/// Request body for a partial plan update. Omitted fields are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub active: Option<bool>,
}

/// Response body for plan creation or update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanMutationDto {
    pub success: bool,
    pub message: String,
    pub plan: PlanDto,
}
