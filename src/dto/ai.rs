use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the mock AI sleep analysis endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSleepDto {
    /// Base64-encoded audio capture.
    pub audio_data: Option<String>,
}

/// Analysis results derived deterministically from the decoded audio length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisDto {
    pub sleep_stage: String,
    pub snoring_detected: bool,
    pub snoring_probability: f64,
    pub coughing_detected: bool,
    pub coughing_probability: f64,
    pub movement_level: f64,
    pub recommendations: Vec<String>,
}

/// Response body for the mock AI sleep analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResponseDto {
    pub success: bool,
    pub analysis: AiAnalysisDto,
}
