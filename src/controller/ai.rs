use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        ai::{AiAnalysisResponseDto, AnalyzeSleepDto},
        api::ErrorDto,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::ai::AiService,
    state::AppState,
};

/// Tag for grouping AI analysis endpoints in OpenAPI documentation
pub static AI_TAG: &str = "ai";

/// Analyze a sleep audio recording.
///
/// Produces a deterministic report (sleep stage, snoring and coughing
/// probabilities, movement level, recommendations) derived from the decoded
/// payload. Identical uploads always yield identical reports; nothing is
/// persisted.
///
/// # Access Control
/// - User token required
///
/// # Arguments
/// - `state` - Application state containing the token service
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Base64-encoded audio capture
///
/// # Returns
/// - `200 OK` - Analysis report
/// - `400 Bad Request` - Missing or undecodable audio data
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/ai/analyze-sleep",
    tag = AI_TAG,
    request_body = AnalyzeSleepDto,
    responses(
        (status = 200, description = "Analysis report", body = AiAnalysisResponseDto),
        (status = 400, description = "Missing or undecodable audio data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn analyze_sleep(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AnalyzeSleepDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_user(&headers)?;

    let analysis = AiService::analyze(payload.audio_data)?;

    Ok((
        StatusCode::OK,
        Json(AiAnalysisResponseDto {
            success: true,
            analysis: analysis.into_dto(),
        }),
    ))
}
