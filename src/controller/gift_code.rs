use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        gift_code::{CreateGiftCodeDto, GiftCodeCreatedDto, GiftCodeDto, GiftCodeListDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::gift_code::{CreateGiftCodeParams, GiftCode},
    service::gift_code::GiftCodeService,
    state::AppState,
};

/// Tag for grouping gift code endpoints in OpenAPI documentation
pub static GIFT_CODE_TAG: &str = "gift_code";

/// Create a gift code granting a subscription plan.
///
/// The referenced plan must exist; its name is snapshotted onto the code at
/// creation. The submitted code is normalized to uppercase before storage,
/// so the `code` field in the response may differ in case from the request.
/// Codes must be unique after normalization.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Gift code data (code, plan id, optional expiry, max uses, description)
///
/// # Returns
/// - `201 Created` - Gift code stored
/// - `400 Bad Request` - Missing code or plan id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `404 Not Found` - Referenced plan does not exist
/// - `409 Conflict` - Code already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/gift-codes",
    tag = GIFT_CODE_TAG,
    request_body = CreateGiftCodeDto,
    responses(
        (status = 201, description = "Gift code stored; the returned code is uppercased", body = GiftCodeCreatedDto),
        (status = 400, description = "Missing code or plan id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Referenced plan not found", body = ErrorDto),
        (status = 409, description = "Code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gift_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGiftCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let gift_code = GiftCodeService::new(&state.db)
        .create(CreateGiftCodeParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GiftCodeCreatedDto {
            success: true,
            message: "Gift code created successfully".to_string(),
            gift_code: gift_code.into_dto(),
        }),
    ))
}

/// List all gift codes, newest first.
///
/// # Access Control
/// - Admin token required
///
/// # Returns
/// - `200 OK` - All codes ordered by creation time descending
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/gift-codes",
    tag = GIFT_CODE_TAG,
    responses(
        (status = 200, description = "All gift codes", body = GiftCodeListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_gift_codes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let codes = GiftCodeService::new(&state.db).list().await?;

    let gift_codes: Vec<GiftCodeDto> = codes.into_iter().map(GiftCode::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(GiftCodeListDto {
            success: true,
            gift_codes,
        }),
    ))
}

/// Deactivate a gift code by its code string.
///
/// Deactivation is permanent; there is no re-activation endpoint.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `code` - Code string from the path, matched case-insensitively
///
/// # Returns
/// - `200 OK` - Code deactivated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `404 Not Found` - No code with this value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/gift-codes/{code}/deactivate",
    tag = GIFT_CODE_TAG,
    params(
        ("code" = String, Path, description = "Gift code string")
    ),
    responses(
        (status = 200, description = "Code deactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Gift code not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_gift_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    GiftCodeService::new(&state.db).deactivate(&code).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Gift code deactivated successfully")),
    ))
}
