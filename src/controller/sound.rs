use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        sound::{CreateSoundDto, SoundDto, SoundListDto, SoundMutationDto, UpdateSoundDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::sound::{CreateSoundParams, Sound, UpdateSoundParams},
    service::sound::SoundService,
    state::AppState,
};

/// Tag for grouping sound library endpoints in OpenAPI documentation
pub static SOUND_TAG: &str = "sound";

/// Get the public sound library.
///
/// Lists active sounds alphabetically. Inactive sounds are only visible
/// through the admin listing.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Active sounds ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sounds",
    tag = SOUND_TAG,
    responses(
        (status = 200, description = "Active sounds ordered by name", body = SoundListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sounds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sounds = SoundService::new(&state.db).list_active().await?;

    let sounds: Vec<SoundDto> = sounds.into_iter().map(Sound::into_dto).collect();

    Ok((StatusCode::OK, Json(SoundListDto { success: true, sounds })))
}

/// Add a sound to the library.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Sound data (name, category, file path, optional premium flag and duration)
///
/// # Returns
/// - `201 Created` - Sound stored
/// - `400 Bad Request` - Missing fields
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/sounds",
    tag = SOUND_TAG,
    request_body = CreateSoundDto,
    responses(
        (status = 201, description = "Sound stored", body = SoundMutationDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sound(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSoundDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let sound = SoundService::new(&state.db)
        .create(CreateSoundParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SoundMutationDto {
            success: true,
            message: "Sound added successfully".to_string(),
            sound: sound.into_dto(),
        }),
    ))
}

/// Update a sound in the library.
///
/// Partial update: omitted fields keep their stored values.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Sound id from the path
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Sound updated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `404 Not Found` - No sound with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/sounds/{id}",
    tag = SOUND_TAG,
    params(
        ("id" = i32, Path, description = "Sound id")
    ),
    request_body = UpdateSoundDto,
    responses(
        (status = 200, description = "Sound updated", body = SoundMutationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Sound not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sound(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSoundDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let sound = SoundService::new(&state.db)
        .update(id, UpdateSoundParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(SoundMutationDto {
            success: true,
            message: "Sound updated successfully".to_string(),
            sound: sound.into_dto(),
        }),
    ))
}

/// Delete a sound from the library.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Sound id from the path
///
/// # Returns
/// - `200 OK` - Sound deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `404 Not Found` - No sound with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/sounds/{id}",
    tag = SOUND_TAG,
    params(
        ("id" = i32, Path, description = "Sound id")
    ),
    responses(
        (status = 200, description = "Sound deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Sound not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sound(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    SoundService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Sound deleted successfully")),
    ))
}
