use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        plan::{CreatePlanDto, PlanDto, PlanListDto, PlanMutationDto, UpdatePlanDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::plan::{CreatePlanParams, Plan, UpdatePlanParams},
    service::plan::PlanService,
    state::AppState,
};

/// Tag for grouping subscription plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "subscription_plan";

/// Get the active subscription plans, cheapest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Active plans ordered by price ascending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/subscriptions/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Active plans ordered by price", body = PlanListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = PlanService::new(&state.db).list_active().await?;

    let plans: Vec<PlanDto> = plans.into_iter().map(Plan::into_dto).collect();

    Ok((StatusCode::OK, Json(PlanListDto { success: true, plans })))
}

/// Create a subscription plan.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Plan data (name, price, duration, optional description and features)
///
/// # Returns
/// - `201 Created` - Plan stored
/// - `400 Bad Request` - Missing fields or negative price
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `409 Conflict` - A plan with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/subscriptions/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan stored", body = PlanMutationDto),
        (status = 400, description = "Missing fields or negative price", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Plan name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let plan = PlanService::new(&state.db)
        .create(CreatePlanParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanMutationDto {
            success: true,
            message: "Subscription plan created successfully".to_string(),
            plan: plan.into_dto(),
        }),
    ))
}

/// Update a subscription plan.
///
/// Partial update: omitted fields keep their stored values.
///
/// # Access Control
/// - Admin token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Plan id from the path
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Plan updated
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token lacks the admin role
/// - `404 Not Found` - No plan with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/subscriptions/plans/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Plan id")
    ),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanMutationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require_admin(&headers)?;

    let plan = PlanService::new(&state.db)
        .update(id, UpdatePlanParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlanMutationDto {
            success: true,
            message: "Subscription plan updated successfully".to_string(),
            plan: plan.into_dto(),
        }),
    ))
}
