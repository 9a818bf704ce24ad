//! Axum route configuration and OpenAPI documentation.

use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, ai, analytics, gift_code, health, plan, session, sound, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        user::login,
        user::profile,
        session::create_session,
        session::list_sessions,
        analytics::get_analytics,
        sound::list_sounds,
        sound::create_sound,
        sound::update_sound,
        sound::delete_sound,
        plan::list_plans,
        plan::create_plan,
        plan::update_plan,
        gift_code::create_gift_code,
        gift_code::list_gift_codes,
        gift_code::deactivate_gift_code,
        ai::analyze_sleep,
        admin::admin_login,
        admin::list_users,
        admin::list_sounds,
        admin::dashboard,
        health::health,
    ),
    tags(
        (name = "user", description = "Registration, login, and profile"),
        (name = "sleep_session", description = "Sleep session logging and history"),
        (name = "analytics", description = "Windowed sleep analytics"),
        (name = "sound", description = "Sound library"),
        (name = "subscription_plan", description = "Subscription plan catalog"),
        (name = "gift_code", description = "Gift code management"),
        (name = "ai", description = "Sleep audio analysis"),
        (name = "admin", description = "Admin console"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

/// Builds the API router with all routes and the Swagger UI.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users/profile", get(user::profile))
        .route("/api/sleep-sessions", post(session::create_session))
        .route("/api/sleep-sessions/{user_id}", get(session::list_sessions))
        .route("/api/sleep-analytics", get(analytics::get_analytics))
        .route("/api/sounds", get(sound::list_sounds))
        .route("/api/ai/analyze-sleep", post(ai::analyze_sleep))
        .route(
            "/api/subscriptions/plans",
            get(plan::list_plans).post(plan::create_plan),
        )
        .route("/api/subscriptions/plans/{id}", put(plan::update_plan))
        .route(
            "/api/gift-codes",
            post(gift_code::create_gift_code).get(gift_code::list_gift_codes),
        )
        .route(
            "/api/gift-codes/{code}/deactivate",
            put(gift_code::deactivate_gift_code),
        )
        .route("/api/admin/login", post(admin::admin_login))
        .route("/api/admin/users", get(admin::list_users))
        .route(
            "/api/admin/sounds",
            get(admin::list_sounds).post(sound::create_sound),
        )
        .route(
            "/api/admin/sounds/{id}",
            put(sound::update_sound).delete(sound::delete_sound),
        )
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/health", get(health::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
