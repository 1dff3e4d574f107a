use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::alarms;
use crate::auth::{self, AppState};

/// Full HTTP surface: every route under `/api/v1`, any origin with
/// credentials, request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/", get(auth::hello))
        .route("/api/v1/createUser", post(auth::create_user))
        .route("/api/v1/login", post(auth::login))
        .route("/api/v1/createAlarm", post(alarms::create_alarm))
        .route("/api/v1/retrieveAlarms", post(alarms::retrieve_alarms))
        .route("/api/v1/updateAlarm", post(alarms::update_alarm))
        .route("/api/v1/deleteAlarm", post(alarms::delete_alarm))
        .with_state(state)
        // very_permissive mirrors the request origin, which is what allows
        // credentials alongside "any origin"
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
