pub mod alerts;
pub mod auth;
pub mod inventory;

use crate::health::{check_repository, HealthResponse};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};

pub async fn root() -> Redirect {
    Redirect::to("/login")
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db = check_repository(state.repo.as_ref()).await;
    let response = HealthResponse::from_database(db);

    // Return 503 if database is down, 200 otherwise
    let status_code = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
