use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::grid::Pc4;
use super::profile::UserProfile;
use super::service::{AdvisoryService, AdvisoryServiceError};

/// Router builder exposing the recommendation endpoints.
pub fn advisory_router(service: Arc<AdvisoryService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/actions", get(actions_handler))
        .route(
            "/api/v1/actions/:action_id/breakdown",
            post(breakdown_handler),
        )
        .route("/api/v1/grid/:pc4", get(grid_status_handler))
        .with_state(service)
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(profile): Json<UserProfile>,
) -> Response {
    let response = service.recommend(&profile);
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn actions_handler(State(service): State<Arc<AdvisoryService>>) -> Response {
    let actions = service.actions();
    let payload = json!({
        "count": actions.len(),
        "actions": actions,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn breakdown_handler(
    State(service): State<Arc<AdvisoryService>>,
    Path(action_id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Response {
    match service.explain(&profile, &action_id) {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(error @ AdvisoryServiceError::UnknownAction(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn grid_status_handler(
    State(service): State<Arc<AdvisoryService>>,
    Path(pc4): Path<String>,
) -> Response {
    let status = service.grid_status(Pc4(pc4));
    (StatusCode::OK, Json(status)).into_response()
}
