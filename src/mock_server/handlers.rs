//! Test endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::BgpTest;

/// Wrap a test in the API's `{"test": [...]}` envelope.
fn envelope(test: &BgpTest) -> serde_json::Value {
    serde_json::json!({ "test": [test] })
}

fn not_found(id: i64) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "errorMessage": format!("No test found with ID: {}", id)
        })),
    )
        .into_response()
}

/// GET /tests/{id}
pub async fn get_test(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_test(id) {
        Some(test) => (StatusCode::OK, Json(envelope(test))).into_response(),
        None => not_found(id),
    }
}

/// POST /tests/bgp/new
pub async fn create_test(
    State(state): State<Arc<RwLock<MockState>>>,
    Json(test): Json<BgpTest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let created = state.create_test(test);
    (StatusCode::CREATED, Json(envelope(created)))
}

/// POST /tests/bgp/{id}/update
pub async fn update_test(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i64>,
    Json(changes): Json<BgpTest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.update_test(id, &changes) {
        Some(test) => (StatusCode::OK, Json(envelope(test))).into_response(),
        None => not_found(id),
    }
}

/// POST /tests/bgp/{id}/delete
pub async fn delete_test(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if state.delete_test(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(id)
    }
}
