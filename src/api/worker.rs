//! Service worker endpoints
//!
//! Push payloads and worker control messages arrive over HTTP and are
//! handed to the shared `ServiceWorker`.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::state::AppState;

/// POST /worker/push
///
/// Answers the built notification, or 204 when the payload is empty and
/// nothing would be shown.
pub async fn push(State(state): State<AppState>, body: Bytes) -> Response {
    match state.worker.handle_push(&body) {
        Some(notification) => (StatusCode::OK, Json(notification)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /worker/message
///
/// Accepts SKIP_WAITING and CACHE_URLS commands. Unknown messages are
/// acknowledged and ignored.
pub async fn message(State(state): State<AppState>, Json(body): Json<Value>) -> StatusCode {
    state.worker.handle_message(&body).await;
    StatusCode::NO_CONTENT
}
