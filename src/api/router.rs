use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::lists;
use super::screener;
use super::state::AppState;
use super::worker;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Pre-defined stock lists
        .route("/list/{slug}", get(lists::get_list))
        // Screener data
        .route("/api/stock-screener-data", post(screener::stock_screener_data))
        // Authentication
        .route("/auth/login", post(auth::login))
        .route("/auth/oauth2", post(auth::oauth2))
        // Service worker surface
        .route("/worker/push", post(worker::push))
        .route("/worker/message", post(worker::message))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
