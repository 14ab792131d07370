//! Pre-defined stock list endpoints
//!
//! Each list slug maps to an upstream filter code. Results are memoized in
//! the shared cache under the slug, so the upstream is hit once per list
//! for the cache's lifetime regardless of which region produced the data.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::cache::CacheKey;
use crate::domain::listing::{ListRoute, ListedStock};

/// Header carrying the edge region code of the serving deployment
pub const REGION_HEADER: &str = "x-user-region";

/// Stock list payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub stock_list: Vec<ListedStock>,
}

/// GET /list/{slug}
pub async fn get_list(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ListResponse>, ApiError> {
    let route = ListRoute::from_slug(&slug)
        .ok_or_else(|| ApiError::not_found(format!("Unknown stock list: {}", slug)))?;

    let region = headers
        .get(REGION_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&state.default_region);
    let endpoint = state.resolver.resolve(region).clone();

    info!(list = route.slug(), region, "Loading stock list");

    let key = CacheKey::bucket(route.slug());
    let stocks = state.stocks.clone();
    let code = route.filter_code();

    let stock_list = state
        .loader
        .load_or_fetch(&key, || async move {
            stocks.fetch_filter_list(&endpoint, code).await
        })
        .await?;

    Ok(Json(ListResponse { stock_list }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::testing;
    use crate::infrastructure::http::mock::MockHttpClient;
    use axum::http::{HeaderValue, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let state = testing::state();

        let err = get_list(
            State(state),
            Path("moon-stocks".to_string()),
            HeaderMap::new(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_fetches_from_default_region_endpoint() {
        let http = Arc::new(MockHttpClient::new().with_response(
            format!("{}/filter-stock-list", testing::EU_URL),
            json!([{"symbol": "SAP", "name": "SAP SE"}]),
        ));
        let state = testing::state_with_http(http);

        let Json(response) = get_list(
            State(state),
            Path("german-stocks-us".to_string()),
            HeaderMap::new(),
        )
        .await
        .unwrap();

        assert_eq!(response.stock_list.len(), 1);
        assert_eq!(response.stock_list[0].symbol, "SAP");
    }

    #[tokio::test]
    async fn test_us_region_header_routes_to_us_east() {
        let http = Arc::new(MockHttpClient::new().with_response(
            format!("{}/filter-stock-list", testing::US_EAST_URL),
            json!([{"symbol": "BYDDY"}]),
        ));
        let state = testing::state_with_http(http);

        let mut headers = HeaderMap::new();
        headers.insert(REGION_HEADER, HeaderValue::from_static("iad1"));

        let Json(response) = get_list(
            State(state),
            Path("chinese-stocks-us".to_string()),
            headers,
        )
        .await
        .unwrap();

        assert_eq!(response.stock_list[0].symbol, "BYDDY");
    }

    #[tokio::test]
    async fn test_second_load_is_served_from_cache() {
        let http = Arc::new(MockHttpClient::new().with_response(
            format!("{}/filter-stock-list", testing::EU_URL),
            json!([{"symbol": "SHEL"}]),
        ));
        let state = testing::state_with_http(http.clone());

        for _ in 0..2 {
            get_list(
                State(state.clone()),
                Path("uk-stocks-us".to_string()),
                HeaderMap::new(),
            )
            .await
            .unwrap();
        }

        // One upstream request despite two loads.
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let http = Arc::new(MockHttpClient::new().with_upstream_error(
            format!("{}/filter-stock-list", testing::EU_URL),
            500,
            "boom",
        ));
        let state = testing::state_with_http(http);

        let err = get_list(
            State(state),
            Path("small-cap-stocks".to_string()),
            HeaderMap::new(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
