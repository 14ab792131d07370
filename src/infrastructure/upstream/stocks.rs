//! Filter-list client for the stock API

use std::sync::Arc;

use serde_json::json;

use crate::domain::{ApiEndpoint, DomainError, FilterCode, ListedStock, parse_listings};
use crate::infrastructure::http::HttpClient;

/// Fetches predefined stock lists from the upstream filter endpoint
#[derive(Debug, Clone)]
pub struct StockListClient {
    http: Arc<dyn HttpClient>,
}

impl StockListClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// `POST {base_url}/filter-stock-list` with the filter code and API key.
    /// The response is validated into listings at this boundary.
    pub async fn fetch_filter_list(
        &self,
        endpoint: &ApiEndpoint,
        code: FilterCode,
    ) -> Result<Vec<ListedStock>, DomainError> {
        let url = format!("{}/filter-stock-list", endpoint.base_url);
        let body = json!({ "filterList": code.as_str() });

        let response = self
            .http
            .post_json(&url, vec![("X-API-KEY", &endpoint.api_key)], &body)
            .await?;

        parse_listings(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::mock::MockHttpClient;
    use serde_json::json;

    fn endpoint() -> ApiEndpoint {
        ApiEndpoint::new("https://eu.example.com", "key")
    }

    #[tokio::test]
    async fn test_fetch_filter_list() {
        let http = MockHttpClient::new().with_response(
            "https://eu.example.com/filter-stock-list",
            json!([{"symbol": "BYDDY", "name": "BYD Company"}]),
        );
        let client = StockListClient::new(Arc::new(http));

        let listings = client
            .fetch_filter_list(&endpoint(), FilterCode::Cn)
            .await
            .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].symbol, "BYDDY");
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let http = MockHttpClient::new().with_upstream_error(
            "https://eu.example.com/filter-stock-list",
            500,
            "boom",
        );
        let client = StockListClient::new(Arc::new(http));

        let err = client
            .fetch_filter_list(&endpoint(), FilterCode::De)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Upstream { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let http = MockHttpClient::new().with_response(
            "https://eu.example.com/filter-stock-list",
            json!({"unexpected": "shape"}),
        );
        let client = StockListClient::new(Arc::new(http));

        let err = client
            .fetch_filter_list(&endpoint(), FilterCode::Gb)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
    }
}
