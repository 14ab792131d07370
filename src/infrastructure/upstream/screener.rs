//! Screener data client for the stock API

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{ApiEndpoint, DomainError};
use crate::infrastructure::http::HttpClient;

/// Seam for fetching screener result sets (for mocking the worker's fetch)
#[async_trait]
pub trait ScreenerFetch: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, rule_names: &[String]) -> Result<Vec<Value>, DomainError>;
}

/// Fetches screener data from the upstream stock API
#[derive(Debug, Clone)]
pub struct ScreenerClient {
    http: Arc<dyn HttpClient>,
    endpoint: ApiEndpoint,
}

impl ScreenerClient {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: ApiEndpoint) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl ScreenerFetch for ScreenerClient {
    /// `POST {base_url}/stock-screener-data` with the rule names.
    async fn fetch(&self, rule_names: &[String]) -> Result<Vec<Value>, DomainError> {
        let url = format!("{}/stock-screener-data", self.endpoint.base_url);
        let body = json!({ "ruleOfList": rule_names });

        let response = self
            .http
            .post_json(&url, vec![("X-API-KEY", &self.endpoint.api_key)], &body)
            .await?;

        match response {
            Value::Array(records) => Ok(records),
            other => Err(DomainError::provider(
                "stock-api",
                format!("Expected screener array, got: {}", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::mock::MockHttpClient;

    fn endpoint() -> ApiEndpoint {
        ApiEndpoint::new("https://useast.example.com", "key")
    }

    #[tokio::test]
    async fn test_fetch_screener_records() {
        let http = MockHttpClient::new().with_response(
            "https://useast.example.com/stock-screener-data",
            json!([{"symbol": "AAPL", "marketCap": 1}]),
        );
        let client = ScreenerClient::new(Arc::new(http), endpoint());

        let records = client.fetch(&["marketCap".to_string()]).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_non_array_response_is_rejected() {
        let http = MockHttpClient::new().with_response(
            "https://useast.example.com/stock-screener-data",
            json!({"message": "nope"}),
        );
        let client = ScreenerClient::new(Arc::new(http), endpoint());

        let err = client.fetch(&[]).await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }
}
