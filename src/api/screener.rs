//! Stock screener endpoint backed by the screener worker

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::workers::ScreenerRequest;

/// POST body: the list of screener rules to evaluate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerParams {
    pub rule_of_list: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerResponse {
    pub message: String,
    pub stock_screener_data: Vec<Value>,
}

/// POST /api/stock-screener-data
pub async fn stock_screener_data(
    State(state): State<AppState>,
    Json(params): Json<ScreenerParams>,
) -> Result<Json<ScreenerResponse>, ApiError> {
    info!(rules = params.rule_of_list.len(), "Screener request");

    let (reply, rx) = oneshot::channel();
    state
        .screener
        .send(ScreenerRequest {
            rule_names: params.rule_of_list,
            reply,
        })
        .await
        .map_err(|_| ApiError::unavailable("Screener worker is not running"))?;

    let stock_screener_data = rx
        .await
        .map_err(|_| ApiError::internal("Screener worker dropped the request"))??;

    Ok(Json(ScreenerResponse {
        message: "success".to_string(),
        stock_screener_data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::testing;
    use serde_json::json;

    #[tokio::test]
    async fn test_screener_replies_with_filtered_records() {
        let state = testing::state_with_screener(vec![
            json!({"symbol": "AAPL", "marketCap": 1}),
            json!({"symbol": "XYZ", "marketCap": null}),
        ]);

        let Json(response) = stock_screener_data(
            State(state),
            Json(ScreenerParams {
                rule_of_list: vec!["marketCap".to_string()],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.message, "success");
        assert_eq!(response.stock_screener_data.len(), 1);
        assert_eq!(response.stock_screener_data[0]["symbol"], "AAPL");
    }

    #[tokio::test]
    async fn test_empty_rule_list_is_allowed() {
        let state = testing::state_with_screener(vec![json!({"symbol": "AAPL"})]);

        let Json(response) = stock_screener_data(
            State(state),
            Json(ScreenerParams {
                rule_of_list: Vec::new(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.stock_screener_data.len(), 1);
    }

    #[test]
    fn test_params_deserialize_camel_case() {
        let params: ScreenerParams =
            serde_json::from_value(json!({"ruleOfList": ["marketCap", "peRatio"]})).unwrap();

        assert_eq!(params.rule_of_list, vec!["marketCap", "peRatio"]);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = ScreenerResponse {
            message: "success".to_string(),
            stock_screener_data: vec![json!({"symbol": "AAPL"})],
        };

        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("stockScreenerData").is_some());
    }
}
