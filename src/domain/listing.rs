//! Stock list routes, filter codes and the listing response schema

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Filter code accepted by the upstream `/filter-stock-list` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCode {
    Cn,
    De,
    Gb,
    Jp,
    SmallCap,
    BasicMaterials,
}

impl FilterCode {
    /// Wire representation sent as the `filterList` POST body field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cn => "CN",
            Self::De => "DE",
            Self::Gb => "GB",
            Self::Jp => "JP",
            Self::SmallCap => "smallCap",
            Self::BasicMaterials => "basic-materials",
        }
    }
}

/// A stock list route: URL slug, cache bucket and upstream filter code.
///
/// The slug doubles as the semantic cache bucket name, so each route
/// memoizes under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRoute {
    ChineseStocksUs,
    GermanStocksUs,
    UkStocksUs,
    JapaneseStocksUs,
    SmallCapStocks,
    BasicMaterialsSector,
}

impl ListRoute {
    pub const ALL: [ListRoute; 6] = [
        Self::ChineseStocksUs,
        Self::GermanStocksUs,
        Self::UkStocksUs,
        Self::JapaneseStocksUs,
        Self::SmallCapStocks,
        Self::BasicMaterialsSector,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "chinese-stocks-us" => Some(Self::ChineseStocksUs),
            "german-stocks-us" => Some(Self::GermanStocksUs),
            "uk-stocks-us" => Some(Self::UkStocksUs),
            "japanese-stocks-us" => Some(Self::JapaneseStocksUs),
            "small-cap-stocks" => Some(Self::SmallCapStocks),
            "basic-materials-sector" => Some(Self::BasicMaterialsSector),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::ChineseStocksUs => "chinese-stocks-us",
            Self::GermanStocksUs => "german-stocks-us",
            Self::UkStocksUs => "uk-stocks-us",
            Self::JapaneseStocksUs => "japanese-stocks-us",
            Self::SmallCapStocks => "small-cap-stocks",
            Self::BasicMaterialsSector => "basic-materials-sector",
        }
    }

    pub fn filter_code(&self) -> FilterCode {
        match self {
            Self::ChineseStocksUs => FilterCode::Cn,
            Self::GermanStocksUs => FilterCode::De,
            Self::UkStocksUs => FilterCode::Gb,
            Self::JapaneseStocksUs => FilterCode::Jp,
            Self::SmallCapStocks => FilterCode::SmallCap,
            Self::BasicMaterialsSector => FilterCode::BasicMaterials,
        }
    }
}

/// One listing row returned by the upstream filter endpoint.
///
/// Only the symbol is required; everything else the upstream sends is kept
/// verbatim in `extra` so new upstream columns pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListedStock {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Validates the upstream response body as a listing array.
///
/// Malformed payloads (non-array bodies, rows without a symbol) are
/// rejected with a typed error instead of being passed through.
pub fn parse_listings(body: Value) -> Result<Vec<ListedStock>, DomainError> {
    let listings: Vec<ListedStock> = serde_json::from_value(body).map_err(|e| {
        DomainError::provider("stock-api", format!("Malformed filter-list response: {}", e))
    })?;

    if let Some(bad) = listings.iter().find(|l| l.symbol.is_empty()) {
        return Err(DomainError::provider(
            "stock-api",
            format!("Listing with empty symbol: {:?}", bad.name),
        ));
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_slug_round_trips() {
        for route in ListRoute::ALL {
            assert_eq!(ListRoute::from_slug(route.slug()), Some(route));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(ListRoute::from_slug("moon-stocks"), None);
    }

    #[test]
    fn test_filter_codes_match_upstream_contract() {
        assert_eq!(ListRoute::ChineseStocksUs.filter_code().as_str(), "CN");
        assert_eq!(ListRoute::GermanStocksUs.filter_code().as_str(), "DE");
        assert_eq!(ListRoute::UkStocksUs.filter_code().as_str(), "GB");
        assert_eq!(ListRoute::JapaneseStocksUs.filter_code().as_str(), "JP");
        assert_eq!(ListRoute::SmallCapStocks.filter_code().as_str(), "smallCap");
        assert_eq!(
            ListRoute::BasicMaterialsSector.filter_code().as_str(),
            "basic-materials"
        );
    }

    #[test]
    fn test_parse_listings_keeps_extra_fields() {
        let body = json!([
            {"symbol": "BYDDY", "name": "BYD Company", "price": 58.2, "marketCap": 105000000000u64}
        ]);

        let listings = parse_listings(body).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].symbol, "BYDDY");
        assert_eq!(listings[0].extra["price"], json!(58.2));
    }

    #[test]
    fn test_parse_listings_rejects_non_array() {
        let err = parse_listings(json!({"error": "nope"})).unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[test]
    fn test_parse_listings_rejects_missing_symbol() {
        let err = parse_listings(json!([{"name": "No Symbol Corp"}])).unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[test]
    fn test_parse_listings_rejects_empty_symbol() {
        let err = parse_listings(json!([{"symbol": ""}])).unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[test]
    fn test_listing_serializes_back_with_extras() {
        let body = json!([{"symbol": "SAP", "name": "SAP SE", "changesPercentage": -0.4}]);
        let listings = parse_listings(body.clone()).unwrap();

        let round_tripped = serde_json::to_value(&listings).unwrap();
        assert_eq!(round_tripped, body);
    }
}
