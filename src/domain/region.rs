//! Upstream endpoint resolution based on the user's edge region

/// Edge region codes served from US-hosted infrastructure.
const US_HOSTED_REGIONS: [&str; 4] = ["cle1", "iad1", "pdx1", "sfo1"];

/// A resolved upstream API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub base_url: String,
    pub api_key: String,
}

impl ApiEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Resolves the user's edge region to one of the two upstream endpoints.
///
/// Regions in the US-hosted set map to the US-east endpoint; everything
/// else, including unknown or empty codes, falls back to the EU endpoint.
/// The resolved endpoint is returned per request instead of being written
/// to shared state, so overlapping loads cannot race on it.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    us_east: ApiEndpoint,
    eu: ApiEndpoint,
}

impl EndpointResolver {
    pub fn new(us_east: ApiEndpoint, eu: ApiEndpoint) -> Self {
        Self { us_east, eu }
    }

    pub fn resolve(&self, region: &str) -> &ApiEndpoint {
        if US_HOSTED_REGIONS.contains(&region) {
            &self.us_east
        } else {
            &self.eu
        }
    }
}
