//! Stocknear Gateway
//!
//! Serves the site's pre-defined stock lists, the screener data endpoint,
//! authentication against a hosted backend, and the service worker surface
//! (push notifications and asset precaching). Upstream stock data is
//! fetched from a region-resolved API endpoint and memoized in a bounded
//! in-memory cache.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use domain::cache::Cache;
use domain::region::{ApiEndpoint, EndpointResolver};
use infrastructure::auth::HostedAuthClient;
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::http::{HttpClient, ReqwestClient};
use infrastructure::services::ListLoader;
use infrastructure::upstream::{ScreenerClient, StockListClient};
use infrastructure::workers::{ServiceWorker, spawn_screener_worker};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestClient::with_timeout(UPSTREAM_TIMEOUT)?);

    let resolver = Arc::new(EndpointResolver::new(
        ApiEndpoint::new(&config.upstream.us_east_url, &config.upstream.api_key),
        ApiEndpoint::new(&config.upstream.eu_url, &config.upstream.api_key),
    ));

    let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default().with_max_capacity(config.cache.max_capacity),
    ));
    info!(max_capacity = config.cache.max_capacity, "Cache initialized");

    let loader = Arc::new(ListLoader::new(cache.clone()));
    let stocks = Arc::new(StockListClient::new(http.clone()));
    let auth = Arc::new(HostedAuthClient::new(http.clone(), &config.auth.base_url));

    // Screener requests always go through the default-region endpoint; the
    // worker owns its own memoization keyed by the rule list.
    let screener_endpoint = resolver.resolve(&config.site.default_region).clone();
    let screener = spawn_screener_worker(
        Arc::new(ScreenerClient::new(http.clone(), screener_endpoint)),
        config.cache.screener_buffer,
    );

    let worker = Arc::new(ServiceWorker::new(
        http,
        &config.site.origin,
        &config.site.asset_version,
    ));

    Ok(AppState {
        resolver,
        loader,
        stocks,
        auth,
        cache,
        screener,
        worker,
        origin: config.site.origin.clone(),
        default_region: config.site.default_region.clone(),
    })
}
