//! Application state for shared services

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::cache::Cache;
use crate::domain::region::EndpointResolver;
use crate::infrastructure::auth::AuthBackend;
use crate::infrastructure::services::ListLoader;
use crate::infrastructure::upstream::StockListClient;
use crate::infrastructure::workers::{ScreenerRequest, ServiceWorker};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<EndpointResolver>,
    pub loader: Arc<ListLoader>,
    pub stocks: Arc<StockListClient>,
    pub auth: Arc<dyn AuthBackend>,
    pub cache: Arc<dyn Cache>,
    pub screener: mpsc::Sender<ScreenerRequest>,
    pub worker: Arc<ServiceWorker>,
    pub origin: String,
    pub default_region: String,
}
